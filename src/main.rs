use anyhow::{bail, Context, Result};
use baby_games::app::{App, InputResult};
use baby_games::build_info;
use baby_games::config::{LaunchOptions, Settings};
use baby_games::core::constants::{INPUT_POLL_MS, MAX_FRAME_DT_MS};
use baby_games::games::GameKind;
use baby_games::menu::MenuScreen;
use baby_games::ui;
use baby_games::utils::logging;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Parsed command line.
#[derive(Debug, Default)]
struct Cli {
    options: LaunchOptions,
    game: Option<GameKind>,
}

enum Command {
    Run(Cli),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut cli = Cli::default();
    cli.options.debug = LaunchOptions::debug_from_env();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--debug" | "-d" => cli.options.debug = true,
            "--deck" => {
                let Some(dir) = iter.next() else {
                    bail!("--deck needs a directory");
                };
                cli.options.deck = Some(PathBuf::from(dir));
            }
            other => match GameKind::parse(other) {
                Some(kind) if cli.game.is_none() => cli.game = Some(kind),
                _ => bail!("Unknown argument: {}\nRun 'baby-games --help' for usage.", other),
            },
        }
    }
    Ok(Command::Run(cli))
}

fn print_help() {
    println!("Baby Games - small terminal games for little ones\n");
    println!("Usage: baby-games [options] [game]\n");
    println!("Games:");
    println!("  flashcards     Picture flashcards to paint on");
    println!("  fighter        Type Fighter");
    println!("  shooter        Scrolling Shooter");
    println!("  blaster        Math Blasters\n");
    println!("Options:");
    println!("  --deck <dir>   Play flashcards from this directory");
    println!("  --debug        Use the test deck and verbose logging (or set DEBUG=1)");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args)? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            println!("{}", build_info::version_string());
            return Ok(());
        }
        Command::Run(cli) => cli,
    };

    match logging::init(cli.options.debug) {
        Ok(path) => tracing::info!(log = %path.display(), version = %build_info::version_string(), "Starting"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let settings = Settings::load();
    let mut app = App::new(settings, cli.options);
    if let Some(kind) = cli.game {
        if kind == GameKind::Flashcards {
            app.launcher.screen = MenuScreen::FlashcardOptions;
        } else {
            app.start(kind, &mut rand::thread_rng());
        }
    }

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    } else {
        tracing::info!("Goodbye");
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            let event = event::read()?;
            if app.handle_event(event, &mut rng) == InputResult::Quit {
                return Ok(());
            }
        }

        let now = Instant::now();
        let dt_ms = (now.duration_since(last_frame).as_millis() as u64).min(MAX_FRAME_DT_MS);
        last_frame = now;
        app.tick(dt_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_game_and_deck() {
        let Command::Run(cli) = parse_args(&args(&["--deck", "/tmp/cards", "shooter"])).unwrap()
        else {
            panic!("expected run");
        };
        assert_eq!(cli.game, Some(GameKind::Shooter));
        assert_eq!(cli.options.deck, Some(PathBuf::from("/tmp/cards")));
    }

    #[test]
    fn test_parse_rejects_unknown_and_missing_value() {
        assert!(parse_args(&args(&["chess"])).is_err());
        assert!(parse_args(&args(&["--deck"])).is_err());
        assert!(parse_args(&args(&["shooter", "fighter"])).is_err());
    }

    #[test]
    fn test_parse_help_wins() {
        assert!(matches!(
            parse_args(&args(&["--debug", "--help"])).unwrap(),
            Command::Help
        ));
        assert!(matches!(
            parse_args(&args(&["--version"])).unwrap(),
            Command::Version
        ));
    }
}

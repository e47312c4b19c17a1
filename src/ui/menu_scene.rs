//! Launcher and flashcard options rendering.

use crate::app::App;
use crate::games::GameKind;
use crate::menu::{MenuScreen, OptionRow, LAUNCHER_ROWS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);
    match app.launcher.screen {
        MenuScreen::Launcher => render_launcher(frame, area, app),
        MenuScreen::FlashcardOptions => render_flashcard_options(frame, area, app),
    }
}

fn item_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_launcher(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Baby Games ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LAUNCHER_ROWS as u16 + 1),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .split(inner);

    let selected = app.launcher.selected;
    let mut items: Vec<ListItem> = GameKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let prefix = if i == selected { "> " } else { "  " };
            let mut spans = vec![Span::styled(
                format!("{}{}", prefix, kind.title()),
                item_style(i == selected),
            )];
            if *kind == GameKind::TypeFighter {
                spans.push(Span::styled(
                    format!("  < {} >", app.settings.fighter_gender.dir_name()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    let quit_selected = selected == GameKind::ALL.len();
    items.push(
        ListItem::new(format!("{}Quit", if quit_selected { "> " } else { "  " }))
            .style(item_style(quit_selected)),
    );
    frame.render_widget(List::new(items), chunks[0]);

    let mut details = Vec::new();
    if let Some(kind) = app.launcher.selected_game() {
        details.push(Line::from(Span::styled(
            kind.blurb(),
            Style::default().fg(Color::Gray),
        )));
    }
    if let Some(notice) = &app.notice {
        details.push(Line::from(""));
        details.push(Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: true }),
        chunks[1],
    );

    let help = Paragraph::new("[↑/↓] Navigate  [←/→] Change  [Enter] Play  [Esc] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn render_flashcard_options(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Flashcards ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let selected = app.launcher.option_selected;
    let items: Vec<ListItem> = OptionRow::ALL
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let prefix = if i == selected { "> " } else { "  " };
            let mut spans = vec![Span::styled(
                format!("{}{}", prefix, row.label()),
                item_style(i == selected),
            )];
            if let Some(value) = row.value(&app.settings) {
                spans.push(Span::styled(
                    format!(": < {} >", value),
                    Style::default().fg(Color::Cyan),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    frame.render_widget(List::new(items), inner);

    if inner.height > OptionRow::ALL.len() as u16 + 1 {
        let help_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        let help = Paragraph::new("[↑/↓] Navigate  [←/→] Change  [Enter] Select  [Esc] Back")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, help_area);
    }
}

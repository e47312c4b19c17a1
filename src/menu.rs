//! Launcher menu and the flashcard play menu.

use crate::config::Settings;
use crate::games::fighter::Gender;
use crate::games::GameKind;

/// Input actions for the menus (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Left,
    Right,
    Select, // Enter
    Back,   // Esc
    Other,
}

/// What the caller should do after a menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(GameKind),
    /// Settings were edited and should be saved.
    SettingsChanged,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuScreen {
    Launcher,
    FlashcardOptions,
}

/// Rows of the flashcard play menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRow {
    Start,
    Mode,
    ColorSchema,
    FaceStamp,
    Recycle,
    Return,
}

impl OptionRow {
    pub const ALL: [OptionRow; 6] = [
        OptionRow::Start,
        OptionRow::Mode,
        OptionRow::ColorSchema,
        OptionRow::FaceStamp,
        OptionRow::Recycle,
        OptionRow::Return,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Mode => "Select mode",
            Self::ColorSchema => "Select color schema",
            Self::FaceStamp => "Face stamp",
            Self::Recycle => "Recycle flashcards",
            Self::Return => "Return to main menu",
        }
    }

    /// Current value shown next to selector rows.
    pub fn value(self, settings: &Settings) -> Option<&'static str> {
        let params = &settings.flashcards;
        match self {
            Self::Mode => Some(params.mode.name()),
            Self::ColorSchema => Some(params.color_schema.name()),
            Self::FaceStamp => Some(yes_no(params.face_stamp)),
            Self::Recycle => Some(yes_no(params.recycle_flashcards)),
            Self::Start | Self::Return => None,
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Number of launcher rows: every game plus Quit.
pub const LAUNCHER_ROWS: usize = GameKind::ALL.len() + 1;

#[derive(Debug, Clone)]
pub struct Launcher {
    pub screen: MenuScreen,
    pub selected: usize,
    pub option_selected: usize,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher {
    pub fn new() -> Self {
        Self {
            screen: MenuScreen::Launcher,
            selected: 0,
            option_selected: 0,
        }
    }

    /// Game under the cursor, or `None` on the Quit row.
    pub fn selected_game(&self) -> Option<GameKind> {
        GameKind::ALL.get(self.selected).copied()
    }

    pub fn selected_option(&self) -> OptionRow {
        OptionRow::ALL[self.option_selected.min(OptionRow::ALL.len() - 1)]
    }

    pub fn navigate_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        let max = self.row_count() - 1;
        let cursor = self.cursor_mut();
        if *cursor < max {
            *cursor += 1;
        }
    }

    fn row_count(&self) -> usize {
        match self.screen {
            MenuScreen::Launcher => LAUNCHER_ROWS,
            MenuScreen::FlashcardOptions => OptionRow::ALL.len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.screen {
            MenuScreen::Launcher => &mut self.selected,
            MenuScreen::FlashcardOptions => &mut self.option_selected,
        }
    }

    /// Process a menu input against the settings the menu edits.
    pub fn process_input(&mut self, input: MenuInput, settings: &mut Settings) -> MenuAction {
        match input {
            MenuInput::Up => {
                self.navigate_up();
                MenuAction::None
            }
            MenuInput::Down => {
                self.navigate_down();
                MenuAction::None
            }
            MenuInput::Other => MenuAction::None,
            _ => match self.screen {
                MenuScreen::Launcher => self.launcher_input(input, settings),
                MenuScreen::FlashcardOptions => self.options_input(input, settings),
            },
        }
    }

    fn launcher_input(&mut self, input: MenuInput, settings: &mut Settings) -> MenuAction {
        match (input, self.selected_game()) {
            (MenuInput::Select, Some(GameKind::Flashcards)) => {
                self.screen = MenuScreen::FlashcardOptions;
                self.option_selected = 0;
                MenuAction::None
            }
            (MenuInput::Select, Some(kind)) => MenuAction::Start(kind),
            (MenuInput::Select, None) | (MenuInput::Back, _) => MenuAction::Quit,
            (MenuInput::Left | MenuInput::Right, Some(GameKind::TypeFighter)) => {
                settings.fighter_gender = match settings.fighter_gender {
                    Gender::Male => Gender::Female,
                    Gender::Female => Gender::Male,
                };
                MenuAction::SettingsChanged
            }
            _ => MenuAction::None,
        }
    }

    fn options_input(&mut self, input: MenuInput, settings: &mut Settings) -> MenuAction {
        let params = &mut settings.flashcards;
        let row = self.selected_option();
        let forward = input != MenuInput::Left;

        match (input, row) {
            (MenuInput::Back, _) | (MenuInput::Select, OptionRow::Return) => {
                self.screen = MenuScreen::Launcher;
                MenuAction::None
            }
            (MenuInput::Select, OptionRow::Start) => MenuAction::Start(GameKind::Flashcards),
            (_, OptionRow::Start | OptionRow::Return) => MenuAction::None,
            (_, OptionRow::Mode) => {
                params.mode = if forward {
                    params.mode.next()
                } else {
                    params.mode.prev()
                };
                MenuAction::SettingsChanged
            }
            (_, OptionRow::ColorSchema) => {
                params.color_schema = if forward {
                    params.color_schema.next()
                } else {
                    params.color_schema.prev()
                };
                MenuAction::SettingsChanged
            }
            (_, OptionRow::FaceStamp) => {
                params.face_stamp = !params.face_stamp;
                MenuAction::SettingsChanged
            }
            (_, OptionRow::Recycle) => {
                params.recycle_flashcards = !params.recycle_flashcards;
                MenuAction::SettingsChanged
            }
        }
    }
}

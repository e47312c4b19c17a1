//! Frame shared by every game screen: bordered playfield, two-line status
//! bar, side panel and the game-over card.

use crate::games::{GameOutcome, OutcomeKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const STATUS_BAR_HEIGHT: u16 = 2;

/// `(key, action)` pair shown under the status line.
pub type Hint<'a> = (&'a str, &'a str);

pub const FORFEIT_HINTS: &[Hint] = &[("[Esc]", "Confirm"), ("[Any]", "Cancel")];

/// Areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Playfield, inside the outer border.
    pub content: Rect,
    /// Two lines under the playfield.
    pub status_bar: Rect,
    /// Right-hand column, not yet framed.
    pub info_panel: Rect,
}

/// Clear `area`, draw the titled border and carve it up.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   playfield                     │  panel      │
/// │ status + hints                  │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [left, info_panel] = split(
        inner,
        Direction::Horizontal,
        Constraint::Min(20),
        Constraint::Length(panel_width),
    );
    let [content, status_bar] = split(
        left,
        Direction::Vertical,
        Constraint::Min(4),
        Constraint::Length(STATUS_BAR_HEIGHT),
    );

    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split(area: Rect, direction: Direction, first: Constraint, second: Constraint) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([first, second])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Centered status line, with the key hints beneath it when there is room.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    hints: &[Hint],
) {
    if area.height == 0 {
        return;
    }
    let mut lines = vec![Line::from(Span::styled(
        status_text.to_string(),
        Style::default().fg(status_color),
    ))];
    if area.height >= STATUS_BAR_HEIGHT && !hints.is_empty() {
        lines.push(hint_line(hints));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn hint_line(hints: &[Hint]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Quit confirmation in the status bar. Returns `true` if it was drawn.
pub fn render_forfeit_status_bar(frame: &mut Frame, area: Rect, forfeit_pending: bool) -> bool {
    if forfeit_pending {
        render_status_bar(frame, area, "Quit this game?", Color::Red, FORFEIT_HINTS);
    }
    forfeit_pending
}

/// Bordered " Info " panel. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let panel = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = panel.inner(area);
    frame.render_widget(panel, area);
    inner
}

/// One `label value` row for an info panel.
pub fn stat_line(label: &'static str, value: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value.into(), Style::default().fg(color)),
    ])
}

pub fn outcome_color(kind: OutcomeKind) -> Color {
    match kind {
        OutcomeKind::Win => Color::Green,
        OutcomeKind::Loss => Color::Red,
        OutcomeKind::Forfeit => Color::Gray,
        OutcomeKind::Ended => Color::Yellow,
    }
}

/// Card centered over the playfield announcing how the game ended.
pub fn render_game_over_overlay(frame: &mut Frame, area: Rect, outcome: &GameOutcome) {
    let card = centered(area, 48, 8);
    if card.width < 4 || card.height < 3 {
        return;
    }
    frame.render_widget(Clear, card);

    let color = outcome_color(outcome.kind);
    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::from(Span::styled(
            outcome.title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            outcome.message.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Press any key]",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let body = Paragraph::new(lines)
        .block(border)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, card);
}

/// `width x height` rectangle centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub mod game_common;
pub mod prestige_confirm;
pub mod shop_panel;
mod stats_panel;

use clicker::core::{GameView, OfflineReport};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::VecDeque;

/// Maximum number of lines kept in the message log.
pub const MAX_LOG_LINES: usize = 50;

/// Modal drawn on top of the game screen; it captures all input while open.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    OfflineWelcome(OfflineReport),
    PrestigeConfirm,
    ResetConfirm,
}

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, view: &GameView, log: &VecDeque<String>, overlay: &Overlay) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(8), // Message log
            Constraint::Length(3), // Footer
        ])
        .split(size);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(v_chunks[0]);

    stats_panel::draw_stats_panel(frame, h_chunks[0], view);
    shop_panel::draw_shop_panel(frame, h_chunks[1], view);
    draw_log(frame, v_chunks[1], log);
    draw_footer(frame, v_chunks[2]);

    match overlay {
        Overlay::None => {}
        Overlay::OfflineWelcome(report) => game_common::render_offline_welcome(frame, size, report),
        Overlay::PrestigeConfirm => prestige_confirm::draw_prestige_confirm(frame, view),
        Overlay::ResetConfirm => prestige_confirm::draw_reset_confirm(frame),
    }
}

fn draw_log(frame: &mut Frame, area: Rect, log: &VecDeque<String>) {
    // Newest entries at the bottom, clipped to what fits
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = log
        .iter()
        .skip(log.len().saturating_sub(visible))
        .map(|entry| Line::from(Span::raw(entry.as_str())))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log"));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hints = Line::from(vec![
        Span::styled("[Space]", key),
        Span::raw(" Attack  "),
        Span::styled("[1-7]", key),
        Span::raw(" Hire  "),
        Span::styled("[Q/W/E]", key),
        Span::raw(" Skill  "),
        Span::styled("[A/S/D]", key),
        Span::raw(" Artifact  "),
        Span::styled("[B]", key),
        Span::raw(" Boss  "),
        Span::styled("[P]", key),
        Span::raw(" Prestige  "),
        Span::styled("[R]", key),
        Span::raw(" Reset  "),
        Span::styled("[Esc]", key),
        Span::raw(" Quit"),
    ]);

    let footer = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

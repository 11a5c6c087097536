//! Shared overlay helpers.

use clicker::core::OfflineReport;
use clicker::utils::{format_number, time_text};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Render the "Welcome Back" overlay for offline progression.
pub fn render_offline_welcome(frame: &mut Frame, area: Rect, report: &OfflineReport) {
    let modal_height = if report.levels_gained > 0 { 10 } else { 9 };
    let modal_area = centered_rect(area, 44, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .title(" Welcome back ");

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let away = u64::try_from(report.elapsed_seconds).unwrap_or(0);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Away for: {}", time_text(away)),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  ⚔️  Kills:  {:>10}", format_number(report.kills as f64)),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            format!("  💰 Gold:   {:>10}", format_number(report.gold as f64)),
            Style::default().fg(Color::Yellow),
        )),
    ];

    if report.levels_gained > 0 {
        lines.push(Line::from(Span::styled(
            format!(
                "  📈 Stages: {:>10}",
                format!("+{} (now {})", report.levels_gained, report.level_after)
            ),
            Style::default().fg(Color::Green),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

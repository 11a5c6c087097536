use super::game_common::centered_rect;
use clicker::core::GameView;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn confirm_hints<'a>(yes: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("      "),
        Span::styled(
            yes,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            "[N] Cancel",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Draws the prestige confirmation dialog as an overlay
pub fn draw_prestige_confirm(frame: &mut Frame, view: &GameView) {
    let dialog_area = centered_rect(frame.size(), 50, 14);
    frame.render_widget(Clear, dialog_area);

    let title = Line::from(vec![Span::styled(
        " Confirm Prestige ",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Prestiging will reset:",
            Style::default().fg(Color::Red),
        )),
        Line::from("  - Gold, stage and kills"),
        Line::from("  - All heroes"),
        Line::from("  - Cleared boss gates"),
        Line::from(""),
        Line::from(Span::styled(
            "You will gain:",
            Style::default().fg(Color::Green),
        )),
        Line::from(vec![
            Span::raw("  - Souls: "),
            Span::styled(
                format!("+{}", view.pending_souls),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  - Damage multiplier: "),
            Span::styled(
                format!("x{:.1}", view.soul_multiplier),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" -> "),
            Span::styled(
                format!("x{:.1}", view.multiplier_after_prestige),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        confirm_hints("[Y] Yes, Prestige"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, dialog_area);
}

/// Draws the wipe-save confirmation dialog
pub fn draw_reset_confirm(frame: &mut Frame) {
    let dialog_area = centered_rect(frame.size(), 46, 9);
    frame.render_widget(Clear, dialog_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete the save and start over?",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("  Souls and artifacts are lost too."),
        Line::from(""),
        confirm_hints("[Y] Yes, Reset"),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Reset Game ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(paragraph, dialog_area);
}

use clicker::catalog::HeroType;
use clicker::core::GameView;
use clicker::utils::format_number;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Keys bound to skills and artifacts, in catalog order.
pub const SKILL_KEYS: [char; 3] = ['q', 'w', 'e'];
pub const ARTIFACT_KEYS: [char; 3] = ['a', 's', 'd'];

/// Draws the right column: heroes for sale, skills and artifacts
pub fn draw_shop_panel(frame: &mut Frame, area: Rect, view: &GameView) {
    let hero_rows = view.heroes.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_rows),
            Constraint::Length(view.skills.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    draw_heroes(frame, chunks[0], view);
    draw_skills(frame, chunks[1], view);
    draw_artifacts(frame, chunks[2], view);
}

fn draw_heroes(frame: &mut Frame, area: Rect, view: &GameView) {
    let lines: Vec<Line> = view
        .heroes
        .iter()
        .enumerate()
        .map(|(index, hero)| {
            let cost_style = if hero.affordable {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let kind = match hero.hero_type {
                HeroType::Click => "click",
                HeroType::Dps => "dps",
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", index + 1), Style::default().fg(Color::Cyan)),
                Span::raw(format!("{:<22}", hero.name)),
                Span::styled(format!("x{:<4}", hero.owned), Style::default().fg(Color::White)),
                Span::styled(
                    format!("+{} {:<6}", format_number(hero.value as f64), kind),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(format!("{:>7}g", format_number(hero.cost as f64)), cost_style),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Heroes"));
    frame.render_widget(paragraph, area);
}

fn draw_skills(frame: &mut Frame, area: Rect, view: &GameView) {
    let lines: Vec<Line> = view
        .skills
        .iter()
        .zip(SKILL_KEYS)
        .map(|(skill, key)| {
            let status = if !skill.unlocked {
                Span::styled(
                    format!("unlocks at stage {}", skill.unlock_level),
                    Style::default().fg(Color::DarkGray),
                )
            } else if skill.ready {
                Span::styled(
                    "READY",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!("{:.1}s", skill.cooldown_left_ms as f64 / 1000.0),
                    Style::default().fg(Color::Yellow),
                )
            };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", key.to_ascii_uppercase()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!("{} {:<14}", skill.icon, skill.name)),
                status,
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Skills"));
    frame.render_widget(paragraph, area);
}

fn draw_artifacts(frame: &mut Frame, area: Rect, view: &GameView) {
    let lines: Vec<Line> = view
        .artifacts
        .iter()
        .zip(ARTIFACT_KEYS)
        .map(|(artifact, key)| {
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", key.to_ascii_uppercase()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!("{} {:<18}", artifact.icon, artifact.name)),
                Span::styled(
                    format!("Lv {}", artifact.level),
                    Style::default().fg(Color::Magenta),
                ),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Artifacts"));
    frame.render_widget(paragraph, area);
}

use clicker::core::GameView;
use clicker::utils::format_number;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the left column: progress header, the monster and the boss clock
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Monster HP
            Constraint::Length(3), // Boss timer or gate prompt
            Constraint::Min(0),    // Prestige info
        ])
        .split(area);

    draw_header(frame, chunks[0], view);
    draw_monster_hp(frame, chunks[1], view);
    draw_boss_status(frame, chunks[2], view);
    draw_prestige_info(frame, chunks[3], view);
}

fn draw_header(frame: &mut Frame, area: Rect, view: &GameView) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Stage {}", view.level),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("Kills {}/{}", view.kills, view.kills_required),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("Gate {}", view.max_reachable_stage + 1),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("💰 Gold:  {}", format_number(view.gold as f64)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("👆 Click: {}", format_number(view.click_damage as f64)),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("⚔️  DPS:   {}", format_number(view.dps as f64)),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("👻 Souls: {} (x{:.1})", view.souls, view.soul_multiplier),
            Style::default().fg(Color::Magenta),
        )),
    ];

    let header =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Progress"));
    frame.render_widget(header, area);
}

fn draw_monster_hp(frame: &mut Frame, area: Rect, view: &GameView) {
    let title = if view.boss.is_some() { "Boss" } else { "Monster" };

    if view.monster_dead {
        let text = Paragraph::new(Line::from(Span::styled(
            "Spawning...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(text, area);
        return;
    }

    let ratio = if view.monster_max_hp == 0 {
        0.0
    } else {
        (view.monster_hp / view.monster_max_hp as f64).clamp(0.0, 1.0)
    };
    let label = format!(
        "{}/{}",
        format_number(view.monster_hp.ceil()),
        format_number(view.monster_max_hp as f64)
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(label)
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn draw_boss_status(frame: &mut Frame, area: Rect, view: &GameView) {
    let block = Block::default().borders(Borders::ALL).title("Boss Gate");

    if let Some(boss) = &view.boss {
        let ratio = (boss.time_left_ms as f64 / boss.duration_ms.max(1) as f64).clamp(0.0, 1.0);
        let color = if boss.time_left_ms > 10_000 {
            Color::Green
        } else if boss.time_left_ms > 5_000 {
            Color::Yellow
        } else {
            Color::Red
        };
        let gauge = Gauge::default()
            .block(block.title(format!(" Stage {} ", boss.stage)))
            .gauge_style(Style::default().fg(color))
            .label(format!("{:.1}s left", boss.time_left_ms as f64 / 1000.0))
            .ratio(ratio);
        frame.render_widget(gauge, area);
        return;
    }

    let line = if view.waiting_boss {
        Line::from(Span::styled(
            format!("Boss of stage {} awaits - press [B]", view.level + 1),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("Cleared up to stage {}", view.highest_cleared_boss_stage),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_prestige_info(frame: &mut Frame, area: Rect, view: &GameView) {
    let line = if view.can_prestige {
        Line::from(vec![
            Span::styled(
                format!("Prestige now for +{} souls", view.pending_souls),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw(format!(" (x{:.1})  [P]", view.multiplier_after_prestige)),
        ])
    } else {
        Line::from(Span::styled(
            format!("Reach stage {} to prestige", view.min_prestige_stage),
            Style::default().fg(Color::DarkGray),
        ))
    };
    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Prestige"));
    frame.render_widget(paragraph, area);
}

//! Scoring tab view: inputs, per-weapon desirability and the event log

use super::{bar, section_header, value_line};
use crate::app::{ammo_label, App};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Inputs
            Constraint::Min(0),    // Scores
        ])
        .split(chunks[0]);

    draw_inputs(f, app, left[0]);
    draw_scores(f, app, left[1]);
    draw_event_log(f, app, chunks[1]);
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let in_hand = app
        .system
        .current()
        .map(|w| w.name().to_string())
        .unwrap_or_else(|| "-".to_string());

    let bar_width = area.width.saturating_sub(22) as usize;
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:16}", "Distance"), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:>6.0} ", app.distance),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(bar(app.distance, 1000.0, bar_width), Style::default().fg(Color::Blue)),
        ]),
        value_line("In hand", in_hand),
        value_line("Method", app.method.name().to_string()),
        value_line("Time", format!("{:.1}s", app.time_elapsed)),
        match &app.last_simulation {
            Some(sim) => value_line(
                "Last engagement",
                format!("{} shots, {:.2}/s, {} switches", sim.shots, sim.fire_rate(), sim.switches),
            ),
            None => value_line("Last engagement", "none (press s)".to_string()),
        },
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Inputs "));

    f.render_widget(paragraph, area);
}

fn draw_scores(f: &mut Frame, app: &App, area: Rect) {
    let current = app.system.current().map(|w| w.id());
    let bar_width = area.width.saturating_sub(40) as usize;

    let mut lines = vec![section_header("Desirability"), Line::from("")];

    for (i, weapon) in app.system.weapons().iter().enumerate() {
        let in_hand = current == Some(weapon.id());
        let marker = if in_hand { "▶ " } else { "  " };
        let name_style = if in_hand {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if i == app.inspected {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let score = weapon.last_desirability();
        let score_color = if score <= 0.0 {
            Color::DarkGray
        } else if in_hand {
            Color::Green
        } else {
            Color::White
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{}{:18}", marker, weapon.name()), name_style),
            Span::styled(format!("{:>6.1} ", score), Style::default().fg(score_color)),
            Span::styled(bar(score, 100.0, bar_width), Style::default().fg(score_color)),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "    ammo {:>3}/{:<3}  ideal {:>4.0}  {}",
                ammo_label(weapon),
                weapon.max_rounds(),
                weapon.ideal_range(),
                weapon.method().name()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Weapons "));

    f.render_widget(paragraph, area);
}

fn draw_event_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .event_log
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.starts_with("━━━") {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if line.contains("Switched") {
                Style::default().fg(Color::Yellow)
            } else if line.contains("fired") {
                Style::default().fg(Color::Green)
            } else if line.contains("Not ready") {
                Style::default().fg(Color::Red)
            } else if line.starts_with("  ") {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Events "));

    f.render_widget(list, area);
}

//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("1-4", "Jump to tab (Scoring/Sets/Rules/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("←/h  →/l", "Move the target 10 units"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Scoring"),
        key_line("↑/k  ↓/j", "Add/remove a round on the inspected weapon"),
        key_line("f / Space", "Fire the weapon in hand"),
        key_line("t", "Advance time by 1 second"),
        key_line("s", "Simulate a 30 second engagement"),
        key_line("m", "Switch centroid / mean of maxima"),
        key_line("r", "Reset all weapons"),
        Line::from(""),
        section_header("Sets & Rules"),
        key_line("w", "Inspect the next weapon"),
        key_line("↑/↓", "Scroll"),
        Line::from(""),
        section_header("Inference"),
        Line::from(""),
        Line::from(Span::styled("Fuzzify:", Style::default().fg(Color::Yellow))),
        Line::from("  Each input sets a degree of membership in every set of its variable"),
        Line::from(""),
        Line::from(Span::styled("Rules:", Style::default().fg(Color::Yellow))),
        Line::from("  AND = min of the terms, OR = max, VERY = squared, FAIRLY = square root"),
        Line::from("  Rules sharing a consequent keep the strongest firing (max)"),
        Line::from(""),
        Line::from(Span::styled("Centroid:", Style::default().fg(Color::Yellow))),
        Line::from("  Σ x·μ(x) / Σ μ(x) over samples of the clipped output sets"),
        Line::from(""),
        Line::from(Span::styled("Mean of maxima:", Style::default().fg(Color::Yellow))),
        Line::from("  Average of each set's plateau midpoint weighted by its firing strength"),
        Line::from(""),
        Line::from(Span::styled("Selection:", Style::default().fg(Color::Yellow))),
        Line::from("  Highest desirability wins; empty weapons score 0; ties keep carry order"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Inference "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

//! Sets tab view

use super::{bar, degree_color, section_header};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(weapon) = app.inspected_weapon() else {
        let paragraph = Paragraph::new("No weapons loaded")
            .block(Block::default().borders(Borders::ALL).title(" Sets "));
        f.render_widget(paragraph, area);
        return;
    };

    let output = weapon.inputs().output.as_str();
    let mut lines = Vec::new();

    for variable in weapon.module().variables() {
        let role = if variable.name() == output { "output" } else { "input" };
        lines.push(section_header(&format!("{} ({})", variable.name(), role)));
        lines.push(Line::from(Span::styled(
            format!(
                "  {:20} {:14} {:>20}  {:>14}  {:>14}",
                "Set", "Shape", "Points", "Degree", "Firing"
            ),
            Style::default().fg(Color::DarkGray),
        )));

        for set in variable.sets() {
            let shape = set.shape();
            let degree = set.degree();
            let firing = set.firing_strength();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:20} ", set.name()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:14} ", shape.kind.name()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>20}  ", format!("{}/{}/{}", shape.left, shape.peak, shape.right)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:.2} {} ", degree, bar(degree, 1.0, 9)),
                    Style::default().fg(degree_color(degree)),
                ),
                Span::styled(
                    format!("{:.2} {}", firing, bar(firing, 1.0, 9)),
                    Style::default().fg(degree_color(firing)),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2}", weapon.last_desirability()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} at {:.0} units)", weapon.method().name(), app.distance),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Sets: {} ", weapon.name())),
        )
        .scroll((u16::try_from(app.detail_scroll).unwrap_or(u16::MAX), 0));

    f.render_widget(paragraph, area);
}

//! Rules tab view

use super::{bar, degree_color};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(weapon) = app.inspected_weapon() else {
        let paragraph = Paragraph::new("No weapons loaded")
            .block(Block::default().borders(Borders::ALL).title(" Rules "));
        f.render_widget(paragraph, area);
        return;
    };

    let module = weapon.module();
    let variables = module.variables();
    let rules = module.rules();
    let fired = rules.iter().filter(|r| r.truth(variables) > 0.0).count();

    let items: Vec<ListItem> = rules
        .iter()
        .enumerate()
        .skip(app.detail_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, rule)| {
            let truth = rule.truth(variables);
            let text_style = if truth > 0.0 {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:.2} {} ", truth, bar(truth, 1.0, 8)),
                    Style::default().fg(degree_color(truth)),
                ),
                Span::styled(module.describe_rule(rule), text_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Rules: {} ({} of {} firing) ",
                weapon.name(),
                fired,
                rules.len()
            )),
    );

    f.render_widget(list, area);
}

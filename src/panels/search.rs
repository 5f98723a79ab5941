//! src/panels/search.rs
//!
//! Search form panel: region, game name, and tag line fields, plus the
//! query status line. While a query is pending the submit affordance flips
//! to a cancel affordance.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::FormField;
use crate::query::QueryPhase;
use crate::state::SharedApp;

pub struct SearchPanel {
    shared: SharedApp,
    pub focused: bool,
}

impl SearchPanel {
    pub fn new(shared: SharedApp) -> SearchPanel {
        SearchPanel {
            shared,
            focused: false,
        }
    }

    fn field_line<'a>(&self, field: FormField, value: String, active: bool) -> Line<'a> {
        let marker = if active && self.focused { "> " } else { "  " };
        let style = if active && self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<10}", field.label()), style),
            Span::raw(value),
        ])
    }
}

impl crate::ui::Panel for SearchPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let state = self.shared.read().unwrap();
        let form = &state.form;

        let mut lines = vec![
            self.field_line(
                FormField::GameName,
                form.query.game_name.clone(),
                form.field == FormField::GameName,
            ),
            self.field_line(
                FormField::TagLine,
                form.query.tag_line.clone(),
                form.field == FormField::TagLine,
            ),
            self.field_line(
                FormField::Region,
                format!("< {} >", form.query.region.as_str()),
                form.field == FormField::Region,
            ),
        ];

        lines.push(Line::raw(""));
        lines.push(match state.query.phase() {
            QueryPhase::Pending { query } => Line::styled(
                format!("Analysing {}#{}... Enter cancels", query.game_name, query.tag_line),
                Style::default().fg(Color::Yellow),
            ),
            QueryPhase::Error { message } => {
                Line::styled(message.clone(), Style::default().fg(Color::Red))
            }
            QueryPhase::Success { query, .. } => Line::styled(
                format!("Showing {}#{}", query.game_name, query.tag_line),
                Style::default().fg(Color::Green),
            ),
            QueryPhase::Idle => Line::raw("Enter submits"),
        });

        let mut block = Block::default().title("Search").borders(Borders::ALL);
        if self.focused {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::FetchError;
    use crate::query::SearchQuery;
    use crate::state::shared_app;
    use crate::ui::Panel;
    use ratatui::{Terminal, backend::TestBackend};
    use reqwest::StatusCode;

    #[test]
    fn renders_every_query_phase() {
        let shared = shared_app();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        for phase in 0..3 {
            {
                let mut state = shared.write().unwrap();
                let q = SearchQuery {
                    game_name: "Faker".to_string(),
                    tag_line: "KR1".to_string(),
                    ..Default::default()
                };
                state.query.cancel();
                let generation = state.query.submit(&q).unwrap();
                match phase {
                    0 => {} // leave pending
                    1 => state
                        .query
                        .resolve(generation, Err(FetchError::Status(StatusCode::NOT_FOUND))),
                    _ => state.query.resolve(
                        generation,
                        Ok([("Faker".to_string(), [5.0, 5.0])].into_iter().collect()),
                    ),
                }
            }
            let mut panel = SearchPanel::new(shared.clone());
            panel.focused = true;
            terminal.draw(|f| panel.draw(f, f.area())).unwrap();
        }
    }
}

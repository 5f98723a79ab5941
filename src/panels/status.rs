//! src/panels/status.rs
//!
//! Status panel: baseline lifecycle, query phase, and the current view
//! window.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::query::QueryPhase;
use crate::state::{BaselineState, SharedApp};

pub struct StatusPanel {
    shared: SharedApp,
}

impl StatusPanel {
    pub fn new(shared: SharedApp) -> StatusPanel {
        StatusPanel { shared }
    }
}

impl crate::ui::Panel for StatusPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let state = self.shared.read().unwrap();

        let baseline = match &state.baseline {
            BaselineState::Loading => Span::styled("loading", Style::default().fg(Color::Yellow)),
            BaselineState::Ready(points) => Span::raw(format!("{} players", points.len())),
            BaselineState::Failed(msg) => Span::styled(msg.clone(), Style::default().fg(Color::Red)),
        };
        let query = match state.query.phase() {
            QueryPhase::Idle => Span::raw("idle"),
            QueryPhase::Pending { .. } => {
                Span::styled("pending", Style::default().fg(Color::Yellow))
            }
            QueryPhase::Success { query, .. } => Span::styled(
                format!("{}#{}", query.game_name, query.tag_line),
                Style::default().fg(Color::Green),
            ),
            QueryPhase::Error { .. } => Span::styled("error", Style::default().fg(Color::Red)),
        };

        let window = state.view.window(state.fitted_domain());
        let lines = vec![
            Line::from(vec![
                Span::styled("baseline  ", Style::default().add_modifier(Modifier::BOLD)),
                baseline,
            ]),
            Line::from(vec![
                Span::styled("query     ", Style::default().add_modifier(Modifier::BOLD)),
                query,
            ]),
            Line::raw(format!(
                "x [{:.2}, {:.2}]  y [{:.2}, {:.2}]",
                window.x.0, window.x.1, window.y.0, window.y.1
            )),
        ];

        let block = Block::default().title("Status").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

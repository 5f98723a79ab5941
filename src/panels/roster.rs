//! src/panels/roster.rs
//!
//! Roster panel: lists point labels with their source color, a terminal
//! stand-in for a chart tooltip. Queried entries come first so they stay
//! visible however small the panel is.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::chart::PointSource;
use crate::state::SharedApp;

pub struct RosterPanel {
    shared: SharedApp,
}

impl RosterPanel {
    pub fn new(shared: SharedApp) -> RosterPanel {
        RosterPanel { shared }
    }
}

impl crate::ui::Panel for RosterPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let state = self.shared.read().unwrap();
        let merged = state.merged_points();
        let height = area.height.saturating_sub(2) as usize;

        // Queried population on top of the list, then the baseline.
        let lines: Vec<Line> = merged
            .iter()
            .filter(|p| p.source == PointSource::Queried)
            .chain(merged.iter().filter(|p| p.source == PointSource::Baseline))
            .take(height)
            .map(|p| {
                let mut style = Style::default().fg(p.source.fill());
                if p.source == PointSource::Queried {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::styled(p.key.clone(), style),
                    Span::raw(format!("  ({:.2}, {:.2})", p.x, p.y)),
                ])
            })
            .collect();

        let block = Block::default().title("Roster").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

//! src/panels/scatter.rs
//!
//! Chart adapter: renders the merged point populations inside the current
//! view window, one dataset per source so the populations stay visually
//! separable. Queried points are pushed after baseline points and therefore
//! draw on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::chart::{LabeledPoint, PointSource};
use crate::query::QueryPhase;
use crate::state::{BaselineState, SharedApp};

pub struct ScatterPanel {
    shared: SharedApp,
    pub focused: bool,
}

impl ScatterPanel {
    pub fn new(shared: SharedApp) -> ScatterPanel {
        ScatterPanel {
            shared,
            focused: false,
        }
    }

    fn source_xy(points: &[LabeledPoint], source: PointSource) -> Vec<(f64, f64)> {
        points
            .iter()
            .filter(|p| p.source == source)
            .map(LabeledPoint::xy)
            .collect()
    }

    fn axis_labels(range: (f64, f64)) -> Vec<String> {
        let span = range.1 - range.0;
        (0..3)
            .map(|i| format!("{:.1}", range.0 + span * (i as f64) / 2.0))
            .collect()
    }
}

impl crate::ui::Panel for ScatterPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let state = self.shared.read().unwrap();
        let merged = state.merged_points();
        let domain = state.fitted_domain();
        let window = state.view.window(domain);

        let baseline_count = state.baseline.points().len();
        let queried_count = merged.len() - baseline_count;
        let status = match (&state.baseline, state.query.phase()) {
            (BaselineState::Failed(msg), _) => msg.clone(),
            (BaselineState::Loading, _) => "loading pro stats...".to_string(),
            (_, QueryPhase::Pending { .. }) => "analysing...".to_string(),
            _ => String::new(),
        };
        let stats = Paragraph::new(format!(
            "pros: {}  you: {}  zoom: x{:.2}  {}",
            baseline_count,
            queried_count,
            state.view.zoom_factor(),
            status
        ))
        .block(Block::default().title("Stats").borders(Borders::ALL));
        f.render_widget(stats, chunks[0]);

        // Owned coordinate vectors outlive the Chart widget below.
        let baseline_xy = Self::source_xy(&merged, PointSource::Baseline);
        let queried_xy = Self::source_xy(&merged, PointSource::Queried);

        let mut datasets = vec![
            Dataset::default()
                .name(PointSource::Baseline.label())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(PointSource::Baseline.fill()))
                .data(baseline_xy.as_slice()),
        ];
        if !queried_xy.is_empty() {
            datasets.push(
                Dataset::default()
                    .name(PointSource::Queried.label())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Scatter)
                    .style(
                        Style::default()
                            .fg(PointSource::Queried.fill())
                            .add_modifier(Modifier::BOLD),
                    )
                    .data(queried_xy.as_slice()),
            );
        }

        let mut block = Block::default().title("UMAP scatter").borders(Borders::ALL);
        if self.focused {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .bounds([window.x.0, window.x.1])
                    .labels(Self::axis_labels(window.x)),
            )
            .y_axis(
                Axis::default()
                    .bounds([window.y.0, window.y.1])
                    .labels(Self::axis_labels(window.y)),
            );
        f.render_widget(chart, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{RawCoordinateMap, normalize};
    use crate::state::shared_app;
    use crate::ui::Panel;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(shared: SharedApp) {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let panel = ScatterPanel::new(shared);
        terminal.draw(|f| panel.draw(f, f.area())).unwrap();
    }

    #[test]
    fn renders_empty_state_without_panicking() {
        // No baseline, no query: degenerate (0,0) domain, empty canvas.
        render(shared_app());
    }

    #[test]
    fn renders_both_populations() {
        let shared = shared_app();
        {
            let mut state = shared.write().unwrap();
            let raw: RawCoordinateMap = [
                ("Faker".to_string(), [1.0, 2.0]),
                ("Caps".to_string(), [3.0, 4.0]),
            ]
            .into_iter()
            .collect();
            state.baseline = BaselineState::Ready(normalize(&raw, PointSource::Baseline));

            let generation = state
                .query
                .submit(&crate::query::SearchQuery {
                    game_name: "Searched".to_string(),
                    tag_line: "EUW1".to_string(),
                    ..Default::default()
                })
                .unwrap();
            let queried: RawCoordinateMap =
                [("Searched".to_string(), [5.0, 5.0])].into_iter().collect();
            state.query.resolve(generation, Ok(queried));
        }
        render(shared);
    }

    #[test]
    fn renders_failed_baseline_notice() {
        let shared = shared_app();
        shared.write().unwrap().baseline =
            BaselineState::Failed("Network error: backend unreachable".to_string());
        render(shared);
    }
}

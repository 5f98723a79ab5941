//! src/app.rs
//!
//! Top-level application: wires the backend client to the shared state,
//! spawns the fetch workers, and runs the terminal UI loop.
//!
//! One UI thread handles input and rendering at a fixed frame cadence, the
//! way the rest of the app expects: all state mutation happens either here
//! or in a worker resolving through the query machine, never both at once.
//!
//! ## Controls
//!
//! - **Tab** — switch focus between the chart and the search form.
//! - Chart focus: arrows pan, `+`/`-` zoom, `r` resets the view, `q` quits.
//! - Search focus: type into the focused field, Up/Down switch fields,
//!   Left/Right cycle the region, Enter submits (or cancels while a query
//!   is pending), Esc cancels.
//! - **Ctrl+C** quits from anywhere.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Constraint;
use tracing::{info, warn};

use crate::chart::{PointSource, normalize};
use crate::config;
use crate::form::FormField;
use crate::net::ApiClient;
use crate::panels::{HelpPanel, RosterPanel, ScatterPanel, SearchPanel, StatusPanel, TitlePanel};
use crate::query::SearchQuery;
use crate::state::{BaselineState, SharedApp, shared_app};
use crate::ui::{Node, cols, leaf, rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Chart,
    Search,
}

/// Fetch the baseline population once; the session cache is simply that
/// this worker never runs again.
fn start_baseline_fetch(api: Arc<ApiClient>, shared: SharedApp) {
    thread::spawn(move || {
        let result = api.fetch_baseline();
        let mut state = shared.write().unwrap();
        state.baseline = match result {
            Ok(raw) => {
                info!(players = raw.len(), "baseline loaded");
                BaselineState::Ready(normalize(&raw, PointSource::Baseline))
            }
            Err(err) => {
                warn!(%err, "baseline fetch failed");
                BaselineState::Failed(err.display_message())
            }
        };
    });
}

/// Run one analysis request. The machine accepts the result only while
/// still pending on `generation`; a canceled or superseded request resolves
/// into nothing.
fn start_analysis_fetch(
    api: Arc<ApiClient>,
    shared: SharedApp,
    generation: u64,
    query: SearchQuery,
) {
    thread::spawn(move || {
        let result = api.fetch_analysis(&query);
        shared.write().unwrap().query.resolve(generation, result);
    });
}

fn build_frame(shared: &SharedApp, focus: Focus) -> Node {
    let mut scatter = ScatterPanel::new(shared.clone());
    scatter.focused = focus == Focus::Chart;
    let mut search = SearchPanel::new(shared.clone());
    search.focused = focus == Focus::Search;

    let sidebar = rows(
        vec![
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Min(3),
        ],
        vec![
            leaf(search),
            leaf(StatusPanel::new(shared.clone())),
            leaf(RosterPanel::new(shared.clone())),
        ],
    );

    rows(
        vec![
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ],
        vec![
            leaf(TitlePanel::new("rift-scatter: pro-stats proximity")),
            cols(
                vec![Constraint::Percentage(65), Constraint::Percentage(35)],
                vec![leaf(scatter), sidebar],
            ),
            leaf(HelpPanel::new(
                "TAB=Focus  arrows=Pan  +/-=Zoom  R=Reset view  ENTER=Search/Cancel  Q=Quit",
            )),
        ],
    )
}

fn handle_chart_key(shared: &SharedApp, key: KeyEvent, running: &mut bool) {
    let mut state = shared.write().unwrap();
    let domain = state.fitted_domain();
    match key.code {
        KeyCode::Char('q') => *running = false,
        KeyCode::Char('+') | KeyCode::Char('=') => state.view.zoom_in(),
        KeyCode::Char('-') => state.view.zoom_out(),
        KeyCode::Char('r') => state.view.reset(),
        KeyCode::Left => state.view.pan(domain, -1.0, 0.0),
        KeyCode::Right => state.view.pan(domain, 1.0, 0.0),
        KeyCode::Up => state.view.pan(domain, 0.0, 1.0),
        KeyCode::Down => state.view.pan(domain, 0.0, -1.0),
        _ => {}
    }
}

fn handle_search_key(api: &Arc<ApiClient>, shared: &SharedApp, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let mut state = shared.write().unwrap();
            if state.query.is_pending() {
                // submit toggles to cancel while pending
                state.query.cancel();
            } else {
                let query = state.form.query.clone();
                if let Some(generation) = state.query.submit(&query) {
                    drop(state);
                    start_analysis_fetch(api.clone(), shared.clone(), generation, query);
                }
            }
        }
        KeyCode::Esc => shared.write().unwrap().query.cancel(),
        KeyCode::Up => shared.write().unwrap().form.prev_field(),
        KeyCode::Down => shared.write().unwrap().form.next_field(),
        KeyCode::Left => shared.write().unwrap().form.cycle_region_left(),
        KeyCode::Right => shared.write().unwrap().form.cycle_region_right(),
        KeyCode::Backspace => shared.write().unwrap().form.backspace(),
        KeyCode::Char(c) => {
            let mut state = shared.write().unwrap();
            if state.form.field == FormField::Region {
                // region cycles on space too, for symmetry with left/right
                if c == ' ' {
                    state.form.cycle_region_right();
                }
            } else {
                state.form.insert_char(c);
            }
        }
        _ => {}
    }
}

pub fn run() -> Result<()> {
    let settings = config::load_settings()?;
    info!(api_url = %settings.api_url, "starting");
    let api = Arc::new(ApiClient::new(&settings.api_url)?);
    let shared = shared_app();

    // Warm the backend out of cold start; response and failure are ignored.
    {
        let api = api.clone();
        thread::spawn(move || api.warmup());
    }
    start_baseline_fetch(api.clone(), shared.clone());

    let mut terminal = ratatui::init();
    let mut focus = Focus::Search;
    let frame_time = Duration::from_millis(50);
    let mut running = true;

    while running {
        let frame_start = Instant::now();

        let root = build_frame(&shared, focus);
        terminal.draw(|f| root.draw(f, f.area()))?;

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    running = false;
                    continue;
                }
                if key.code == KeyCode::Tab {
                    focus = match focus {
                        Focus::Chart => Focus::Search,
                        Focus::Search => Focus::Chart,
                    };
                    continue;
                }
                match focus {
                    Focus::Chart => handle_chart_key(&shared, key, &mut running),
                    Focus::Search => handle_search_key(&api, &shared, key),
                }
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }

    ratatui::restore();
    Ok(())
}

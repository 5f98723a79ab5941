//! src/state.rs
//!
//! Shared application state: the session-cached baseline, the query
//! machine, the view transform, and the search form.
//!
//! One UI thread owns the render/input loop; fetch worker threads write
//! results back through the lock. All derived values (merged points, fitted
//! domain) are pure recomputations from the latest accepted source data.

use std::sync::{Arc, RwLock};

use crate::chart::{ChartDomain, LabeledPoint, ViewState, merge};
use crate::form::SearchForm;
use crate::query::QueryMachine;

/// Lifecycle of the baseline dataset: fetched once, never re-fetched.
#[derive(Debug)]
pub enum BaselineState {
    Loading,
    Ready(Vec<LabeledPoint>),
    /// Fetch failed; the chart keeps rendering from an empty baseline.
    Failed(String),
}

impl BaselineState {
    /// Empty-but-valid while loading or failed.
    pub fn points(&self) -> &[LabeledPoint] {
        match self {
            BaselineState::Ready(points) => points,
            _ => &[],
        }
    }
}

pub struct AppState {
    pub baseline: BaselineState,
    pub query: QueryMachine,
    pub view: ViewState,
    pub form: SearchForm,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            baseline: BaselineState::Loading,
            query: QueryMachine::new(),
            view: ViewState::default(),
            form: SearchForm::default(),
        }
    }

    /// Baseline followed by the active query result, if any.
    pub fn merged_points(&self) -> Vec<LabeledPoint> {
        merge(self.baseline.points(), self.query.queried_points())
    }

    /// Auto-fit domain over everything currently displayed.
    pub fn fitted_domain(&self) -> ChartDomain {
        ChartDomain::fit(&self.merged_points())
    }
}

/// The authoritative shared state object used across threads.
pub type SharedApp = Arc<RwLock<AppState>>;

pub fn shared_app() -> SharedApp {
    Arc::new(RwLock::new(AppState::new()))
}

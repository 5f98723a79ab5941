//! src/query.rs
//!
//! On-demand analysis lifecycle: `idle -> pending -> {success, error}`,
//! with `pending` cancelable back to `idle`.
//!
//! Every outstanding request carries the generation number the machine
//! issued for it. Cancelling or resubmitting bumps the generation, so a
//! late response for an abandoned request can never be accepted; it is
//! unconditionally discarded on the generation check, not merely
//! out-prioritized.

use tracing::debug;

use crate::chart::{LabeledPoint, PointSource, RawCoordinateMap, normalize};
use crate::net::FetchError;

/// Riot routing region for the analysis request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Region {
    #[default]
    Euw,
    Eune,
    Na,
    Kr,
    Jp,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::Euw, Region::Eune, Region::Na, Region::Kr, Region::Jp];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Euw => "EUW",
            Region::Eune => "EUNE",
            Region::Na => "NA",
            Region::Kr => "KR",
            Region::Jp => "JP",
        }
    }

    pub fn next(self) -> Region {
        let i = Region::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Region::ALL[(i + 1) % Region::ALL.len()]
    }

    pub fn prev(self) -> Region {
        let i = Region::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Region::ALL[(i + Region::ALL.len() - 1) % Region::ALL.len()]
    }
}

/// One analysis request. Lives only for the duration of its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub region: Region,
    pub game_name: String,
    pub tag_line: String,
}

impl SearchQuery {
    /// A query fires only when both name parts are non-empty.
    pub fn is_submittable(&self) -> bool {
        !self.game_name.trim().is_empty() && !self.tag_line.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QueryPhase {
    Idle,
    Pending { query: SearchQuery },
    Success { query: SearchQuery, points: Vec<LabeledPoint> },
    Error { message: String },
}

/// The query state machine. Owns the active generation counter.
#[derive(Debug)]
pub struct QueryMachine {
    phase: QueryPhase,
    generation: u64,
}

impl Default for QueryMachine {
    fn default() -> Self {
        Self {
            phase: QueryPhase::Idle,
            generation: 0,
        }
    }
}

impl QueryMachine {
    pub fn new() -> QueryMachine {
        QueryMachine::default()
    }

    pub fn phase(&self) -> &QueryPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, QueryPhase::Pending { .. })
    }

    /// Points of the active query result, if one is displayed.
    pub fn queried_points(&self) -> Option<&[LabeledPoint]> {
        match &self.phase {
            QueryPhase::Success { points, .. } => Some(points),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            QueryPhase::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Start a new query. Returns the generation number the caller must
    /// attach to the fetch, or `None` when nothing was started.
    ///
    /// Submitting while pending is a cancel, not a new query (the submit
    /// affordance toggles to cancel in the UI). An unsubmittable query is a
    /// no-op in every phase.
    pub fn submit(&mut self, query: &SearchQuery) -> Option<u64> {
        if self.is_pending() {
            self.cancel();
            return None;
        }
        if !query.is_submittable() {
            return None;
        }
        self.generation += 1;
        self.phase = QueryPhase::Pending {
            query: query.clone(),
        };
        debug!(generation = self.generation, "query submitted");
        Some(self.generation)
    }

    /// Abandon the in-flight request. Its eventual response is discarded by
    /// the generation check in [`QueryMachine::resolve`].
    pub fn cancel(&mut self) {
        if self.is_pending() {
            self.generation += 1;
            self.phase = QueryPhase::Idle;
            debug!(generation = self.generation, "query canceled");
        }
    }

    /// Deliver a fetch result for `generation`. Accepted only while still
    /// pending on that exact generation; anything else is stale and dropped.
    pub fn resolve(&mut self, generation: u64, result: Result<RawCoordinateMap, FetchError>) {
        let QueryPhase::Pending { query } = &self.phase else {
            debug!(generation, "stale response dropped (not pending)");
            return;
        };
        if generation != self.generation {
            debug!(
                generation,
                active = self.generation,
                "stale response dropped (superseded)"
            );
            return;
        }
        let query = query.clone();
        self.phase = match result {
            Ok(raw) => QueryPhase::Success {
                query,
                points: normalize(&raw, PointSource::Queried),
            },
            Err(err) => QueryPhase::Error {
                message: err.display_message(),
            },
        };
    }
}

//! src/chart.rs
//!
//! Top-level `chart` module: points, domain fitting, and the view transform.

pub mod domain;
pub mod points;
pub mod view;

/// Re-exports
pub use domain::ChartDomain;
pub use points::{LabeledPoint, PointSource, RawCoordinateMap, merge, normalize};
pub use view::ViewState;

//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod roster;
pub mod scatter;
pub mod search;
pub mod status;
pub mod text;

pub use roster::RosterPanel;
pub use scatter::ScatterPanel;
pub use search::SearchPanel;
pub use status::StatusPanel;
pub use text::{HelpPanel, TitlePanel};

//! src/ui.rs
//!
//! Top-level UI module re-exporting layout helpers.

pub mod node;

pub use node::{Node, Panel, cols, leaf, rows};

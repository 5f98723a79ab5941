//! src/main.rs
//!
//! Entrypoint: error reporting, optional file logging, then `app::run()`.

mod app;
mod chart;
mod config;
mod form;
mod net;
mod panels;
mod query;
mod state;
mod ui;

use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// The TUI owns the terminal, so logs go to a file instead, and only when
/// `RIFT_SCATTER_LOG` asks for them (it doubles as the filter directive).
fn init_tracing() {
    if std::env::var_os("RIFT_SCATTER_LOG").is_none() {
        return;
    }
    let Ok(file) = File::create("rift-scatter.log") else {
        return;
    };
    let filter =
        EnvFilter::try_from_env("RIFT_SCATTER_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    app::run()
}

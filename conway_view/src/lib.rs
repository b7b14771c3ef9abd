// lib.rs - Front ends for the conway engine
//
// An egui window and a line-oriented console. Both drive a Simulation and
// read the world back only through its read-only accessors and render.

pub mod app;
pub mod config;
pub mod error;

pub use app::LifeApp;
pub use config::ViewConfig;
pub use error::ViewError;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber, honouring `RUST_LOG` (default `info`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

// error.rs - Error type shared by the front ends

use conway::WorldError;

/// Failures surfaced by the window and console binaries.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// An environment variable held a value that could not be used.
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("window error: {0}")]
    Ui(#[from] eframe::Error),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

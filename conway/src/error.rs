// error.rs - Error types for the conway crate
//
// Editing a cell outside the grid is not an error; it is silently ignored.

/// Errors raised while building or filling a [`World`](crate::World).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Width or height was zero.
    #[error("world dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested logical width.
        width: usize,
        /// Requested logical height.
        height: usize,
    },

    /// `randomize` was asked for zero cell types.
    #[error("cell type count must be at least 1")]
    InvalidTypes,

    /// The cell buffers could not be sized or obtained.
    #[error("cannot allocate cell buffers for a {width}x{height} world")]
    Allocation {
        /// Requested logical width.
        width: usize,
        /// Requested logical height.
        height: usize,
    },
}

//! Error types

use thiserror::Error;

/// Errors raised while setting up a maze
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height is not a positive, addressable number of cells.
    #[error("Invalid maze dimensions {width}x{height}: both must be positive")]
    InvalidDimension {
        /// Requested width
        width: i64,
        /// Requested height
        height: i64,
    },
}

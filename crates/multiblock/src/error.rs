//! Error types for the multiblock crate

use thiserror::Error;

/// Result type alias for multiblock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing a pattern
///
/// Construction is the only fallible surface of the core: a failed match is
/// an ordinary `None`, never an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Declared extent does not match the cell array on one axis
    #[error("declared {axis} size {declared} does not match pattern extent {actual}")]
    SizeMismatch {
        /// Axis the mismatch was found on ('x', 'y' or 'z')
        axis: char,
        /// Extent declared at construction
        declared: i32,
        /// Extent actually present in the cell array
        actual: usize,
    },

    /// A symbol used in the cell array has no entry in the definitions map
    #[error("missing definition for symbol '{symbol}', pattern invalid")]
    MissingDefinition {
        /// The unmapped symbol
        symbol: char,
    },
}

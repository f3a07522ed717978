//! Error types for bwlabel-core
//!
//! Provides a unified error type for grid construction and cell access.
//! Each variant captures enough context for diagnostics without exposing
//! internal storage details.

use thiserror::Error;

/// bwlabel-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Grid dimensions or row lengths are inconsistent
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Cell access outside the grid
    #[error("cell ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

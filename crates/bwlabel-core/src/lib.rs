//! bwlabel-core - Basic raster types for connected-component labeling
//!
//! This crate provides the data structures shared by the labeling crates:
//!
//! - [`BinaryGrid`] - Foreground/background input raster
//! - [`LabelGrid`] - Per-pixel label output raster
//! - [`BoundingBox`] - Inclusive axis-aligned component extents

pub mod bbox;
pub mod error;
pub mod grid;

pub use bbox::BoundingBox;
pub use error::{Error, Result};
pub use grid::{BinaryGrid, LabelGrid};

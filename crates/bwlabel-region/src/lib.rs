//! bwlabel-region - Connected component labeling for binary grids
//!
//! This crate labels 4-connected foreground regions with a two-pass
//! algorithm:
//!
//! - **Equivalence table** - Provisional labels and their recorded merges
//! - **Raster scan** - One forward pass assigning provisional labels
//! - **Resolution** - Provisional labels mapped to dense component ids
//! - **Aggregation** - Final relabeling plus pixel counts and bounding boxes
//!
//! # Examples
//!
//! ## Labeling a grid
//!
//! ```
//! use bwlabel_core::BinaryGrid;
//! use bwlabel_region::label_components;
//!
//! // Plus shape
//! let grid = BinaryGrid::from_rows(&[
//!     [false, true, false],
//!     [true, true, true],
//!     [false, true, false],
//! ])
//! .unwrap();
//!
//! let labeling = label_components(&grid).unwrap();
//! assert_eq!(labeling.component_count(), 1);
//!
//! let plus = labeling.component(1).unwrap();
//! assert_eq!(plus.pixel_count, 5);
//! assert_eq!(plus.top_left(), (0, 0));
//! assert_eq!(plus.bottom_right(), (2, 2));
//! ```
//!
//! ## Counting internal work
//!
//! ```
//! use bwlabel_core::BinaryGrid;
//! use bwlabel_region::{LabelOptions, LabelingCounters, label_components_observed};
//!
//! let grid = BinaryGrid::from_rows(&[[true, false, true], [true, true, true]]).unwrap();
//! let mut counters = LabelingCounters::default();
//! let labeling =
//!     label_components_observed(&grid, &LabelOptions::default(), &mut counters).unwrap();
//!
//! assert_eq!(labeling.component_count(), 1);
//! assert_eq!(counters.labels_created, 2);
//! assert_eq!(counters.merges, 1);
//! ```

pub mod aggregate;
pub mod conncomp;
pub mod equivalence;
pub mod error;
pub mod label;
pub mod metrics;
pub mod scan;

// Re-export core types
pub use bwlabel_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export pipeline stages
pub use aggregate::{ComponentRecord, Labeling, aggregate};
pub use equivalence::{EquivalenceTable, LabelRemap};
pub use scan::scan_provisional;

// Re-export conncomp types and functions
pub use conncomp::{
    LabelOptions, label_components, label_components_observed, label_components_with_options,
};

// Re-export label functions
pub use label::{
    component_area_transform, component_bounds, count_components, extract_component,
    filter_components_by_size,
};

// Re-export metrics types
pub use metrics::{LabelingCounters, LabelingMetrics, NoMetrics};

//! bwlabel - Connected-component labeling for binary rasters
//!
//! Labels 4-connected foreground regions of a binary grid with a single
//! forward scan plus deferred equivalence resolution, and reports each
//! component's pixel count and bounding box.
//!
//! Decoding images, thresholding them into a binary grid, and rendering the
//! result are left to the caller.
//!
//! # Example
//!
//! ```
//! use bwlabel::BinaryGrid;
//! use bwlabel::region::label_components;
//!
//! // Two single pixels in opposite corners
//! let grid = BinaryGrid::from_bytes(3, 3, &[255, 0, 0, 0, 0, 0, 0, 0, 255]).unwrap();
//! let labeling = label_components(&grid).unwrap();
//! assert_eq!(labeling.component_count(), 2);
//! assert_eq!(labeling.components[1].top_left(), (2, 2));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bwlabel_core::*;

// Re-export the labeling crate as a module to avoid name conflicts
pub use bwlabel_region as region;

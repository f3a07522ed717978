//! Connected component labeling
//!
//! This module runs the two-pass labeling pipeline over a binary grid:
//!
//! 1. [`scan_provisional`] assigns provisional labels and records
//!    equivalences in an [`EquivalenceTable`]
//! 2. [`EquivalenceTable::resolve`] maps every provisional label to a dense
//!    component id
//! 3. [`aggregate`] rewrites the grid with final ids and measures each
//!    component
//!
//! Components are 4-connected and numbered in the order the scan first
//! meets them, so identical grids always produce identical results.

use crate::aggregate::{Labeling, aggregate};
use crate::equivalence::EquivalenceTable;
use crate::error::{RegionError, RegionResult};
use crate::label::filter_components_by_size;
use crate::metrics::{LabelingMetrics, NoMetrics};
use crate::scan::scan_provisional;
use bwlabel_core::BinaryGrid;

/// Options for connected component labeling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOptions {
    /// Components with fewer pixels are dropped
    pub min_pixel_count: u64,
    /// Components with more pixels are dropped
    pub max_pixel_count: Option<u64>,
    /// Initial capacity of the equivalence table
    pub capacity_hint: Option<usize>,
}

impl LabelOptions {
    /// Create options keeping components within `min..=max` pixels
    pub fn new(min_pixel_count: u64, max_pixel_count: Option<u64>) -> Self {
        Self {
            min_pixel_count,
            max_pixel_count,
            capacity_hint: None,
        }
    }

    /// Set the minimum component size
    pub fn with_min_pixel_count(mut self, count: u64) -> Self {
        self.min_pixel_count = count;
        self
    }

    /// Set the maximum component size
    pub fn with_max_pixel_count(mut self, count: u64) -> Self {
        self.max_pixel_count = Some(count);
        self
    }

    /// Set the initial equivalence table capacity
    pub fn with_capacity_hint(mut self, labels: usize) -> Self {
        self.capacity_hint = Some(labels);
        self
    }

    /// Check option consistency
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if the minimum size
    /// exceeds the maximum size.
    pub fn validate(&self) -> RegionResult<()> {
        match self.max_pixel_count {
            Some(max) if self.min_pixel_count > max => Err(RegionError::InvalidParameters(
                format!(
                    "min_pixel_count {} exceeds max_pixel_count {}",
                    self.min_pixel_count, max
                ),
            )),
            _ => Ok(()),
        }
    }

    fn filters_by_size(&self) -> bool {
        self.min_pixel_count > 0 || self.max_pixel_count.is_some()
    }
}

/// Label all 4-connected foreground components of a binary grid
///
/// # Returns
///
/// The final label grid and one record per component, ordered by id.
///
/// # Example
///
/// ```
/// use bwlabel_core::BinaryGrid;
/// use bwlabel_region::label_components;
///
/// let grid = BinaryGrid::from_rows(&[[true, false], [false, true]]).unwrap();
/// let labeling = label_components(&grid).unwrap();
/// assert_eq!(labeling.component_count(), 2);
/// assert_eq!(labeling.labels.as_slice(), &[1, 0, 0, 2]);
/// ```
pub fn label_components(grid: &BinaryGrid) -> RegionResult<Labeling> {
    label_components_with_options(grid, &LabelOptions::default())
}

/// Label components, applying `options`
pub fn label_components_with_options(
    grid: &BinaryGrid,
    options: &LabelOptions,
) -> RegionResult<Labeling> {
    label_components_observed(grid, options, &mut NoMetrics)
}

/// Label components, reporting scan and resolution events to `metrics`
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for inconsistent options.
/// Internal label errors abort the whole run; no partial result is
/// returned.
pub fn label_components_observed(
    grid: &BinaryGrid,
    options: &LabelOptions,
    metrics: &mut dyn LabelingMetrics,
) -> RegionResult<Labeling> {
    options.validate()?;

    let mut table = match options.capacity_hint {
        Some(capacity) => EquivalenceTable::with_capacity(capacity),
        None => EquivalenceTable::new(),
    };

    let provisional = scan_provisional(grid, &mut table, metrics)?;
    let remap = table.resolve_observed(metrics);
    let labeling = aggregate(provisional, &remap)?;

    if options.filters_by_size() {
        let max = options.max_pixel_count.unwrap_or(u64::MAX);
        filter_components_by_size(&labeling, options.min_pixel_count, max)
    } else {
        Ok(labeling)
    }
}

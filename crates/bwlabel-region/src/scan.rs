//! Forward raster scan assigning provisional labels
//!
//! Pixels are visited in row-major order. Each foreground pixel looks only
//! at its north and west neighbours, which makes the labeling 4-connected:
//! pixels touching only diagonally never share a component.

use crate::equivalence::EquivalenceTable;
use crate::error::RegionResult;
use crate::metrics::LabelingMetrics;
use bwlabel_core::{BinaryGrid, LabelGrid};

/// Assign provisional labels to every foreground pixel of `grid`
///
/// New labels are allocated from `table`, and every time a pixel joins two
/// differently labeled neighbours the larger label's class is merged into
/// the smaller one's. The pixel itself takes the smaller label.
///
/// # Returns
///
/// A label grid of the same shape as `grid`, with `0` on background and
/// provisional labels on foreground.
///
/// # Errors
///
/// Propagates [`RegionError::LabelOverflow`](crate::RegionError::LabelOverflow)
/// from the table, and
/// [`RegionError::InvalidLabelReference`](crate::RegionError::InvalidLabelReference)
/// if `table` was not the one that produced the neighbouring labels.
pub fn scan_provisional(
    grid: &BinaryGrid,
    table: &mut EquivalenceTable,
    metrics: &mut dyn LabelingMetrics,
) -> RegionResult<LabelGrid> {
    let mut labels = LabelGrid::new(grid.rows(), grid.cols())?;
    let width = grid.cols() as usize;
    let height = grid.rows() as usize;
    let cells = grid.as_slice();
    let out = labels.as_mut_slice();
    let mut merges = 0usize;

    for y in 0..height {
        let row_start = y * width;
        for x in 0..width {
            let idx = row_start + x;
            if !cells[idx] {
                continue;
            }

            let top = if y > 0 { out[idx - width] } else { 0 };
            let left = if x > 0 { out[idx - 1] } else { 0 };

            out[idx] = match (top, left) {
                (0, 0) => {
                    let label = table.new_label()?;
                    metrics.label_created(label);
                    label
                }
                (label, 0) | (0, label) => label,
                (top, left) if top == left => top,
                (top, left) => {
                    let (smaller, larger) = (top.min(left), top.max(left));
                    table.union_observed(larger, smaller, metrics)?;
                    merges += 1;
                    smaller
                }
            };
        }
    }

    tracing::debug!(
        rows = height,
        cols = width,
        provisional = table.len(),
        merges,
        "raster scan finished"
    );

    Ok(labels)
}

//! Independent flood-fill labeling used as a reference in tests

use crate::error::TestResult;
use bwlabel_core::{BinaryGrid, LabelGrid};
use std::collections::VecDeque;

/// Label 4-connected components by breadth-first flood fill
///
/// Seeds are taken in row-major order, so components are numbered by
/// their first pixel in the scan.
///
/// # Returns
///
/// The label grid and the number of components.
pub fn flood_fill_components(grid: &BinaryGrid) -> TestResult<(LabelGrid, u32)> {
    let height = grid.rows() as usize;
    let width = grid.cols() as usize;
    let cells = grid.as_slice();
    let mut labels = vec![0u32; cells.len()];
    let mut count = 0u32;
    let mut queue = VecDeque::new();

    for seed in 0..cells.len() {
        if !cells[seed] || labels[seed] != 0 {
            continue;
        }

        count += 1;
        labels[seed] = count;
        queue.push_back(seed);

        while let Some(idx) = queue.pop_front() {
            let (y, x) = (idx / width, idx % width);
            let mut neighbors = [None; 4];
            if y > 0 {
                neighbors[0] = Some(idx - width);
            }
            if y + 1 < height {
                neighbors[1] = Some(idx + width);
            }
            if x > 0 {
                neighbors[2] = Some(idx - 1);
            }
            if x + 1 < width {
                neighbors[3] = Some(idx + 1);
            }

            for n in neighbors.into_iter().flatten() {
                if cells[n] && labels[n] == 0 {
                    labels[n] = count;
                    queue.push_back(n);
                }
            }
        }
    }

    let labels = LabelGrid::from_vec(grid.rows(), grid.cols(), labels)?;
    Ok((labels, count))
}

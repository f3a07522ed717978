//! Component queries and post-labeling utilities
//!
//! These functions consume a finished [`Labeling`] (or run one) and never
//! feed back into the labeling stages.

use crate::aggregate::{ComponentRecord, Labeling};
use crate::conncomp::label_components;
use crate::error::{RegionError, RegionResult};
use bwlabel_core::{BinaryGrid, BoundingBox, LabelGrid};

/// Count the 4-connected foreground components of a grid
pub fn count_components(grid: &BinaryGrid) -> RegionResult<u32> {
    Ok(label_components(grid)?.component_count())
}

/// Get bounding boxes for all components
///
/// The index in the vector corresponds to (label - 1).
pub fn component_bounds(grid: &BinaryGrid) -> RegionResult<Vec<BoundingBox>> {
    Ok(label_components(grid)?
        .components
        .iter()
        .map(|c| c.bounds)
        .collect())
}

/// Extract a single component as a binary mask
///
/// # Errors
///
/// Returns [`RegionError::InvalidLabelReference`] if `label` is not a
/// component of `labeling`.
pub fn extract_component(labeling: &Labeling, label: u32) -> RegionResult<BinaryGrid> {
    if labeling.component(label).is_none() {
        return Err(RegionError::InvalidLabelReference {
            label,
            len: labeling.components.len(),
        });
    }

    let mask = labeling
        .labels
        .as_slice()
        .iter()
        .map(|&l| l == label)
        .collect();
    Ok(BinaryGrid::from_vec(
        labeling.labels.rows(),
        labeling.labels.cols(),
        mask,
    )?)
}

/// Keep only components whose pixel count lies in `min_size..=max_size`
///
/// Surviving components are renumbered `1..=K'` in their original order
/// and dropped components become background.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `min_size > max_size`, and
/// [`RegionError::InvalidLabelReference`] if a record or cell names a label
/// outside `1..=K`.
pub fn filter_components_by_size(
    labeling: &Labeling,
    min_size: u64,
    max_size: u64,
) -> RegionResult<Labeling> {
    if min_size > max_size {
        return Err(RegionError::InvalidParameters(format!(
            "min_size {} exceeds max_size {}",
            min_size, max_size
        )));
    }

    // renumber[old] = new id, 0 when dropped
    let mut renumber = vec![0u32; labeling.components.len() + 1];
    let mut components = Vec::new();
    for record in &labeling.components {
        if (min_size..=max_size).contains(&record.pixel_count) {
            let label = components.len() as u32 + 1;
            let slot = renumber.get_mut(record.label as usize).ok_or(
                RegionError::InvalidLabelReference {
                    label: record.label,
                    len: labeling.components.len(),
                },
            )?;
            *slot = label;
            components.push(ComponentRecord { label, ..*record });
        }
    }

    let mut labels = labeling.labels.clone();
    for cell in labels.as_mut_slice() {
        let old = *cell as usize;
        *cell = *renumber.get(old).ok_or(RegionError::InvalidLabelReference {
            label: *cell,
            len: labeling.components.len(),
        })?;
    }

    tracing::debug!(
        kept = components.len(),
        dropped = labeling.components.len() - components.len(),
        min_size,
        max_size,
        "filtered components by size"
    );

    Ok(Labeling { labels, components })
}

/// Replace every labeled pixel by its component's pixel count
///
/// Counts above `u32::MAX` saturate.
pub fn component_area_transform(labeling: &Labeling) -> RegionResult<LabelGrid> {
    let mut areas = labeling.labels.clone();
    for cell in areas.as_mut_slice() {
        if *cell == 0 {
            continue;
        }
        let record = labeling
            .component(*cell)
            .ok_or(RegionError::InvalidLabelReference {
                label: *cell,
                len: labeling.components.len(),
            })?;
        *cell = u32::try_from(record.pixel_count).unwrap_or(u32::MAX);
    }
    Ok(areas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_grid(rows: u32, cols: u32, pixels: &[(u32, u32)]) -> BinaryGrid {
        let mut grid = BinaryGrid::new(rows, cols).unwrap();
        for &(r, c) in pixels {
            grid.set(r, c, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_count_components() {
        let grid = create_test_grid(
            10,
            10,
            &[
                (0, 0),
                (0, 1), // Component 1
                (5, 5),
                (5, 6), // Component 2
                (8, 8), // Component 3
            ],
        );
        assert_eq!(count_components(&grid).unwrap(), 3);
    }

    #[test]
    fn test_component_bounds() {
        let grid = create_test_grid(10, 10, &[(0, 0), (0, 1), (0, 2), (1, 1)]);
        let bounds = component_bounds(&grid).unwrap();
        assert_eq!(bounds, vec![BoundingBox::new(0, 0, 1, 2)]);
        assert_eq!((bounds[0].width(), bounds[0].height()), (3, 2));
    }

    #[test]
    fn test_empty_grid() {
        let grid = create_test_grid(10, 10, &[]);
        assert_eq!(count_components(&grid).unwrap(), 0);
        assert!(component_bounds(&grid).unwrap().is_empty());
    }

    #[test]
    fn test_extract_component() {
        let grid = create_test_grid(3, 3, &[(0, 0), (0, 1), (2, 2)]);
        let labeling = label_components(&grid).unwrap();

        let mask = extract_component(&labeling, 1).unwrap();
        assert_eq!(mask.foreground_count(), 2);
        assert!(mask.is_foreground(0, 1));
        assert!(!mask.is_foreground(2, 2));

        assert!(matches!(
            extract_component(&labeling, 3),
            Err(RegionError::InvalidLabelReference { label: 3, len: 2 })
        ));
        assert!(extract_component(&labeling, 0).is_err());
    }

    #[test]
    fn test_filter_components_by_size() {
        let grid = create_test_grid(4, 4, &[(0, 0), (2, 0), (2, 1), (3, 3)]);
        let labeling = label_components(&grid).unwrap();
        assert_eq!(labeling.component_count(), 3);

        let filtered = filter_components_by_size(&labeling, 1, 1).unwrap();
        assert_eq!(filtered.component_count(), 2);
        assert_eq!(filtered.labels.get(0, 0), Some(1));
        assert_eq!(filtered.labels.get(2, 0), Some(0));
        assert_eq!(filtered.labels.get(3, 3), Some(2));
        assert_eq!(filtered.components[1].bounds, BoundingBox::from_point(3, 3));

        assert!(filter_components_by_size(&labeling, 3, 2).is_err());
    }

    #[test]
    fn test_filter_rejects_out_of_range_record_label() {
        let grid = create_test_grid(2, 2, &[(0, 0)]);
        let mut labeling = label_components(&grid).unwrap();
        labeling.components[0].label = 5;

        assert!(matches!(
            filter_components_by_size(&labeling, 0, u64::MAX),
            Err(RegionError::InvalidLabelReference { label: 5, len: 1 })
        ));
    }

    #[test]
    fn test_component_area_transform() {
        let grid = create_test_grid(2, 3, &[(0, 0), (0, 1), (1, 2)]);
        let labeling = label_components(&grid).unwrap();
        let areas = component_area_transform(&labeling).unwrap();
        assert_eq!(areas.as_slice(), &[2, 2, 0, 0, 0, 1]);
    }
}

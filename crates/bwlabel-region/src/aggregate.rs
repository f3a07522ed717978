//! Final relabeling pass and per-component records

use crate::equivalence::LabelRemap;
use crate::error::{RegionError, RegionResult};
use bwlabel_core::{BoundingBox, LabelGrid};

/// A labeled connected component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Component id in `1..=K`
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u64,
    /// Tightest box containing every pixel of the component
    pub bounds: BoundingBox,
}

impl ComponentRecord {
    /// `(min_row, min_col)` of the bounding box
    #[inline]
    pub fn top_left(&self) -> (u32, u32) {
        self.bounds.top_left()
    }

    /// `(max_row, max_col)` of the bounding box
    #[inline]
    pub fn bottom_right(&self) -> (u32, u32) {
        self.bounds.bottom_right()
    }
}

/// Result of a labeling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeling {
    /// Final label grid; background is `0`, components are `1..=K`
    pub labels: LabelGrid,
    /// Component records; `components[i].label == i + 1`
    pub components: Vec<ComponentRecord>,
}

impl Labeling {
    /// Number of components `K`
    #[inline]
    pub fn component_count(&self) -> u32 {
        self.components.len() as u32
    }

    /// Record for component `label`, if it exists
    pub fn component(&self, label: u32) -> Option<&ComponentRecord> {
        let idx = (label as usize).checked_sub(1)?;
        self.components.get(idx)
    }

    /// Total number of labeled pixels
    pub fn foreground_pixel_count(&self) -> u64 {
        self.components.iter().map(|c| c.pixel_count).sum()
    }
}

/// Rewrite a provisional grid through `remap` and accumulate component records
///
/// # Errors
///
/// Returns [`RegionError::InvalidLabelReference`] if the grid holds a label
/// the remap does not know, and [`RegionError::EmptyComponent`] if a
/// component id receives no pixels. Neither can happen when `provisional`
/// and `remap` come from the same scan.
pub fn aggregate(mut provisional: LabelGrid, remap: &LabelRemap) -> RegionResult<Labeling> {
    let width = provisional.cols() as usize;
    let mut accum: Vec<(u64, Option<BoundingBox>)> =
        vec![(0, None); remap.component_count() as usize];

    for (idx, cell) in provisional.as_mut_slice().iter_mut().enumerate() {
        if *cell == 0 {
            continue;
        }

        let label = remap.get(*cell)?;
        *cell = label;

        let row = (idx / width) as u32;
        let col = (idx % width) as u32;
        let (count, bounds) = &mut accum[(label - 1) as usize];
        *count += 1;
        bounds
            .get_or_insert(BoundingBox::from_point(row, col))
            .include(row, col);
    }

    let components = accum
        .into_iter()
        .zip(1u32..)
        .map(|((pixel_count, bounds), label)| {
            let bounds = bounds.ok_or(RegionError::EmptyComponent(label))?;
            Ok(ComponentRecord {
                label,
                pixel_count,
                bounds,
            })
        })
        .collect::<RegionResult<Vec<_>>>()?;

    let labeling = Labeling {
        labels: provisional,
        components,
    };
    tracing::debug!(
        components = labeling.component_count(),
        foreground = labeling.foreground_pixel_count(),
        "aggregated components"
    );

    Ok(labeling)
}

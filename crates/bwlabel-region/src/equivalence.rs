//! Label equivalence table and its resolution
//!
//! Provisional labels discovered by the raster scan are recorded in a flat
//! redirection table: entry `i` holds the label that `i` was merged into,
//! or `i` itself if it still represents its class. Merging always redirects
//! the numerically larger class root to the smaller one, so every entry
//! satisfies `table[i] <= i` and a class is represented by its smallest
//! label.
//!
//! Resolution turns the table into a [`LabelRemap`] that sends every
//! provisional label to a dense component id in `1..=K`, numbered by the
//! order in which the components were first met by the scan.

use crate::error::{RegionError, RegionResult};
use crate::metrics::{LabelingMetrics, NoMetrics};

/// Growable equivalence table over provisional labels `1..=len`
///
/// Index 0 is reserved for background and never refers to a label.
#[derive(Debug, Clone)]
pub struct EquivalenceTable {
    parent: Vec<u32>,
}

impl Default for EquivalenceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EquivalenceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty table with room for `capacity` labels
    pub fn with_capacity(capacity: usize) -> Self {
        let mut parent = Vec::with_capacity(capacity.saturating_add(1));
        parent.push(0);
        Self { parent }
    }

    /// Number of labels created so far
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// True if no label has been created
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self, label: u32) -> RegionResult<usize> {
        let idx = label as usize;
        if label == 0 || idx > self.len() {
            return Err(RegionError::InvalidLabelReference {
                label,
                len: self.len(),
            });
        }
        Ok(idx)
    }

    /// Append a new singleton class and return its label
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::LabelOverflow`] once `u32::MAX` labels exist.
    pub fn new_label(&mut self) -> RegionResult<u32> {
        let label = u32::try_from(self.parent.len()).map_err(|_| RegionError::LabelOverflow)?;
        self.parent.push(label);
        Ok(label)
    }

    /// The label `label` currently redirects to
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidLabelReference`] if `label` was never created.
    pub fn parent(&self, label: u32) -> RegionResult<u32> {
        Ok(self.parent[self.check(label)?])
    }

    /// Current representative of `label`'s class
    ///
    /// Halves the lookup path as it walks, so repeated lookups get cheaper.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidLabelReference`] if `label` was never created.
    pub fn find(&mut self, label: u32) -> RegionResult<u32> {
        self.check(label)?;
        Ok(self.find_root(label, &mut NoMetrics))
    }

    /// Iterative root lookup with path halving. `label` must be valid.
    fn find_root(&mut self, label: u32, metrics: &mut dyn LabelingMetrics) -> u32 {
        let mut current = label;
        loop {
            let parent = self.parent[current as usize];
            if parent == current {
                return current;
            }
            metrics.chain_hop();
            let grandparent = self.parent[parent as usize];
            self.parent[current as usize] = grandparent;
            current = grandparent;
        }
    }

    /// Merge the classes of `a` and `b`
    ///
    /// The smaller of the two class roots becomes the representative and
    /// the larger root is redirected to it.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidLabelReference`] if either label was
    /// never created.
    pub fn union(&mut self, a: u32, b: u32) -> RegionResult<()> {
        self.union_observed(a, b, &mut NoMetrics)
    }

    /// [`union`](Self::union), reporting to a metrics hook
    pub fn union_observed(
        &mut self,
        a: u32,
        b: u32,
        metrics: &mut dyn LabelingMetrics,
    ) -> RegionResult<()> {
        self.check(a)?;
        self.check(b)?;

        let root_a = self.find_root(a, metrics);
        let root_b = self.find_root(b, metrics);
        if root_a == root_b {
            return Ok(());
        }

        let (kept, redirected) = if root_a < root_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[redirected as usize] = kept;
        metrics.labels_merged(kept, redirected);
        tracing::trace!(kept, redirected, "merged label classes");
        Ok(())
    }

    /// Resolve every label to its dense component id
    pub fn resolve(&self) -> LabelRemap {
        self.resolve_observed(&mut NoMetrics)
    }

    /// [`resolve`](Self::resolve), reporting to a metrics hook
    pub fn resolve_observed(&self, metrics: &mut dyn LabelingMetrics) -> LabelRemap {
        let len = self.parent.len();

        // Terminal representatives. Entries only point downward, so a
        // single increasing sweep finds each parent already resolved.
        let mut terminal = vec![0u32; len];
        for i in 1..len {
            let parent = self.parent[i];
            debug_assert!(parent as usize <= i, "table entry {} points upward", i);
            terminal[i] = if parent as usize == i {
                parent
            } else {
                metrics.chain_hop();
                terminal[parent as usize]
            };
        }

        // Compaction in first-appearance order, then compose.
        let mut compact = vec![0u32; len];
        let mut final_labels = vec![0u32; len];
        let mut count = 0u32;
        for i in 1..len {
            let root = terminal[i] as usize;
            if compact[root] == 0 {
                count += 1;
                compact[root] = count;
            }
            final_labels[i] = compact[root];
        }

        tracing::debug!(
            provisional = self.len(),
            components = count,
            "resolved label equivalences"
        );

        LabelRemap {
            final_labels,
            component_count: count,
        }
    }
}

/// Mapping from provisional labels to dense component ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRemap {
    /// Indexed by provisional label; entry 0 maps background to 0
    final_labels: Vec<u32>,
    component_count: u32,
}

impl LabelRemap {
    /// Component id for a provisional label
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidLabelReference`] if `provisional` is
    /// not in `1..=provisional_count()`.
    #[inline]
    pub fn get(&self, provisional: u32) -> RegionResult<u32> {
        match self.final_labels.get(provisional as usize) {
            Some(&id) if provisional > 0 => Ok(id),
            _ => Err(RegionError::InvalidLabelReference {
                label: provisional,
                len: self.provisional_count(),
            }),
        }
    }

    /// Number of distinct components `K`
    #[inline]
    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    /// Number of provisional labels `L`
    #[inline]
    pub fn provisional_count(&self) -> usize {
        self.final_labels.len() - 1
    }

    /// Raw table indexed by provisional label
    pub fn as_slice(&self) -> &[u32] {
        &self.final_labels
    }
}

//! Optional instrumentation for the labeling stages
//!
//! Metrics are observed, never consulted: a run produces the same labels
//! and records whatever hook it is given.

/// Receiver for labeling events
///
/// Every method defaults to a no-op so implementors only override what
/// they count.
pub trait LabelingMetrics {
    /// A provisional label was allocated
    fn label_created(&mut self, _label: u32) {}

    /// The class rooted at `redirected` was merged into the class rooted at `kept`
    fn labels_merged(&mut self, _kept: u32, _redirected: u32) {}

    /// One redirection was followed while looking up a representative
    fn chain_hop(&mut self) {}
}

/// Metrics sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetrics;

impl LabelingMetrics for NoMetrics {}

/// Plain event counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelingCounters {
    /// Provisional labels allocated during the scan
    pub labels_created: u64,
    /// Class merges that changed the equivalence table
    pub merges: u64,
    /// Redirections followed during lookups and resolution
    pub chain_hops: u64,
}

impl LabelingMetrics for LabelingCounters {
    fn label_created(&mut self, _label: u32) {
        self.labels_created += 1;
    }

    fn labels_merged(&mut self, _kept: u32, _redirected: u32) {
        self.merges += 1;
    }

    fn chain_hop(&mut self) {
        self.chain_hops += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut counters = LabelingCounters::default();
        counters.label_created(1);
        counters.label_created(2);
        counters.labels_merged(1, 2);
        counters.chain_hop();
        assert_eq!(
            counters,
            LabelingCounters {
                labels_created: 2,
                merges: 1,
                chain_hops: 1,
            }
        );
    }
}

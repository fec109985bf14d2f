//! Configuration for report computation.

use serde::{Deserialize, Serialize};

/// Configuration for report computation.
///
/// Controls whether the 7 independent group-key aggregations fan out across
/// threads. Output order is identical either way: per-key results are
/// concatenated in key enumeration order after the fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Enable parallel processing (requires the 'parallel' feature).
    pub parallel: bool,

    /// Minimum joined-record count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 10_000, // Use parallel if >10k joined records
        }
    }
}

impl ReportConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the joined-record threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if a workload of `records` joined records should be
    /// processed in parallel.
    #[must_use]
    pub fn should_parallelize(&self, records: usize) -> bool {
        self.parallel && records > self.parallel_threshold
    }
}

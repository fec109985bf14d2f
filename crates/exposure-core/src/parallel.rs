//! Parallel processing utilities for the report fan-out.
//!
//! Provides conditional parallel iteration based on configuration and
//! workload size. Uses rayon when the `parallel` feature is enabled.

use crate::types::ReportConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - `workload` (joined-record count) exceeds `config.parallel_threshold`
///
/// The output preserves item order either way, so callers see identical
/// results regardless of the execution mode.
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(
    items: &[T],
    config: &ReportConfig,
    workload: usize,
    f: F,
) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(workload) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_parallel_map_sequential() {
        let config = ReportConfig::sequential();
        let items = vec![1, 2, 3, 4, 5];
        let results: Vec<i32> = maybe_parallel_map(&items, &config, items.len(), |x| x * 2);
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_maybe_parallel_map_preserves_order() {
        let config = ReportConfig::default().with_threshold(0);
        let items: Vec<usize> = (0..64).collect();
        let results: Vec<usize> = maybe_parallel_map(&items, &config, 1_000_000, |x| *x);
        assert_eq!(results, items);
    }
}

//! Parallel accumulation over the rayon thread pool
//!
//! The input is split into contiguous blocks, each block is accumulated by
//! its own [`Accumulator`] on a worker, and the partial results are reduced
//! with [`Accumulator::combine`]. No accumulator is shared between workers.
//!
//! ```
//! use flowmoments::statistics::parallel;
//!
//! let values: Vec<f32> = (1..=1000).map(|v| v as f32).collect();
//! let stats = parallel::accumulate(&values);
//!
//! assert_eq!(stats.count(), 1000);
//! assert_eq!(stats.mean(), Some(500.5));
//! ```

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::statistics::Accumulator;

/// Number of partitions used by [`accumulate`] for `len` values
///
/// One per rayon worker, but never more than there are values.
pub fn partitions_for(len: usize) -> usize {
    len.min(rayon::current_num_threads().max(1))
}

/// Accumulate `values` on the rayon pool, one partition per worker
pub fn accumulate(values: &[f32]) -> Accumulator {
    accumulate_with_partitions(values, partitions_for(values.len()))
}

/// Accumulate `values` split into at most `partitions` contiguous blocks
///
/// `partitions` is clamped to `1..=values.len()` so that no block is empty.
/// An empty input returns an empty accumulator without scheduling any work.
pub fn accumulate_with_partitions(values: &[f32], partitions: usize) -> Accumulator {
    if values.is_empty() {
        return Accumulator::new();
    }

    let partitions = partitions.clamp(1, values.len());
    let block_len = values.len().div_ceil(partitions);
    debug!(
        values = values.len(),
        partitions, block_len, "accumulating in parallel"
    );

    values
        .par_chunks(block_len)
        .enumerate()
        .map(|(index, block)| {
            let partial: Accumulator = block.iter().collect();
            trace!(partition = index, count = partial.count(), "partition done");
            partial
        })
        .reduce(Accumulator::new, |a, b| a.combine(&b))
}

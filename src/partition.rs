//! Partition planning for splitting one buffer across several workers
//!
//! Produces contiguous, non-overlapping worker ranges that exactly cover a
//! buffer, or a configuration error when they cannot.

use thiserror::Error;

/// Errors that can occur while planning a partition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("cannot partition an empty buffer")]
    EmptyBuffer,

    #[error("cannot partition across zero workers")]
    NoWorkers,

    #[error("buffer length {len} does not divide evenly across {num_workers} workers")]
    UnevenSplit { len: usize, num_workers: usize },
}

/// Contiguous half-open range of buffer indices owned by a single worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerRange {
    pub start: usize,
    pub end: usize,
}

impl WorkerRange {
    /// Number of indices in this range
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Truth that this range contains no indices
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validated assignment of worker ranges to a buffer of known length
///
/// Can only be obtained from [`partition()`], so holding one proves that the
/// ranges are contiguous, equal-width, non-overlapping, and jointly cover the
/// buffer.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Buffer length these ranges were planned for
    len: usize,

    /// One range per worker, in worker index order
    ranges: Vec<WorkerRange>,
}

impl Partition {
    /// Number of workers this plan distributes work across
    pub fn num_workers(&self) -> usize {
        self.ranges.len()
    }

    /// Number of indices each worker receives
    pub fn width(&self) -> usize {
        self.len / self.ranges.len()
    }

    /// Planned ranges, in worker index order
    pub fn ranges(&self) -> &[WorkerRange] {
        &self.ranges
    }

    /// Materialize the plan as disjoint mutable shares of `values`
    ///
    /// Going through `split_at_mut` makes the compiler check that no two
    /// shares alias, so workers may mutate their share without
    /// synchronization.
    ///
    /// Panics if `values` does not have the length this plan was made for.
    pub fn split<'buffer, T>(&self, values: &'buffer mut [T]) -> Vec<&'buffer mut [T]> {
        assert_eq!(
            values.len(),
            self.len,
            "partition was planned for a different buffer length"
        );
        let mut shares = Vec::with_capacity(self.ranges.len());
        let mut rest = values;
        for range in &self.ranges {
            let (share, tail) = rest.split_at_mut(range.len());
            shares.push(share);
            rest = tail;
        }
        debug_assert!(rest.is_empty());
        shares
    }

    /// Verify that every index in `[0, len)` is covered exactly once
    #[cfg(test)]
    fn verify_coverage(&self) -> bool {
        let mut seen = vec![false; self.len];
        for range in &self.ranges {
            for idx in range.start..range.end {
                if idx >= self.len || seen[idx] {
                    return false;
                }
                seen[idx] = true;
            }
        }
        seen.iter().all(|&covered| covered)
    }
}

/// Plan a partition of `len` buffer indices across `num_workers` workers
///
/// Worker `id` receives the half-open index range
/// `[id * (len / num_workers), (id + 1) * (len / num_workers))`. The
/// configuration is rejected if the buffer is empty, there are no workers, or
/// `len` is not a multiple of `num_workers`, which would leave the last
/// `len % num_workers` elements of the buffer uncovered.
pub fn partition(len: usize, num_workers: usize) -> Result<Partition, PartitionError> {
    if len == 0 {
        return Err(PartitionError::EmptyBuffer);
    }
    if num_workers == 0 {
        return Err(PartitionError::NoWorkers);
    }
    if len % num_workers != 0 {
        return Err(PartitionError::UnevenSplit { len, num_workers });
    }

    let width = len / num_workers;
    let ranges = (0..num_workers)
        .map(|worker| WorkerRange {
            start: worker * width,
            end: (worker + 1) * width,
        })
        .collect();
    Ok(Partition { len, ranges })
}

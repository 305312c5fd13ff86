use crate::partition::{partition, PartitionError};

/// Increment every element of `values` in parallel, one worker per share
///
/// The buffer is split into `num_workers` disjoint equal-width shares, each
/// processed by its own scoped thread running `sequential`. The scope joins
/// every worker before returning, so the caller may read the buffer as soon
/// as this function does. The shares are the only data the workers touch, so
/// no synchronization beyond the join is involved.
///
/// Degenerate configurations are rejected before any thread starts, leaving
/// the buffer untouched.
pub fn thread_basic(
    values: &mut [f64],
    num_workers: usize,
    sequential: impl Fn(&mut [f64]) + Sync,
) -> Result<(), PartitionError> {
    let partition = partition(values.len(), num_workers)?;
    let sequential = &sequential;

    std::thread::scope(|s| {
        let mut workers = Vec::with_capacity(num_workers);
        for share in partition.split(values) {
            workers.push(s.spawn(move || sequential(share)));
        }
        for worker in workers {
            worker.join().unwrap();
        }
    });
    Ok(())
}

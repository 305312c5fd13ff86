use crate::partition::{partition, PartitionError};

/// Like `thread_basic`, but dispatching the shares on the rayon thread pool
///
/// `num_workers` controls how the buffer is partitioned; the threads come
/// from rayon's global pool.
pub fn thread_rayon(
    values: &mut [f64],
    num_workers: usize,
    sequential: impl Fn(&mut [f64]) + Sync,
) -> Result<(), PartitionError> {
    use rayon::prelude::*;
    let partition = partition(values.len(), num_workers)?;
    partition
        .split(values)
        .into_par_iter()
        .for_each(|share| sequential(share));
    Ok(())
}

#[cfg(test)]
mod tests {
    crate::test_incrementer!((thread_rayon, |values: &mut [f64], repeats| {
        if values.is_empty() {
            return;
        }
        let num_workers = (1..=4usize)
            .rev()
            .find(|workers| values.len() % workers == 0)
            .unwrap();
        super::thread_rayon(values, num_workers, |share| {
            crate::basic::basic(share, repeats)
        })
        .unwrap();
    }));
}

pub fn ilp<const WIDTH: usize>(values: &mut [f64], repeats: u32) {
    assert_ne!(WIDTH, 0, "No progress possible in this configuration");

    // Interleave the repeated adds of WIDTH neighboring elements so they do
    // not form a single serial dependency chain
    let mut chunks = values.chunks_exact_mut(WIDTH);
    for chunk in chunks.by_ref() {
        for _ in 0..repeats {
            for value in chunk.iter_mut() {
                *value = pessimize::hide(*value + 1.0);
            }
        }
    }

    // Increment remaining elements one at a time
    crate::basic::basic(chunks.into_remainder(), repeats);
}

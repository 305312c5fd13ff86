pub fn basic(values: &mut [f64], repeats: u32) {
    for value in values {
        for _ in 0..repeats {
            *value = pessimize::hide(*value + 1.0);
        }
    }
}

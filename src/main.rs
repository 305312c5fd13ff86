use incrementer::thread::thread_basic;

const ARRAY_LENGTH: usize = 1024 * 1024;
const NUM_WORKERS: usize = 4;
const REPEATS: u32 = 1000;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut vector = vec![0.0f64; ARRAY_LENGTH];
    log::info!("incrementing {ARRAY_LENGTH} elements {REPEATS} times across {NUM_WORKERS} workers");
    thread_basic(&mut vector, NUM_WORKERS, |share| {
        incrementer::basic(share, REPEATS)
    })?;

    println!("vector[0] = {:.6}", vector[0]);
    Ok(())
}

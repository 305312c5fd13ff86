pub mod basic;
pub mod rayon;

pub use self::basic::thread_basic;
pub use self::rayon::thread_rayon;

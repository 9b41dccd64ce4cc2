//! Compression of many independent buffers across worker threads.
//!
//! Each buffer becomes its own self-contained stream; streams never
//! reference one another and each worker owns its own hash table.

pub mod parallel;

pub use parallel::ParallelCompressor;

/// Configuration for batch compression
#[derive(Clone, Debug, Default)]
pub struct BatchConfig {
    /// Number of worker threads (0 = auto, 1 = run on the calling thread)
    pub num_threads: usize,
}

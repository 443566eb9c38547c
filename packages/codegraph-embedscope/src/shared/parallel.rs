//! Rayon thread pool construction
//!
//! The pipeline owns its pool instead of configuring the global one, so
//! several pipelines with different worker counts can coexist in a process.

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::debug;

/// Build a thread pool with `num_workers` threads (0 = 75% of cores, at least 1)
pub fn build_thread_pool(num_workers: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    let threads = if num_workers == 0 {
        default_worker_count()
    } else {
        num_workers
    };

    debug!("Rayon pool: {} threads", threads);

    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("embedscope-worker-{i}"))
        .build()
}

fn default_worker_count() -> usize {
    let num_cpus = num_cpus::get();
    std::cmp::max(1, (num_cpus * 3) / 4)
}

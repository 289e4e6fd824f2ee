use crate::pipeline::batch_executor::BatchExecutor;

use super::sequential_executor::SequentialExecutor;
use super::worker_pool_executor::WorkerPoolExecutor;

/// Picks an executor for the requested worker count.
///
/// A single worker runs inline on the calling thread; anything larger gets
/// a thread pool of that size.
pub fn create_executor(workers: usize) -> Box<dyn BatchExecutor> {
    if workers <= 1 {
        log::info!("Using sequential executor");
        Box::new(SequentialExecutor)
    } else {
        log::info!("Using worker pool executor (workers={workers})");
        Box::new(WorkerPoolExecutor::new(workers))
    }
}

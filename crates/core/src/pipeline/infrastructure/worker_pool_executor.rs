use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::pipeline::batch_executor::BatchExecutor;
use crate::pipeline::process_image_use_case::ProcessImageUseCase;
use crate::shared::error::BatchError;

type Job = (usize, PathBuf);
type JobResult = (usize, Result<PathBuf, BatchError>);

/// Fans images out to a fixed pool of worker threads.
///
/// Layout: `main [enqueue] → workers [read/blur/write] → main [collect]`
///
/// Workers share nothing but the job queue, the result queue and a
/// cancellation flag. The worker that hits the first failure raises the flag
/// before reporting it, so the others stop picking up jobs; images already
/// in flight are allowed to finish.
pub struct WorkerPoolExecutor {
    workers: usize,
}

impl WorkerPoolExecutor {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }
}

impl BatchExecutor for WorkerPoolExecutor {
    fn execute(
        &self,
        use_case: &ProcessImageUseCase,
        sources: &[PathBuf],
        dest_dir: &Path,
    ) -> Result<Vec<PathBuf>, BatchError> {
        if sources.is_empty() {
            return Ok(Vec::new());
        }

        let (job_tx, job_rx) = crossbeam_channel::unbounded::<Job>();
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<JobResult>();
        for job in sources.iter().cloned().enumerate() {
            // The receiver is alive until the workers below exit.
            let _ = job_tx.send(job);
        }
        drop(job_tx);

        let cancelled = AtomicBool::new(false);
        let cancelled = &cancelled;

        thread::scope(|scope| {
            let handles: Vec<_> = (0..self.workers.min(sources.len()))
                .map(|_| {
                    let job_rx = job_rx.clone();
                    let result_tx = result_tx.clone();
                    scope.spawn(move || {
                        run_worker(use_case, dest_dir, job_rx, result_tx, cancelled)
                    })
                })
                .collect();
            drop(result_tx);

            let collected = collect_results(result_rx, sources.len(), cancelled);

            let mut panicked = false;
            for handle in handles {
                panicked |= handle.join().is_err();
            }

            match collected {
                Err(e) => Err(e),
                Ok(_) if panicked => Err(BatchError::WorkerPanicked),
                Ok(outputs) => Ok(outputs),
            }
        })
    }

    fn workers(&self) -> usize {
        self.workers
    }
}

fn run_worker(
    use_case: &ProcessImageUseCase,
    dest_dir: &Path,
    job_rx: crossbeam_channel::Receiver<Job>,
    result_tx: crossbeam_channel::Sender<JobResult>,
    cancelled: &AtomicBool,
) {
    for (index, source) in job_rx {
        if cancelled.load(Ordering::Relaxed) {
            break;
        }
        let result = use_case.execute(&source, dest_dir);
        if result.is_err() {
            cancelled.store(true, Ordering::Relaxed);
        }
        if result_tx.send((index, result)).is_err() {
            break;
        }
    }
}

/// Gathers worker results back into input order.
///
/// Returns the first error received. The flag is raised here as well in
/// case the error arrived from somewhere other than `run_worker`.
fn collect_results(
    result_rx: crossbeam_channel::Receiver<JobResult>,
    total: usize,
    cancelled: &AtomicBool,
) -> Result<Vec<PathBuf>, BatchError> {
    let mut outputs: Vec<Option<PathBuf>> = vec![None; total];
    let mut first_error = None;

    for (index, result) in result_rx {
        match result {
            Ok(path) => outputs[index] = Some(path),
            Err(e) => {
                cancelled.store(true, Ordering::Relaxed);
                if first_error.is_none() {
                    log::debug!("Cancelling batch after failure: {e}");
                    first_error = Some(e);
                }
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }
    // A missing slot means a worker died mid-job; the join reports it.
    Ok(outputs.into_iter().flatten().collect())
}

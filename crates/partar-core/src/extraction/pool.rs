//! Bounded worker pool for materializer jobs.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

/// A fixed-capacity pool of blocking worker tasks.
///
/// Capacity is enforced by counted semaphore permits: a job holds one
/// permit from dispatch until completion, so at most `max_workers` jobs
/// execute at any instant and [`dispatch`] blocks the producer while the
/// pool is saturated. [`join`] is the completion barrier.
///
/// [`dispatch`]: WorkerPool::dispatch
/// [`join`]: WorkerPool::join
pub(crate) struct WorkerPool<T> {
    permits: Arc<Semaphore>,
    tasks: JoinSet<T>,
    dispatched: usize,
}

impl<T: Send + 'static> WorkerPool<T> {
    /// Creates a pool with `max_workers` slots. Zero is treated as one.
    pub(crate) fn new(max_workers: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_workers.max(1))),
            tasks: JoinSet::new(),
            dispatched: 0,
        }
    }

    /// Runs one unit of work on a blocking worker thread, waiting for a
    /// free slot first. The slot is released when the work completes,
    /// whether it succeeded or not.
    #[allow(clippy::expect_used)] // the semaphore is never closed
    pub(crate) async fn dispatch<F>(&mut self, work: F)
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .expect("worker pool semaphore closed");
        self.dispatched += 1;
        self.tasks.spawn_blocking(move || {
            let outcome = work();
            drop(permit);
            outcome
        });
    }

    /// Total number of jobs handed to the pool so far.
    pub(crate) const fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Completion barrier: resolves once every dispatched job has finished,
    /// returning the outcomes in completion order.
    pub(crate) async fn join(&mut self) -> Vec<T> {
        let mut outcomes = Vec::with_capacity(self.dispatched);
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => warn!("worker task failed: {err}"),
            }
        }
        outcomes
    }
}

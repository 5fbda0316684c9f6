use crate::error::GateError;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

type Job = BoxFuture<'static, ()>;

/// Single-worker FIFO execution queue.
///
/// Every submitted task runs to completion before the next one starts, in
/// submission order. Tasks are enqueued when `submit` is called, not when the
/// returned future is first polled.
#[derive(Clone)]
pub struct SerializationGate {
    sender: mpsc::UnboundedSender<Job>,
}

impl SerializationGate {
    /// Spawns the worker task on the current tokio runtime.
    pub fn spawn() -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();

        tokio::spawn(async move {
            while let Some(job) = receiver.recv().await {
                job.await;
            }
            debug!("Serialization gate closed, worker exiting");
        });

        Self { sender }
    }

    pub fn submit<F, T>(&self, task: F) -> impl Future<Output = Result<T, GateError>> + Send + 'static
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();

        let job: Job = Box::pin(async move {
            match AssertUnwindSafe(task).catch_unwind().await {
                Ok(output) => {
                    // Caller may have stopped waiting; the task still ran.
                    let _ = tx.send(output);
                }
                Err(_) => error!("Queued task panicked, continuing with next task"),
            }
        });

        let queued = self.sender.send(job).is_ok();

        async move {
            if !queued {
                return Err(GateError::Closed);
            }
            rx.await.map_err(|_| GateError::TaskAborted)
        }
    }
}

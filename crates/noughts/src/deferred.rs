//! Cancellable delayed task.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// A closure that runs once after a delay unless cancelled first.
///
/// Cancelling is idempotent: cancelling a task that already ran or was
/// already cancelled does nothing. Dropping the handle cancels the task.
#[derive(Debug, Default)]
pub struct ScheduledMove {
    handle: Option<JoinHandle<()>>,
}

impl ScheduledMove {
    /// Spawns `task` on the current tokio runtime to run after `delay`.
    #[instrument(skip(task))]
    pub fn spawn<F>(delay: Duration, task: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Stops the task if it has not run yet.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                debug!("Cancelling scheduled move");
            }
            handle.abort();
        }
    }

    /// Checks if the task is still waiting or running.
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ScheduledMove {
    fn drop(&mut self) {
        self.cancel();
    }
}

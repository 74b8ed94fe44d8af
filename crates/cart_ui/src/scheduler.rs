use std::time::Duration;

use tokio::{task::JoinHandle, time::Instant};

/// A delayed UI action running on the tokio runtime.
///
/// Dropping the handle does not cancel the action; only [`ScheduledTask::cancel`] does.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn after(delay: Duration, action: impl FnOnce() + Send + 'static) -> Self {
        // Deadline is fixed now, not when the task first gets polled.
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            action();
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

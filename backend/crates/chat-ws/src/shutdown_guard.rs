use crate::ShutdownCoordinator;

use tokio::sync::watch;

/// Per-task view of the shutdown signal
pub struct ShutdownGuard {
    shutdown_rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Wait for the shutdown signal. Returns at once if it already fired.
    pub async fn wait(&mut self) {
        // An Err means the coordinator is gone, which is shutdown as well
        let _ = self.shutdown_rx.wait_for(|stopped| *stopped).await;
    }

    /// Non-blocking check
    pub fn poll_shutdown(&self) -> bool {
        *self.shutdown_rx.borrow()
    }
}

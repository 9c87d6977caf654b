use crate::ShutdownCoordinator;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// Lets one task wait for shutdown
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
            triggered: coordinator.flag(),
        }
    }

    /// Resolves once shutdown has been triggered, including before this
    /// guard was created.
    pub async fn wait(&mut self) {
        if self.triggered.load(Ordering::Acquire) {
            return;
        }
        let _ = self.shutdown_rx.recv().await;
    }

    /// Owned form of [`ShutdownGuard::wait`], for APIs that take a future
    pub async fn into_wait(mut self) {
        self.wait().await;
    }

    /// Non-blocking check
    pub fn poll_shutdown(&mut self) -> bool {
        self.triggered.load(Ordering::Acquire) || self.shutdown_rx.try_recv().is_ok()
    }
}

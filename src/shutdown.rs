use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Lightweight handle for signaling and awaiting shutdown.
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown requested");
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag to avoid TOCTOU race:
        // without this, signal() could fire between the check and the await,
        // and notify_waiters() would have no subscribers, losing the notification.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}

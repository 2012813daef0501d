//! Shutdown coordination.

use tokio::sync::broadcast;

/// Broadcast handle every long-running task can subscribe to.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the signal. Subscribers created afterwards will not see it.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Trigger once the process receives SIGINT or SIGTERM.
    pub fn trigger_on_signal(&self) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            crate::lifecycle::signals::wait_for_signal().await;
            let _ = tx.send(());
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

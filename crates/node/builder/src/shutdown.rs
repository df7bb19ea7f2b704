//! Shutdown signalling.

use std::sync::Arc;

use tokio::sync::watch;

/// Create a connected trigger and signal pair.
pub fn shutdown_channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx: Arc::new(tx) }, Shutdown { rx })
}

/// Sending half; firing it resolves every [`Shutdown`] of the pair.
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownTrigger {
    /// Request shutdown. Firing more than once has no further effect.
    pub fn fire(&self) {
        self.tx.send_replace(true);
    }
}

/// Receiving half, cloned into every task that has to stop on shutdown.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// Whether shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until shutdown is requested.
    ///
    /// Also returns once every trigger has been dropped.
    pub async fn wait(&mut self) {
        // a closed channel means nobody is left to fire it
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}

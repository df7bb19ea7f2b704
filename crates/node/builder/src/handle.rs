//! Handle for managing a running client.

use tracing::{info, warn};

use crate::{ClientComponents, Shutdown, ShutdownTrigger};

/// Handle to a running client.
///
/// Provides access to the subsystem configuration and the shutdown signal.
#[derive(Debug)]
pub struct NodeHandle {
    /// Subsystem configuration.
    components: ClientComponents,
    /// Fires the shutdown signal.
    trigger: ShutdownTrigger,
    /// Shutdown signal for waiting.
    shutdown: Shutdown,
}

impl NodeHandle {
    /// Create a new client handle.
    pub const fn new(
        components: ClientComponents,
        trigger: ShutdownTrigger,
        shutdown: Shutdown,
    ) -> Self {
        Self { components, trigger, shutdown }
    }

    /// Get a reference to the subsystem configuration.
    pub const fn components(&self) -> &ClientComponents {
        &self.components
    }

    /// Get a clone of the shutdown signal.
    pub fn shutdown_signal(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Get a trigger that stops the client.
    pub fn shutdown_trigger(&self) -> ShutdownTrigger {
        self.trigger.clone()
    }

    /// Wait until Ctrl+C is pressed or the shutdown trigger fires.
    pub async fn wait_for_shutdown(self) {
        let Self { trigger, mut shutdown, .. } = self;

        tokio::select! {
            result = tokio::signal::ctrl_c() => match result {
                Ok(()) => info!("Received Ctrl+C, shutting down"),
                Err(err) => warn!(error = %err, "Failed to listen for Ctrl+C, shutting down"),
            },
            () = shutdown.wait() => {}
        }

        trigger.fire();
        info!("Client shutdown complete");
    }
}

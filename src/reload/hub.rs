// src/reload/hub.rs

use tokio::sync::broadcast;
use tracing::debug;

/// Signals queued per client before old ones are dropped; a lagged client
/// still reloads, so losing intermediate signals is harmless.
const RELOAD_CHANNEL_CAPACITY: usize = 16;

/// Fan-out point for reload signals.
///
/// Every connected browser holds a receiver; [`notify_reload`] wakes them
/// all. Sending with no receivers is a no-op, and clients can connect or
/// disconnect at any time without coordinating with the poll loop.
///
/// [`notify_reload`]: ReloadHub::notify_reload
#[derive(Debug, Clone)]
pub struct ReloadHub {
    tx: broadcast::Sender<()>,
}

impl ReloadHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(RELOAD_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Tell every connected client to refresh.
    pub fn notify_reload(&self) {
        // Err just means nobody is listening right now.
        let notified = self.tx.send(()).unwrap_or(0);
        debug!(clients = notified, "reload signal sent");
    }

    /// Register interest in reload signals; one receiver per client.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Number of currently connected clients.
    pub fn client_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

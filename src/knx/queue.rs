use tokio::sync::mpsc;
use tracing::debug;

use crate::core::{Error, Result};
use super::telegram::Telegram;

/// Default capacity of the outgoing telegram channel
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Handle to the outgoing telegram queue
///
/// Cloned into every remote value. The transport owns the receiving end and
/// drains it in order; submissions from one handle stay FIFO.
#[derive(Debug, Clone)]
pub struct TelegramQueue {
    tx: mpsc::Sender<Telegram>,
}

impl TelegramQueue {
    /// Wraps an existing sender
    pub fn new(tx: mpsc::Sender<Telegram>) -> Self {
        TelegramQueue { tx }
    }

    /// Creates a bounded queue and returns the handle with its receiver
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Telegram>) {
        let (tx, rx) = mpsc::channel(capacity);
        (TelegramQueue { tx }, rx)
    }

    /// Submits a telegram, waiting only while the channel is full
    pub async fn submit(&self, telegram: Telegram) -> Result<()> {
        debug!("Queueing {}", telegram);
        self.tx
            .send(telegram)
            .await
            .map_err(|e| Error::queue(format!("Failed to queue telegram: {}", e)))
    }
}

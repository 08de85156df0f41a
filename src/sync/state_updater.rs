use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{Error, Result};
use crate::devices::Devices;
use crate::knx::TelegramQueue;

/// Configuration for periodic state refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateUpdaterConfig {
    /// Interval between two sync passes
    #[serde(serialize_with = "crate::core::serde::serialize_duration")]
    #[serde(deserialize_with = "crate::core::serde::deserialize_duration")]
    pub timeout: Duration,
    /// One-time delay before the first pass
    #[serde(serialize_with = "crate::core::serde::serialize_duration")]
    #[serde(deserialize_with = "crate::core::serde::deserialize_duration")]
    pub start_timeout: Duration,
}

impl Default for StateUpdaterConfig {
    fn default() -> Self {
        StateUpdaterConfig {
            timeout: Duration::from_secs(3600),
            start_timeout: Duration::from_secs(10),
        }
    }
}

/// Periodically asks every device to refresh its state from the bus
///
/// Passes run back-to-back: the interval is measured from the end of one
/// pass to the start of the next, not aligned to the wall clock.
#[derive(Clone)]
pub struct StateUpdater {
    devices: Arc<Mutex<Devices>>,
    queue: TelegramQueue,
    config: StateUpdaterConfig,
}

impl StateUpdater {
    /// Creates a new state updater submitting its reads to `queue`
    pub fn new(devices: Arc<Mutex<Devices>>, queue: TelegramQueue, config: StateUpdaterConfig) -> Self {
        StateUpdater { devices, queue, config }
    }

    pub fn config(&self) -> &StateUpdaterConfig {
        &self.config
    }

    /// Spawns the update loop in the background
    ///
    /// Every call spawns another loop. Abort the returned handle to stop it.
    pub fn start(&self) -> JoinHandle<()> {
        tokio::spawn(self.clone().run())
    }

    /// Update loop, never returns
    pub async fn run(self) {
        tokio::time::sleep(self.config.start_timeout).await;
        info!(
            "Starting state updater (interval {:?})",
            self.config.timeout
        );
        loop {
            if let Err(e) = self.sync_once().await {
                warn!("State update pass failed: {}", e);
            }
            tokio::time::sleep(self.config.timeout).await;
        }
    }

    /// Runs a single sync pass
    ///
    /// The device lock is released before the reads are queued, so a
    /// transport routing inbound telegrams into the devices while it drains
    /// the queue keeps making progress. A failed read does not stop the pass;
    /// failures are reported once every read was tried.
    pub async fn sync_once(&self) -> Result<()> {
        let requests = {
            let devices = self.devices.lock().await;
            debug!("Syncing {} devices", devices.len());
            devices.read_requests()
        };

        let total = requests.len();
        let mut failed = Vec::new();
        for telegram in requests {
            let group_address = telegram.group_address;
            if let Err(e) = self.queue.submit(telegram).await {
                warn!("Failed to request state of {}: {}", group_address, e);
                failed.push(group_address.to_string());
            }
        }
        if failed.is_empty() {
            Ok(())
        } else {
            Err(Error::sync(format!(
                "{} of {} read requests failed: {}",
                failed.len(),
                total,
                failed.join(", ")
            )))
        }
    }
}

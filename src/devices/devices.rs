use tracing::{debug, warn};

use crate::core::Result;
use crate::knx::Telegram;
use super::device::Device;

/// Ordered collection of the devices known to this client
#[derive(Default)]
pub struct Devices {
    devices: Vec<Box<dyn Device>>,
}

impl Devices {
    pub fn new() -> Self {
        Devices::default()
    }

    /// Adds a device
    pub fn add(&mut self, device: impl Device + 'static) {
        self.devices.push(Box::new(device));
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Looks up a device by name
    pub fn get(&self, name: &str) -> Option<&dyn Device> {
        self.devices
            .iter()
            .find(|device| device.name() == name)
            .map(|device| device.as_ref())
    }

    /// Looks up a device by name for mutation
    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Device + 'static)> {
        self.devices
            .iter_mut()
            .find(|device| device.name() == name)
            .map(|device| device.as_mut())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Device> {
        self.devices.iter().map(|device| device.as_ref())
    }

    /// Read requests refreshing every device, in device order
    ///
    /// Building the requests does not touch the queue, so a caller holding
    /// the collection behind a lock can release it before submitting.
    pub fn read_requests(&self) -> Vec<Telegram> {
        self.devices
            .iter()
            .flat_map(|device| device.state_addresses())
            .map(Telegram::read)
            .collect()
    }

    /// Routes an inbound telegram to every device bound to its address
    ///
    /// Returns true if at least one device consumed it. Every bound device
    /// sees the telegram; the first parse failure is returned afterwards.
    pub async fn process(&mut self, telegram: &Telegram) -> Result<bool> {
        let mut consumed = false;
        let mut first_error = None;
        for device in self.devices.iter_mut() {
            if !device.has_group_address(telegram.group_address) {
                continue;
            }
            match device.process(telegram).await {
                Ok(processed) => consumed |= processed,
                Err(e) => {
                    warn!("{}: could not process {}: {}", device.name(), telegram, e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        if let Some(e) = first_error {
            return Err(e);
        }
        if !consumed {
            debug!("No device for {}", telegram.group_address);
        }
        Ok(consumed)
    }
}

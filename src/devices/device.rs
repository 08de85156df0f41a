use futures::future::BoxFuture;

use crate::core::{GroupAddress, Result};
use crate::knx::Telegram;

/// A bus device composed of one or more remote values
pub trait Device: Send + Sync {
    /// Unique device name
    fn name(&self) -> &str;

    /// Returns true if any of the device's remote values uses the address
    fn has_group_address(&self, group_address: GroupAddress) -> bool;

    /// Addresses read from the bus when the device state is refreshed
    fn state_addresses(&self) -> Vec<GroupAddress>;

    /// Processes an inbound telegram, returning whether it was consumed
    fn process<'a>(&'a mut self, telegram: &'a Telegram) -> BoxFuture<'a, Result<bool>>;
}

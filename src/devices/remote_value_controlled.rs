//! Remote value for DPT 3.xxx (controlled dimming / blinds steps)

use crate::core::Result;
use crate::knx::{ControlValue, DptControlled3Bit};
use super::remote_value::RemoteValue;

/// Remote value of KNX DPT 3.xxx / DPT_Controlled_xxxx
pub type RemoteValueControlled = RemoteValue<DptControlled3Bit>;

impl RemoteValue<DptControlled3Bit> {
    /// Start moving up with the given speed
    pub async fn start_upwards(&mut self, speed: u8) -> Result<()> {
        self.set(ControlValue::up(speed)).await
    }

    /// Start moving down with the given speed
    pub async fn start_downwards(&mut self, speed: u8) -> Result<()> {
        self.set(ControlValue::down(speed)).await
    }

    /// Stop moving
    pub async fn stop(&mut self) -> Result<()> {
        self.set(ControlValue::stop()).await
    }
}

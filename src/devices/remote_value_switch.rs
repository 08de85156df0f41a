//! Remote value for DPT 1.001 (switch)

use crate::core::Result;
use crate::knx::DptSwitch;
use super::remote_value::RemoteValue;

/// Remote value of KNX DPT 1.001
pub type RemoteValueSwitch = RemoteValue<DptSwitch>;

impl RemoteValue<DptSwitch> {
    pub async fn on(&mut self) -> Result<()> {
        self.set(true).await
    }

    pub async fn off(&mut self) -> Result<()> {
        self.set(false).await
    }
}

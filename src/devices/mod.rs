//! Devices and remote values
//!
//! A remote value binds a DPT codec to a group address and keeps the last
//! known value. Devices compose remote values and are kept in a `Devices`
//! collection that the state updater syncs periodically.

pub mod device;
pub mod devices;
pub mod light;
pub mod remote_value;
pub mod remote_value_controlled;
pub mod remote_value_switch;

pub use self::device::Device;
pub use self::devices::Devices;
pub use self::light::{Light, LightConfig};
pub use self::remote_value::{AfterUpdateCallback, RemoteValue};
pub use self::remote_value_controlled::RemoteValueControlled;
pub use self::remote_value_switch::RemoteValueSwitch;

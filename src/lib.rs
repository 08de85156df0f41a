//! KNX bus client
//!
//! Represents actuator and sensor state as typed values, encodes and decodes
//! them with datapoint type (DPT) codecs, and keeps local state in sync with
//! the bus through outgoing telegrams and periodic state refresh.
//!
//! ```no_run
//! use knx_bus::devices::{Light, LightConfig};
//! use knx_bus::knx::TelegramQueue;
//!
//! # async fn demo() -> knx_bus::Result<()> {
//! let (queue, _outgoing) = TelegramQueue::channel(100);
//! let config = LightConfig {
//!     group_address_dimm: Some("1/0/14".parse()?),
//!     ..Default::default()
//! };
//! let mut light = Light::new(queue, "TestLight", &config);
//! light.start_dimming_up(3).await?;
//! light.stop_dimming().await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod devices;
pub mod knx;
pub mod sync;

// Re-export commonly used items
pub use crate::core::{Error, GroupAddress, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

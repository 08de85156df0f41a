//! Core types for the KNX bus client
//!
//! This module contains the error taxonomy, bus addressing and the
//! configuration surface used throughout the library.

pub mod config;
pub mod error;
pub mod serde;
pub mod types;

pub use self::config::{DeviceKind, GeneralConfig, XknxConfig, DEFAULT_CONFIG_FILE};
pub use self::error::{Error, Result};
pub use self::types::{GroupAddress, PhysicalAddress};

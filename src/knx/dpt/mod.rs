//! Datapoint types
//!
//! A DPT is a stateless bidirectional codec between a fixed-width byte
//! sequence and a structured value, validated in both directions.

pub mod controlled_3bit;
pub mod switch;

pub use self::controlled_3bit::{ControlCommand, ControlValue, DptControlled3Bit};
pub use self::switch::DptSwitch;

use std::fmt::Debug;

use crate::core::{Error, Result};
use super::payload::Payload;

/// Uniform encode/decode capability shared by all datapoint types
pub trait DptCodec: Send + Sync + 'static {
    /// Semantic value produced and consumed by the codec
    type Value: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Number of bytes on the wire
    const PAYLOAD_LENGTH: usize;

    /// Human readable DPT name used in diagnostics
    const NAME: &'static str;

    /// Parses raw wire bytes
    fn from_knx(raw: &[u8]) -> Result<Self::Value>;

    /// Serializes a value to raw wire bytes
    fn to_knx(value: &Self::Value) -> Result<Vec<u8>>;

    /// Wraps the encoded value in the payload kind this DPT travels in
    fn to_payload(value: &Self::Value) -> Result<Payload> {
        Ok(Payload::array(Self::to_knx(value)?))
    }

    /// Decodes a payload, rejecting the wrong payload kind
    fn from_payload(payload: &Payload) -> Result<Self::Value> {
        match payload {
            Payload::Array(raw) => Self::from_knx(raw),
            Payload::Binary(_) => Err(Error::conversion(
                format!("{} expects an array payload", Self::NAME),
                payload,
            )),
        }
    }
}

/// Checks the length contract every DPT enforces on raw input
pub fn check_length(raw: &[u8], length: usize, name: &str) -> Result<()> {
    if raw.len() != length {
        return Err(Error::conversion(
            format!("{} expects {} byte(s), got {}", name, length, raw.len()),
            raw,
        ));
    }
    Ok(())
}

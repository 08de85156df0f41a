use crate::core::{Error, Result};
use crate::knx::payload::Payload;
use super::{check_length, DptCodec};

/// KNX boolean switch datapoint (DPT 1.001), travels inline
#[derive(Debug, Clone, Copy, Default)]
pub struct DptSwitch;

impl DptCodec for DptSwitch {
    type Value = bool;

    const PAYLOAD_LENGTH: usize = 1;
    const NAME: &'static str = "DPTSwitch";

    fn from_knx(raw: &[u8]) -> Result<bool> {
        check_length(raw, Self::PAYLOAD_LENGTH, Self::NAME)?;
        match raw[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::conversion("Can't parse DPTSwitch", other)),
        }
    }

    fn to_knx(value: &bool) -> Result<Vec<u8>> {
        Ok(vec![u8::from(*value)])
    }

    fn to_payload(value: &bool) -> Result<Payload> {
        Ok(Payload::Binary(u8::from(*value)))
    }

    fn from_payload(payload: &Payload) -> Result<bool> {
        match payload {
            Payload::Binary(value) => Self::from_knx(&[*value]),
            Payload::Array(_) => Err(Error::conversion("DPTSwitch expects a binary payload", payload)),
        }
    }
}

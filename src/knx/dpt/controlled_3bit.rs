use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::knx::payload::Payload;
use super::{check_length, DptCodec};

/// Direction of a controlled (dimming/blinds) step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlCommand {
    Stop,
    Up,
    Down,
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlCommand::Stop => write!(f, "Stop"),
            ControlCommand::Up => write!(f, "Up"),
            ControlCommand::Down => write!(f, "Down"),
        }
    }
}

/// Semantic value of DPT 3.xxx
///
/// `speed` is only meaningful for `Up`/`Down` and must lie in `0..=7`.
/// Decoding a stop always yields speed 0; encoding a stop ignores speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawControlValue")]
pub struct ControlValue {
    pub command: ControlCommand,
    pub speed: u8,
}

/// Loosely typed form; a stop ignores `speed`, which may then be omitted
#[derive(Deserialize)]
struct RawControlValue {
    command: ControlCommand,
    speed: Option<i64>,
}

impl TryFrom<RawControlValue> for ControlValue {
    type Error = Error;

    fn try_from(raw: RawControlValue) -> Result<Self> {
        match (raw.command, raw.speed) {
            (ControlCommand::Stop, _) => Ok(ControlValue::stop()),
            (command, Some(speed)) => u8::try_from(speed)
                .map(|speed| ControlValue { command, speed })
                .map_err(|_| Error::conversion("speed out of range", speed)),
            (command, None) => Err(Error::conversion("speed missing", command)),
        }
    }
}

impl ControlValue {
    pub fn stop() -> Self {
        ControlValue { command: ControlCommand::Stop, speed: 0 }
    }

    pub fn up(speed: u8) -> Self {
        ControlValue { command: ControlCommand::Up, speed }
    }

    pub fn down(speed: u8) -> Self {
        ControlValue { command: ControlCommand::Down, speed }
    }
}

/// KNX 4 bit control datapoint (DPT 3.xxx), used for dimming or blinds
///
/// Bit 3 is the direction (1 = up), bits 0-2 the step speed. The high
/// nibble must be clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct DptControlled3Bit;

const DIRECTION_BIT: u8 = 0x08;
const SPEED_MASK: u8 = 0x07;
const MAX_SPEED: u8 = 7;

impl DptCodec for DptControlled3Bit {
    type Value = ControlValue;

    const PAYLOAD_LENGTH: usize = 1;
    const NAME: &'static str = "DPTControlled3Bit";

    fn from_knx(raw: &[u8]) -> Result<ControlValue> {
        check_length(raw, Self::PAYLOAD_LENGTH, Self::NAME)?;
        let value = raw[0];

        if value & 0xF0 != 0 {
            return Err(Error::conversion("Can't parse DPTControlled3Bit", value));
        }
        let speed = value & SPEED_MASK;
        // direction is irrelevant at zero speed
        let command = if speed == 0 {
            ControlCommand::Stop
        } else if value & DIRECTION_BIT != 0 {
            ControlCommand::Up
        } else {
            ControlCommand::Down
        };
        Ok(ControlValue { command, speed })
    }

    fn to_knx(value: &ControlValue) -> Result<Vec<u8>> {
        if value.command == ControlCommand::Stop {
            return Ok(vec![0x00]);
        }
        if value.speed > MAX_SPEED {
            return Err(Error::conversion("Can't serialize DPTControlled3Bit", value));
        }
        match value.command {
            ControlCommand::Up => Ok(vec![DIRECTION_BIT | value.speed]),
            ControlCommand::Down => Ok(vec![value.speed]),
            ControlCommand::Stop => Ok(vec![0x00]),
        }
    }

    fn to_payload(value: &ControlValue) -> Result<Payload> {
        let raw = Self::to_knx(value)?;
        Ok(Payload::Binary(raw[0]))
    }

    fn from_payload(payload: &Payload) -> Result<ControlValue> {
        match payload {
            Payload::Binary(value) => Self::from_knx(&[*value]),
            Payload::Array(_) => Err(Error::conversion(
                "DPTControlled3Bit expects a binary payload",
                payload,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(byte: u8) -> ControlValue {
        DptControlled3Bit::from_knx(&[byte]).unwrap()
    }

    fn encode(value: ControlValue) -> Vec<u8> {
        DptControlled3Bit::to_knx(&value).unwrap()
    }

    #[test]
    fn test_from_knx_up() {
        assert_eq!(decode(0x09), ControlValue::up(1));
        assert_eq!(decode(0x0F), ControlValue::up(7));
    }

    #[test]
    fn test_to_knx_up() {
        assert_eq!(encode(ControlValue::up(1)), vec![0x09]);
        assert_eq!(encode(ControlValue::up(7)), vec![0x0F]);
    }

    #[test]
    fn test_from_knx_down() {
        assert_eq!(decode(0x01), ControlValue::down(1));
        assert_eq!(decode(0x07), ControlValue::down(7));
    }

    #[test]
    fn test_to_knx_down() {
        assert_eq!(encode(ControlValue::down(1)), vec![0x01]);
        assert_eq!(encode(ControlValue::down(7)), vec![0x07]);
    }

    #[test]
    fn test_from_knx_stop() {
        assert_eq!(decode(0x00), ControlValue::stop());
    }

    #[test]
    fn test_from_knx_stop_ignores_direction() {
        assert_eq!(decode(0x08), ControlValue::stop());
    }

    #[test]
    fn test_to_knx_stop_ignores_speed() {
        assert_eq!(encode(ControlValue::stop()), vec![0x00]);
        let stop = ControlValue { command: ControlCommand::Stop, speed: 7 };
        assert_eq!(encode(stop), vec![0x00]);
        let stop = ControlValue { command: ControlCommand::Stop, speed: 200 };
        assert_eq!(decode(encode(stop)[0]), ControlValue::stop());
    }

    #[test]
    fn test_round_trip_moving() {
        for speed in 1..=7 {
            assert_eq!(decode(encode(ControlValue::up(speed))[0]), ControlValue::up(speed));
            assert_eq!(decode(encode(ControlValue::down(speed))[0]), ControlValue::down(speed));
        }
    }

    #[test]
    fn test_from_knx_wrong_size() {
        let err = DptControlled3Bit::from_knx(&[0xF8, 0x23]).unwrap_err();
        assert!(matches!(err, Error::Conversion { .. }));
        assert!(DptControlled3Bit::from_knx(&[]).is_err());
    }

    #[test]
    fn test_from_knx_wrong_bytes() {
        let err = DptControlled3Bit::from_knx(&[0x1F]).unwrap_err();
        assert!(matches!(err, Error::Conversion { .. }));
    }

    #[test]
    fn test_to_knx_wrong_speed() {
        assert!(DptControlled3Bit::to_knx(&ControlValue::down(8)).is_err());
        assert!(DptControlled3Bit::to_knx(&ControlValue::up(255)).is_err());
    }

    #[test]
    fn test_to_knx_wrong_shape() {
        // Inputs arriving as loosely typed data are rejected before encoding
        assert!(serde_json::from_str::<ControlValue>(r#""hello""#).is_err());
        assert!(serde_json::from_str::<ControlValue>(r#"{"command":"up","speed":1}"#).is_err());
        assert!(serde_json::from_str::<ControlValue>(r#"{"command":"Down","speed":-1}"#).is_err());
        assert!(serde_json::from_str::<ControlValue>(r#"{"command":"Up"}"#).is_err());
        assert_eq!(
            serde_json::from_str::<ControlValue>(r#"{"command":"Stop"}"#).unwrap(),
            ControlValue::stop()
        );
    }

    #[test]
    fn test_stop_ignores_speed() {
        for input in [
            r#"{"command":"Stop","speed":-1}"#,
            r#"{"command":"Stop","speed":200}"#,
            r#"{"command":"Stop","speed":3}"#,
        ] {
            assert_eq!(serde_json::from_str::<ControlValue>(input).unwrap(), ControlValue::stop());
        }
        assert!(serde_json::from_str::<ControlValue>(r#"{"command":"Up","speed":256}"#).is_err());
    }

    #[test]
    fn test_payload_kind() {
        assert_eq!(
            DptControlled3Bit::to_payload(&ControlValue::up(7)).unwrap(),
            Payload::Binary(0x0F)
        );
        assert!(DptControlled3Bit::from_payload(&Payload::array(vec![0x01u8])).is_err());
        assert_eq!(
            DptControlled3Bit::from_payload(&Payload::Binary(0x05)).unwrap(),
            ControlValue::down(5)
        );
    }
}

use std::fmt;

use crate::core::GroupAddress;
use super::payload::Payload;

/// Application layer service carried by a telegram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TelegramType {
    #[default]
    GroupValueWrite,
    GroupValueRead,
    GroupValueResponse,
}

/// Whether a telegram was received from or is destined for the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TelegramDirection {
    Incoming,
    #[default]
    Outgoing,
}

/// An addressed message unit on the bus
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Telegram {
    /// Destination group address
    pub group_address: GroupAddress,
    /// Service type
    pub telegram_type: TelegramType,
    /// Direction relative to this client
    pub direction: TelegramDirection,
    /// Data portion, absent for read requests
    pub payload: Option<Payload>,
}

impl Telegram {
    /// Creates an outgoing group write
    pub fn new(group_address: GroupAddress, payload: Payload) -> Self {
        Telegram {
            group_address,
            telegram_type: TelegramType::GroupValueWrite,
            direction: TelegramDirection::Outgoing,
            payload: Some(payload),
        }
    }

    /// Creates an outgoing group read request
    pub fn read(group_address: GroupAddress) -> Self {
        Telegram {
            group_address,
            telegram_type: TelegramType::GroupValueRead,
            direction: TelegramDirection::Outgoing,
            payload: None,
        }
    }

    /// Creates an incoming group write as delivered by the transport
    pub fn incoming(group_address: GroupAddress, payload: Payload) -> Self {
        Telegram {
            direction: TelegramDirection::Incoming,
            ..Telegram::new(group_address, payload)
        }
    }

    /// Sets the service type
    pub fn with_type(mut self, telegram_type: TelegramType) -> Self {
        self.telegram_type = telegram_type;
        self
    }
}

impl fmt::Display for Telegram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Telegram group_address=\"{}\" type={:?} direction={:?} payload=",
            self.group_address, self.telegram_type, self.direction
        )?;
        match &self.payload {
            Some(payload) => write!(f, "{}>", payload),
            None => write!(f, "None>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let addr = GroupAddress::new(1, 2, 3).unwrap();
        let telegram = Telegram::new(addr, Payload::Binary(0x0f));
        assert_eq!(telegram.telegram_type, TelegramType::GroupValueWrite);
        assert_eq!(telegram.direction, TelegramDirection::Outgoing);
        assert_eq!(telegram, Telegram::new(addr, Payload::Binary(0x0f)));
        assert_ne!(telegram, Telegram::incoming(addr, Payload::Binary(0x0f)));

        let response = Telegram::incoming(addr, Payload::Binary(1))
            .with_type(TelegramType::GroupValueResponse);
        assert_eq!(response.telegram_type, TelegramType::GroupValueResponse);
        assert_eq!(response.direction, TelegramDirection::Incoming);
    }

    #[test]
    fn test_read_has_no_payload() {
        let telegram = Telegram::read(GroupAddress::new(1, 2, 3).unwrap());
        assert_eq!(telegram.telegram_type, TelegramType::GroupValueRead);
        assert!(telegram.payload.is_none());
        assert_eq!(
            telegram.to_string(),
            "<Telegram group_address=\"1/2/3\" type=GroupValueRead direction=Outgoing payload=None>"
        );
    }
}

//! KNX wire model
//!
//! Payloads, telegrams, the outgoing telegram queue and the datapoint type
//! codecs that translate between payloads and semantic values.

pub mod dpt;
pub mod payload;
pub mod queue;
pub mod telegram;

pub use self::dpt::{ControlCommand, ControlValue, DptCodec, DptControlled3Bit, DptSwitch};
pub use self::payload::Payload;
pub use self::queue::{TelegramQueue, DEFAULT_QUEUE_CAPACITY};
pub use self::telegram::{Telegram, TelegramDirection, TelegramType};

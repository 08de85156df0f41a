use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::core::{Error, GroupAddress, Result};
use crate::knx::{DptCodec, Payload, Telegram, TelegramQueue, TelegramType};

/// Callback invoked after the stored value was updated
pub type AfterUpdateCallback<V> = Box<dyn FnMut(&V) + Send + Sync>;

/// Binding of one DPT codec to a group address, with the last known value
///
/// The value stays `None` until a telegram was decoded or a value was sent.
pub struct RemoteValue<D: DptCodec> {
    /// Outgoing telegram queue
    queue: TelegramQueue,
    /// Address written to
    group_address: Option<GroupAddress>,
    /// Address read from when syncing, falls back to `group_address`
    group_address_state: Option<GroupAddress>,
    /// Owning device, reported in parse errors
    device_name: String,
    /// Last known value
    value: Option<D::Value>,
    /// Update callback
    after_update_cb: Option<AfterUpdateCallback<D::Value>>,
    codec: PhantomData<D>,
}

impl<D: DptCodec> RemoteValue<D> {
    /// Creates a remote value bound to an optional write address
    pub fn new(
        queue: TelegramQueue,
        group_address: Option<GroupAddress>,
        device_name: impl Into<String>,
    ) -> Self {
        RemoteValue {
            queue,
            group_address,
            group_address_state: None,
            device_name: device_name.into(),
            value: None,
            after_update_cb: None,
            codec: PhantomData,
        }
    }

    /// Sets a separate address used for state reads
    pub fn with_state_address(mut self, group_address_state: Option<GroupAddress>) -> Self {
        self.group_address_state = group_address_state;
        self
    }

    /// Registers the update callback
    pub fn with_callback(mut self, callback: impl FnMut(&D::Value) + Send + Sync + 'static) -> Self {
        self.after_update_cb = Some(Box::new(callback));
        self
    }

    pub fn group_address(&self) -> Option<GroupAddress> {
        self.group_address
    }

    pub fn group_address_state(&self) -> Option<GroupAddress> {
        self.group_address_state
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Returns true if any group address is bound
    pub fn initialized(&self) -> bool {
        self.group_address.is_some() || self.group_address_state.is_some()
    }

    /// Returns true if the telegram address belongs to this value
    pub fn has_group_address(&self, group_address: GroupAddress) -> bool {
        self.group_address == Some(group_address) || self.group_address_state == Some(group_address)
    }

    /// Last decoded value, `None` while unknown
    pub fn value(&self) -> Option<&D::Value> {
        self.value.as_ref()
    }

    /// Converts a value to its payload
    pub fn to_knx(&self, value: &D::Value) -> Result<Payload> {
        D::to_payload(value)
    }

    /// Converts a payload to its value, naming the device on failure
    pub fn from_knx(&self, payload: &Payload) -> Result<D::Value> {
        D::from_payload(payload).map_err(|e| {
            Error::could_not_parse(
                format!("payload invalid: {}", e),
                payload,
                self.device_name.as_str(),
            )
        })
    }

    /// Processes an inbound telegram
    ///
    /// Returns `Ok(false)` for read requests and telegrams addressed
    /// elsewhere. Fires the callback on every successful decode, changed or not.
    pub async fn process(&mut self, telegram: &Telegram) -> Result<bool> {
        if telegram.telegram_type == TelegramType::GroupValueRead
            || !self.has_group_address(telegram.group_address)
        {
            return Ok(false);
        }
        let payload = telegram.payload.as_ref().ok_or_else(|| {
            Error::could_not_parse("payload missing", &telegram.payload, self.device_name.as_str())
        })?;
        let value = self.from_knx(payload)?;
        debug!(
            "{}: {} -> {:?}",
            self.device_name, telegram.group_address, value
        );
        self.value = Some(value);
        if let (Some(callback), Some(value)) = (self.after_update_cb.as_mut(), self.value.as_ref()) {
            callback(value);
        }
        Ok(true)
    }

    /// Encodes and submits a value to the write address
    ///
    /// The stored value is replaced after submission; the callback fires only
    /// when it actually changed.
    pub async fn set(&mut self, value: D::Value) -> Result<()> {
        let Some(group_address) = self.group_address else {
            warn!(
                "{}: cannot set {:?}, no group address bound",
                self.device_name, value
            );
            return Ok(());
        };
        let payload = self.to_knx(&value)?;
        self.queue.submit(Telegram::new(group_address, payload)).await?;

        let updated = self.value.as_ref() != Some(&value);
        self.value = Some(value);
        if updated {
            if let (Some(callback), Some(value)) = (self.after_update_cb.as_mut(), self.value.as_ref()) {
                callback(value);
            }
        }
        Ok(())
    }

    /// Address the current value is read from
    pub fn state_address(&self) -> Option<GroupAddress> {
        self.group_address_state.or(self.group_address)
    }

    /// Requests the current value from the bus with a single read
    pub async fn sync(&self) -> Result<()> {
        match self.state_address() {
            Some(group_address) => self.queue.submit(Telegram::read(group_address)).await,
            None => Ok(()),
        }
    }
}

impl<D: DptCodec> fmt::Debug for RemoteValue<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteValue")
            .field("dpt", &D::NAME)
            .field("group_address", &self.group_address)
            .field("group_address_state", &self.group_address_state)
            .field("device_name", &self.device_name)
            .field("value", &self.value)
            .finish()
    }
}

use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GroupAddress, Result};
use crate::knx::{ControlValue, Telegram, TelegramQueue};
use super::device::Device;
use super::remote_value_controlled::RemoteValueControlled;
use super::remote_value_switch::RemoteValueSwitch;

/// Configuration entry of a light
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightConfig {
    #[serde(default)]
    pub group_address_switch: Option<GroupAddress>,
    #[serde(default)]
    pub group_address_switch_state: Option<GroupAddress>,
    #[serde(default)]
    pub group_address_dimm: Option<GroupAddress>,
}

/// A switchable light with relative (step) dimming
#[derive(Debug)]
pub struct Light {
    name: String,
    switch: RemoteValueSwitch,
    dimm: RemoteValueControlled,
}

impl Light {
    pub fn new(queue: TelegramQueue, name: impl Into<String>, config: &LightConfig) -> Self {
        let name = name.into();
        Light {
            switch: RemoteValueSwitch::new(queue.clone(), config.group_address_switch, name.as_str())
                .with_state_address(config.group_address_switch_state),
            dimm: RemoteValueControlled::new(queue, config.group_address_dimm, name.as_str()),
            name,
        }
    }

    /// Builds a light from a configuration entry
    pub fn from_config(queue: TelegramQueue, name: &str, config: &LightConfig) -> Self {
        debug!("Creating light {} from {:?}", name, config);
        Light::new(queue, name, config)
    }

    /// Returns true if the light supports dimming
    pub fn supports_dimming(&self) -> bool {
        self.dimm.initialized()
    }

    /// Last known on/off state
    pub fn state(&self) -> Option<bool> {
        self.switch.value().copied()
    }

    /// Last dimming command seen on the bus or sent
    pub fn dimming(&self) -> Option<ControlValue> {
        self.dimm.value().copied()
    }

    pub async fn set_on(&mut self) -> Result<()> {
        self.switch.on().await
    }

    pub async fn set_off(&mut self) -> Result<()> {
        self.switch.off().await
    }

    pub async fn start_dimming_up(&mut self, speed: u8) -> Result<()> {
        self.dimm.start_upwards(speed).await
    }

    pub async fn start_dimming_down(&mut self, speed: u8) -> Result<()> {
        self.dimm.start_downwards(speed).await
    }

    pub async fn stop_dimming(&mut self) -> Result<()> {
        self.dimm.stop().await
    }

    /// Requests the switch state from the bus
    pub async fn sync(&self) -> Result<()> {
        self.switch.sync().await
    }
}

impl Device for Light {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_group_address(&self, group_address: GroupAddress) -> bool {
        self.switch.has_group_address(group_address) || self.dimm.has_group_address(group_address)
    }

    // Step dimming objects carry commands, not state, so only the switch is read.
    fn state_addresses(&self) -> Vec<GroupAddress> {
        self.switch.state_address().into_iter().collect()
    }

    fn process<'a>(&'a mut self, telegram: &'a Telegram) -> BoxFuture<'a, Result<bool>> {
        async move {
            let switched = self.switch.process(telegram).await;
            let dimmed = self.dimm.process(telegram).await;
            match (switched, dimmed) {
                (Ok(switched), Ok(dimmed)) => Ok(switched || dimmed),
                (Err(e), _) | (_, Err(e)) => Err(e),
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knx::{Payload, TelegramType};
    use tokio_test::assert_ok;

    fn config() -> LightConfig {
        LightConfig {
            group_address_switch: Some("1/0/12".parse().unwrap()),
            group_address_switch_state: Some("1/0/13".parse().unwrap()),
            group_address_dimm: Some("1/0/14".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn test_dimming_sends_controlled_telegrams() {
        let (queue, mut rx) = TelegramQueue::channel(8);
        let mut light = Light::new(queue, "TestLight", &config());
        assert!(light.supports_dimming());

        assert_ok!(light.start_dimming_up(3).await);
        assert_ok!(light.stop_dimming().await);
        assert_ok!(light.start_dimming_down(1).await);
        assert_ok!(light.set_off().await);

        let dimm = "1/0/14".parse().unwrap();
        assert_eq!(rx.recv().await.unwrap(), Telegram::new(dimm, Payload::Binary(0x0B)));
        assert_eq!(rx.recv().await.unwrap(), Telegram::new(dimm, Payload::Binary(0x00)));
        assert_eq!(rx.recv().await.unwrap(), Telegram::new(dimm, Payload::Binary(0x01)));
        assert_eq!(
            rx.recv().await.unwrap(),
            Telegram::new("1/0/12".parse().unwrap(), Payload::Binary(0))
        );
        assert_eq!(light.state(), Some(false));
    }

    #[tokio::test]
    async fn test_sync_reads_switch_state() {
        let (queue, mut rx) = TelegramQueue::channel(8);
        let light = Light::new(queue, "TestLight", &config());
        assert_ok!(light.sync().await);
        let telegram = rx.recv().await.unwrap();
        assert_eq!(telegram.group_address, "1/0/13".parse::<GroupAddress>().unwrap());
        assert_eq!(telegram.telegram_type, TelegramType::GroupValueRead);
        assert!(rx.try_recv().is_err());
        assert_eq!(light.state_addresses(), vec!["1/0/13".parse::<GroupAddress>().unwrap()]);
    }

    #[tokio::test]
    async fn test_shared_address_reaches_both_values() {
        let (queue, _rx) = TelegramQueue::channel(8);
        let shared = "1/0/5".parse().unwrap();
        let mut light = Light::new(
            queue,
            "TestLight",
            &LightConfig {
                group_address_switch: Some(shared),
                group_address_dimm: Some(shared),
                ..Default::default()
            },
        );
        // 0x09 is not a switch value but a valid step up
        let telegram = Telegram::incoming(shared, Payload::Binary(0x09));
        assert!(light.process(&telegram).await.is_err());
        assert_eq!(light.state(), None);
        assert_eq!(light.dimming(), Some(ControlValue::up(1)));
    }

    #[tokio::test]
    async fn test_process() {
        let (queue, _rx) = TelegramQueue::channel(8);
        let mut light = Light::new(queue, "TestLight", &config());
        let telegram = Telegram::incoming("1/0/13".parse().unwrap(), Payload::Binary(1));
        assert!(assert_ok!(light.process(&telegram).await));
        assert_eq!(light.state(), Some(true));

        let telegram = Telegram::incoming("1/0/14".parse().unwrap(), Payload::Binary(0x0F));
        assert!(assert_ok!(light.process(&telegram).await));
        assert_eq!(light.dimming(), Some(ControlValue::up(7)));

        let telegram = Telegram::incoming("2/0/0".parse().unwrap(), Payload::Binary(1));
        assert!(!assert_ok!(light.process(&telegram).await));
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let yaml = "group_address_switch: 1/0/12\ngroup_address_brightness: 1/0/15\n";
        assert!(serde_yaml::from_str::<LightConfig>(yaml).is_err());
    }
}

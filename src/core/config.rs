use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::error::{Error, Result};
use super::types::PhysicalAddress;
use crate::devices::{Devices, Light, LightConfig};
use crate::knx::TelegramQueue;
use crate::sync::StateUpdaterConfig;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "xknx.yaml";

/// Top-level client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XknxConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Periodic state refresh settings
    pub state_updater: StateUpdaterConfig,
    /// Device groups, keyed by a name whose prefix selects the device kind
    pub groups: serde_yaml::Mapping,
}

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Physical address this client uses on the bus
    pub own_address: PhysicalAddress,
}

/// Device kinds selectable by group name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Light,
    Switch,
    Cover,
    Climate,
    DateTime,
    Sensor,
    ExposeSensor,
    BinarySensor,
    Notification,
    Scene,
}

impl DeviceKind {
    const PREFIXES: [(&'static str, DeviceKind); 10] = [
        ("light", DeviceKind::Light),
        ("switch", DeviceKind::Switch),
        ("cover", DeviceKind::Cover),
        ("climate", DeviceKind::Climate),
        ("datetime", DeviceKind::DateTime),
        ("sensor", DeviceKind::Sensor),
        ("expose_sensor", DeviceKind::ExposeSensor),
        ("binary_sensor", DeviceKind::BinarySensor),
        ("notification", DeviceKind::Notification),
        ("scene", DeviceKind::Scene),
    ];

    /// Selects the device kind for a group name
    pub fn from_group_name(group: &str) -> Option<Self> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| group.starts_with(prefix))
            .map(|(_, kind)| *kind)
    }
}

impl XknxConfig {
    /// Reads a YAML configuration file
    ///
    /// A missing file is logged and yields the default configuration.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading {}", path.display());
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml_str(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                error!("Error while reading {}: {}", path.display(), e);
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parses a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.state_updater.timeout.is_zero() {
            return Err(Error::config("state_updater.timeout must be > 0"));
        }
        Ok(())
    }

    /// Builds the devices described by the `groups` section
    ///
    /// Unsupported groups and malformed entries are logged and skipped.
    pub fn create_devices(&self, queue: &TelegramQueue) -> Devices {
        let mut devices = Devices::new();
        for (group, entries) in &self.groups {
            let Some(group) = group.as_str() else {
                warn!("Could not parse group {:?}: name is not a string", group);
                continue;
            };
            match DeviceKind::from_group_name(group) {
                Some(DeviceKind::Light) => self.create_lights(queue, group, entries, &mut devices),
                Some(kind) => warn!("Skipping group {}: {:?} devices are not supported", group, kind),
                None => warn!("Skipping group {}: unknown device kind", group),
            }
        }
        devices
    }

    fn create_lights(
        &self,
        queue: &TelegramQueue,
        group: &str,
        entries: &serde_yaml::Value,
        devices: &mut Devices,
    ) {
        let Some(entries) = entries.as_mapping() else {
            warn!("Error while reading config file: Could not parse {}: not a mapping", group);
            return;
        };
        for (name, entry) in entries {
            let Some(name) = name.as_str() else {
                warn!("Could not parse {}: entry name {:?} is not a string", group, name);
                continue;
            };
            match serde_yaml::from_value::<LightConfig>(entry.clone()) {
                Ok(config) => devices.add(Light::from_config(queue.clone(), name, &config)),
                Err(e) => warn!(
                    "Error while reading config file: Could not parse {}/{}: {}",
                    group, name, e
                ),
            }
        }
    }
}

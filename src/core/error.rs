use std::io;
use thiserror::Error;

/// Custom error types for the KNX bus client
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A value could not be mapped to or from its wire representation
    #[error("Conversion error: {message} ({value})")]
    Conversion {
        /// What went wrong
        message: String,
        /// Debug rendering of the offending input
        value: String,
    },

    /// An inbound telegram carried a payload the bound DPT cannot decode
    #[error("Could not parse telegram: {message} (payload={payload}, device={device_name})")]
    CouldNotParseTelegram {
        /// What went wrong
        message: String,
        /// Debug rendering of the offending payload
        payload: String,
        /// Name of the device owning the remote value
        device_name: String,
    },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Queue error: {0}")]
    Queue(String),

    #[error("Synchronization error: {0}")]
    Sync(String),
}

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new conversion error for the given input
    pub fn conversion(msg: impl Into<String>, value: impl std::fmt::Debug) -> Self {
        Error::Conversion {
            message: msg.into(),
            value: format!("{:?}", value),
        }
    }

    /// Creates a new telegram parse error
    pub fn could_not_parse(
        msg: impl Into<String>,
        payload: impl std::fmt::Debug,
        device_name: impl Into<String>,
    ) -> Self {
        Error::CouldNotParseTelegram {
            message: msg.into(),
            payload: format!("{:?}", payload),
            device_name: device_name.into(),
        }
    }

    /// Creates a new invalid address error
    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Error::InvalidAddress(msg.into())
    }

    /// Creates a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Creates a new queue error
    pub fn queue(msg: impl Into<String>) -> Self {
        Error::Queue(msg.into())
    }

    /// Creates a new synchronization error
    pub fn sync(msg: impl Into<String>) -> Self {
        Error::Sync(msg.into())
    }
}

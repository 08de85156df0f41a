//! State synchronization module
//!
//! Keeps local device state from going stale by periodically re-requesting
//! it from the bus.

pub mod state_updater;

pub use self::state_updater::{StateUpdater, StateUpdaterConfig};

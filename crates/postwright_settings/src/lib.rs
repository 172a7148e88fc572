//! Settings persistence and configuration for Postwright.
//!
//! Two distinct concerns live here:
//!
//! - **User settings** ([`Settings`](postwright_core::Settings)): the API key and
//!   system prompt, edited by the user and persisted by a
//!   [`SettingsStore`](postwright_interface::SettingsStore). [`FileSettingsStore`]
//!   keeps them in a small TOML file; [`MemorySettingsStore`] keeps them in memory.
//! - **Application configuration** ([`PostwrightConfig`]): provider endpoint and
//!   sampling parameters, relay bind address and pipeline throttle, layered from
//!   bundled defaults, user files and environment variables.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod file;
mod memory;

pub use config::{PipelineConfig, PostwrightConfig, RelayConfig, SettingsConfig};
pub use file::{FileSettingsStore, SETTINGS_FILE_NAME};
pub use memory::MemorySettingsStore;

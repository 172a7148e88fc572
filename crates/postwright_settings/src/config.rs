//! Layered application configuration.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`postwright.toml` shipped with the library)
//! 2. User config in home directory (`~/.config/postwright/postwright.toml`)
//! 3. User config in current directory (`./postwright.toml`)
//! 4. Environment variables `POSTWRIGHT__<SECTION>__<KEY>`

use config::{Config, Environment, File, FileFormat};
use postwright_error::{ConfigError, PostwrightError, PostwrightResult};
use postwright_models::OpenAiConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../postwright.toml");

/// Default relay bind address.
const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Relay server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Socket address the relay listens on
    pub bind: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Generation pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Upper bound on provider calls per minute within a batch; unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,
}

/// Location of the user settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SettingsConfig {
    /// Settings file path; the platform config directory when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Application configuration.
///
/// # Example
///
/// ```no_run
/// use postwright_settings::PostwrightConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PostwrightConfig::load()?;
/// println!("Model: {}", config.provider.model());
/// println!("Relay: {}", config.relay.bind);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PostwrightConfig {
    /// Upstream completion endpoint and sampling parameters
    #[serde(default)]
    pub provider: OpenAiConfig,
    /// Relay server settings
    #[serde(default)]
    pub relay: RelayConfig,
    /// Pipeline throttle
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Settings file location
    #[serde(default)]
    pub settings: SettingsConfig,
}

impl PostwrightConfig {
    /// Load configuration from a specific file path, on top of nothing but serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PostwrightResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                PostwrightError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PostwrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> PostwrightResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/postwright/postwright.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("postwright").required(false))
            .add_source(
                Environment::with_prefix("POSTWRIGHT")
                    .separator("__")
                    .try_parsing(true),
            );

        builder
            .build()
            .map_err(|e| {
                PostwrightError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PostwrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Bundled defaults only, ignoring user files and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> PostwrightResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                PostwrightError::from(ConfigError::new(format!(
                    "Failed to parse bundled configuration: {}",
                    e
                )))
            })
    }

    /// Settings file path: the configured one, else the platform default.
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.settings
            .path
            .clone()
            .or_else(crate::FileSettingsStore::default_path)
    }
}

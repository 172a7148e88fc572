//! TOML file settings store.

use postwright_core::{Settings, SettingsUpdate};
use postwright_error::{ConfigError, PostwrightResult, StorageError, StorageErrorKind};
use postwright_interface::SettingsStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File name of the settings file inside the application config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

const APP_DIR: &str = "postwright";

/// On-disk shape. Missing and empty values both mean "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    openai_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    system_prompt: Option<String>,
}

impl StoredSettings {
    fn into_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings::new(
            non_empty(self.openai_api_key).unwrap_or_else(|| defaults.api_key().clone()),
            non_empty(self.system_prompt).unwrap_or_else(|| defaults.system_prompt().clone()),
        )
    }

    fn apply(&mut self, update: SettingsUpdate) {
        if let Some(api_key) = update.api_key {
            self.openai_api_key = Some(api_key);
        }
        if let Some(system_prompt) = update.system_prompt {
            self.system_prompt = Some(system_prompt);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Settings persisted to a TOML file.
///
/// The file holds two keys, `openai_api_key` and `system_prompt`. Every `set`
/// rewrites the file atomically (temp file + rename), so a crash never leaves a
/// half-written file behind.
///
/// # Examples
///
/// ```no_run
/// use postwright_core::SettingsUpdate;
/// use postwright_interface::SettingsStore;
/// use postwright_settings::FileSettingsStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = FileSettingsStore::open_default()?;
/// store.set(SettingsUpdate::default().with_api_key("sk-..."))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSettingsStore {
    /// Create a store backed by the file at `path`. The file need not exist yet.
    #[tracing::instrument(skip(path))]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::debug!(path = %path.display(), "Using settings file");
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// `<config dir>/postwright/settings.toml`, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE_NAME))
    }

    /// Create a store at [`default_path`](Self::default_path).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when no config directory can be determined.
    pub fn open_default() -> PostwrightResult<Self> {
        let path = Self::default_path()
            .ok_or_else(|| ConfigError::new("Could not determine a config directory"))?;
        Ok(Self::new(path))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_stored(&self) -> Result<StoredSettings, StorageError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No settings file yet, using defaults");
                return Ok(StoredSettings::default());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::Read {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                }));
            }
        };

        toml::from_str(&text).map_err(|e| {
            StorageError::new(StorageErrorKind::Parse {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })
        })
    }

    fn write_stored(&self, stored: &StoredSettings) -> Result<(), StorageError> {
        let text = toml::to_string(stored)
            .map_err(|e| StorageError::new(StorageErrorKind::Encode(e.to_string())))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
        }

        // Readers see either the old file or the new one, never a partial write
        let temp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&temp_path, text).map_err(|e| write_error(&temp_path, e))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| write_error(&self.path, e))
    }
}

#[track_caller]
fn write_error(path: &Path, e: std::io::Error) -> StorageError {
    StorageError::new(StorageErrorKind::Write {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

impl SettingsStore for FileSettingsStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn get(&self) -> PostwrightResult<Settings> {
        Ok(self.read_stored()?.into_settings())
    }

    #[tracing::instrument(skip(self, update), fields(path = %self.path.display()))]
    fn set(&self, update: SettingsUpdate) -> PostwrightResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| {
            StorageError::new(StorageErrorKind::Unavailable(
                "settings lock poisoned".to_string(),
            ))
        })?;

        let mut stored = self.read_stored()?;
        stored.apply(update);
        self.write_stored(&stored)?;

        tracing::info!("Saved settings");
        Ok(())
    }
}

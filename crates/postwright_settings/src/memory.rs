//! In-memory settings store.

use postwright_core::{Settings, SettingsUpdate};
use postwright_error::{PostwrightResult, StorageError, StorageErrorKind};
use postwright_interface::SettingsStore;
use std::sync::RwLock;

/// Settings held only for the lifetime of the process.
///
/// # Examples
///
/// ```
/// use postwright_core::SettingsUpdate;
/// use postwright_interface::SettingsStore;
/// use postwright_settings::MemorySettingsStore;
///
/// let store = MemorySettingsStore::default();
/// store.set(SettingsUpdate::default().with_api_key("sk-test"))?;
/// assert_eq!(store.get()?.api_key(), "sk-test");
/// # Ok::<(), postwright_error::PostwrightError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: RwLock<Settings>,
}

impl MemorySettingsStore {
    /// Create a store seeded with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings.with_default_prompt()),
        }
    }
}

fn poisoned() -> StorageError {
    StorageError::new(StorageErrorKind::Unavailable(
        "settings lock poisoned".to_string(),
    ))
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self) -> PostwrightResult<Settings> {
        let settings = self.settings.read().map_err(|_| poisoned())?;
        Ok(settings.clone())
    }

    fn set(&self, update: SettingsUpdate) -> PostwrightResult<()> {
        let mut settings = self.settings.write().map_err(|_| poisoned())?;
        *settings = settings.clone().merged(update).with_default_prompt();
        Ok(())
    }
}

//! User settings that parameterize every generation request.

use crate::DEFAULT_SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};

/// API credential and system prompt used for a batch.
///
/// The pipeline takes this by value at batch start, so later edits by the user
/// never affect a batch already in flight.
///
/// # Examples
///
/// ```
/// use postwright_core::{Settings, DEFAULT_SYSTEM_PROMPT};
///
/// let settings = Settings::default();
/// assert!(!settings.has_api_key());
/// assert_eq!(settings.system_prompt(), DEFAULT_SYSTEM_PROMPT);
///
/// let settings = Settings::new("sk-test", "Write a haiku.");
/// assert!(settings.has_api_key());
/// assert!(!format!("{:?}", settings).contains("sk-test"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Credential for the completion provider
    api_key: String,
    /// Instructions sent as the system message
    system_prompt: String,
}

impl Settings {
    /// Create settings from explicit values.
    pub fn new(api_key: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            system_prompt: system_prompt.into(),
        }
    }

    /// Whether a non-blank API key is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Replace an empty system prompt with [`DEFAULT_SYSTEM_PROMPT`].
    ///
    /// Stored empty values behave as if nothing had been stored.
    pub fn with_default_prompt(mut self) -> Self {
        if self.system_prompt.is_empty() {
            self.system_prompt = DEFAULT_SYSTEM_PROMPT.to_string();
        }
        self
    }

    /// Apply a partial update, returning the merged settings.
    pub fn merged(mut self, update: SettingsUpdate) -> Self {
        if let Some(api_key) = update.api_key {
            self.api_key = api_key;
        }
        if let Some(system_prompt) = update.system_prompt {
            self.system_prompt = system_prompt;
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

// The credential never reaches logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<unset>" })
            .field("system_prompt_len", &self.system_prompt.len())
            .finish()
    }
}

/// Partial settings change; `None` fields are left untouched.
///
/// # Examples
///
/// ```
/// use postwright_core::{Settings, SettingsUpdate};
///
/// let settings = Settings::default().merged(SettingsUpdate::default().with_api_key("sk-1"));
/// assert_eq!(settings.api_key(), "sk-1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    /// New API key, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// New system prompt, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl SettingsUpdate {
    /// Set the API key to change.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the system prompt to change.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.system_prompt.is_none()
    }
}

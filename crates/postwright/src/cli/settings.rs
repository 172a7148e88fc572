//! Settings command handlers.

use super::commands::{OutputFormat, PromptSource, SettingsCommands};
use postwright::{
    ConfigError, FileSettingsStore, JsonError, PostwrightConfig, PostwrightResult, SettingsStore,
    SettingsUpdate,
};
use std::path::Path;

/// Open the settings store at `path_override`, else at the configured location.
///
/// # Errors
///
/// Returns a [`ConfigError`] when no override is given and no platform
/// configuration directory exists.
pub fn open_settings_store(
    path_override: Option<&Path>,
    config: &PostwrightConfig,
) -> PostwrightResult<FileSettingsStore> {
    let path = path_override
        .map(Path::to_path_buf)
        .or_else(|| config.settings_path())
        .ok_or_else(|| {
            ConfigError::new("Could not determine a settings location; pass --settings <path>")
        })?;
    Ok(FileSettingsStore::new(path))
}

/// Handle settings subcommands.
pub fn handle_settings_command(
    cmd: SettingsCommands,
    path_override: Option<&Path>,
) -> PostwrightResult<()> {
    let config = PostwrightConfig::load()?;
    let store = open_settings_store(path_override, &config)?;

    match cmd {
        SettingsCommands::Show { format } => show_settings(&store, format),
        SettingsCommands::SetKey { key } => {
            store.set(SettingsUpdate::default().with_api_key(key.trim()))?;
            println!("API key saved to {}", store.path().display());
            Ok(())
        }
        SettingsCommands::SetPrompt(source) => {
            let prompt = read_prompt(source)?;
            store.set(SettingsUpdate::default().with_system_prompt(prompt))?;
            println!("System prompt saved to {}", store.path().display());
            Ok(())
        }
        SettingsCommands::ResetPrompt => {
            store.reset_system_prompt()?;
            println!("System prompt reset to the default");
            Ok(())
        }
    }
}

fn show_settings(store: &FileSettingsStore, format: OutputFormat) -> PostwrightResult<()> {
    let settings = store.get()?;
    let masked = mask_api_key(settings.api_key());

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "path": store.path().display().to_string(),
                "apiKey": masked,
                "systemPrompt": settings.system_prompt(),
            }))
            .map_err(|e| JsonError::new("settings", e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("Settings file: {}", store.path().display());
            println!("API key:       {}", masked);
            println!("System prompt:");
            for line in settings.system_prompt().lines() {
                println!("    {}", line);
            }
        }
    }
    Ok(())
}

fn read_prompt(source: PromptSource) -> PostwrightResult<String> {
    match (source.text, source.file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read prompt file {}: {}",
                path.display(),
                e
            ))
            .into()
        }),
        (None, None) => Err(ConfigError::new("Provide the prompt text or --file <path>").into()),
    }
}

/// Mask an API key for display, keeping a short prefix and the last four characters.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.trim().chars().collect();
    match chars.len() {
        0 => "(not set)".to_string(),
        1..=8 => "*".repeat(chars.len()),
        n => format!(
            "{}...{}",
            chars[..3].iter().collect::<String>(),
            chars[n - 4..].iter().collect::<String>()
        ),
    }
}

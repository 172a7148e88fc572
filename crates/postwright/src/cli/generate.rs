//! Batch generation command.

use super::commands::{BriefSource, OutputFormat};
use super::progress::Progress;
use super::settings::open_settings_store;
use postwright::{
    Brief, CompletionProvider, ConfigError, GenerationPipeline, GenerationSession, JsonError,
    OpenAiClient, PostwrightConfig, PostwrightResult, RelayClient, SettingsStore, extract_file,
    topic_brief,
};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Generate one post per brief and print the outcome.
pub async fn run_generate(
    source: BriefSource,
    relay: Option<String>,
    format: OutputFormat,
    settings_override: Option<&Path>,
) -> PostwrightResult<()> {
    let config = PostwrightConfig::load()?;
    let briefs = load_briefs(&source)?;

    if briefs.is_empty() {
        match format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Human => println!("No briefs found"),
        }
        return Ok(());
    }

    let settings = open_settings_store(settings_override, &config)?.get()?;

    let timeout = Duration::from_secs(*config.provider.timeout_secs());
    let provider: Box<dyn CompletionProvider> = match relay {
        Some(url) => Box::new(RelayClient::with_timeout(url, timeout)?),
        None => Box::new(OpenAiClient::new(config.provider.clone())?),
    };
    info!(
        provider = provider.provider_name(),
        briefs = briefs.len(),
        "Starting generation"
    );

    let mut pipeline = GenerationPipeline::new(provider);
    if let Some(rpm) = config.pipeline.requests_per_minute {
        debug!(rpm, "Throttling provider calls");
        pipeline = pipeline.with_requests_per_minute(rpm);
    }

    let session = GenerationSession::new(pipeline);
    let mut updates = session.subscribe();
    let mut progress = Progress::new(io::stdout());
    let live = format == OutputFormat::Human;

    let generation = session.generate(&briefs, settings);
    tokio::pin!(generation);
    let outcome = loop {
        tokio::select! {
            outcome = &mut generation => break outcome,
            Ok(()) = updates.changed() => {
                if live {
                    let snapshot = updates.borrow_and_update().clone();
                    progress.render(&snapshot).map_err(write_error)?;
                }
            }
        }
    };

    if outcome.is_err() {
        if let Some(banner) = session.last_error() {
            eprintln!("{}", banner);
        }
    }
    let batch = outcome?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&batch)
                .map_err(|e| JsonError::new("batch", e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            progress.render(&batch).map_err(write_error)?;
            progress.finish(&batch).map_err(write_error)?;
        }
    }
    Ok(())
}

fn load_briefs(source: &BriefSource) -> PostwrightResult<Vec<Brief>> {
    match (&source.file, &source.topic) {
        (Some(file), _) => Ok(extract_file(file)?),
        (None, Some(topic)) => Ok(vec![topic_brief(topic)?]),
        (None, None) => Err(ConfigError::new("Provide --file <path> or --topic <text>").into()),
    }
}

fn write_error(e: io::Error) -> ConfigError {
    ConfigError::new(format!("Failed to write output: {}", e))
}

//! Postwright CLI binary.
//!
//! This binary provides command-line access to Postwright's functionality:
//! - Generate posts from a document or a single topic
//! - Preview extracted briefs
//! - Manage the stored API key and system prompt
//! - Run the HTTP relay

use clap::Parser;
use postwright::PostwrightResult;
use postwright::observability::{
    ObservabilityConfig, init_observability_with_config, shutdown_observability,
};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::Cli;

    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let observability = ObservabilityConfig::default()
        .with_log_level(log_level)
        .with_json_logs(cli.json_logs)
        .with_span_export(!cli.command.writes_json());
    if let Err(e) = init_observability_with_config(observability) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = run(cli).await;
    shutdown_observability();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: cli::Cli) -> PostwrightResult<()> {
    use cli::{Commands, handle_settings_command, run_extract, run_generate, run_serve};

    let settings_override = cli.settings.as_deref();

    match cli.command {
        Commands::Generate {
            source,
            relay,
            format,
        } => run_generate(source, relay, format, settings_override).await,

        Commands::Extract { file, format } => run_extract(&file, format),

        Commands::Settings(cmd) => handle_settings_command(cmd, settings_override),

        Commands::Serve { bind } => run_serve(bind).await,
    }
}

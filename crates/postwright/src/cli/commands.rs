//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Postwright - generate social media posts in batches from documents or topics
#[derive(Parser, Debug)]
#[command(name = "postwright")]
#[command(about = "Generate social media posts in batches from documents or topics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of the configured one
    #[arg(long, global = true, env = "POSTWRIGHT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one post per brief
    Generate {
        /// Where the briefs come from
        #[command(flatten)]
        source: BriefSource,

        /// Send requests through a relay endpoint instead of the provider directly
        #[arg(long, value_name = "URL")]
        relay: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Preview the briefs extracted from a document
    Extract {
        /// Document to read (csv, xlsx, txt, md, pdf, docx)
        #[arg(long)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Manage the stored API key and system prompt
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Run the HTTP relay
    Serve {
        /// Address to listen on; the configured relay address by default
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}

impl Commands {
    /// Whether the command prints JSON on stdout.
    pub fn writes_json(&self) -> bool {
        match self {
            Commands::Generate { format, .. } | Commands::Extract { format, .. } => {
                *format == OutputFormat::Json
            }
            Commands::Settings(SettingsCommands::Show { format }) => *format == OutputFormat::Json,
            Commands::Settings(_) | Commands::Serve { .. } => false,
        }
    }
}

/// Input for a generation run: a document or a single topic.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct BriefSource {
    /// Document with one brief per row (csv, xlsx) or one brief per file (txt, md, pdf, docx)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// A single topic
    #[arg(long)]
    pub topic: Option<String>,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the current settings with the API key masked
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Store the OpenAI API key
    SetKey {
        /// API key
        key: String,
    },

    /// Store the system prompt
    SetPrompt(PromptSource),

    /// Restore the default system prompt
    ResetPrompt,
}

/// New system prompt, inline or from a file.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PromptSource {
    /// Prompt text
    pub text: Option<String>,

    /// File containing the prompt
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

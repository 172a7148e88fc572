//! Postwright - batch generation of social media posts.
//!
//! Postwright turns a document (CSV, XLSX, TXT, MD, PDF or DOCX) or a single
//! topic into briefs, then asks a chat-completion provider for one post per
//! brief, strictly one request at a time, publishing a snapshot of the batch
//! after every step.
//!
//! This crate is a facade over the Postwright workspace and ships the
//! `postwright` command-line binary.
//!
//! # Quick Start
//!
//! ```no_run
//! use postwright::{
//!     FileSettingsStore, GenerationPipeline, OpenAiClient, OpenAiConfig, SettingsStore,
//!     extract_file,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let briefs = extract_file(std::path::Path::new("briefs.csv"))?;
//! let settings = FileSettingsStore::open_default()?.get()?;
//!
//! let pipeline = GenerationPipeline::new(OpenAiClient::new(OpenAiConfig::default())?);
//! let batch = pipeline
//!     .run(&briefs, settings, &mut |batch: &postwright::Batch| {
//!         println!("{}", batch.summary());
//!     })
//!     .await?;
//!
//! for record in &batch {
//!     println!("{}: {}", record.id(), record.content());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `observability`: bridge tracing spans to OpenTelemetry with a stdout exporter

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod observability;

pub use postwright_core::*;
pub use postwright_error::*;
pub use postwright_extract::*;
pub use postwright_interface::*;
pub use postwright_models::*;
pub use postwright_pipeline::*;
pub use postwright_server::*;
pub use postwright_settings::*;

//! Batch generation pipeline for Postwright.
//!
//! [`GenerationPipeline`] turns an ordered list of briefs into a [`Batch`](postwright_core::Batch)
//! of generation records, calling the completion provider once per brief, strictly
//! in order, and publishing the whole batch after every state change.
//!
//! [`GenerationSession`] wraps a pipeline for presentation layers: it keeps the
//! latest batch and banner error, exposes a `watch` subscription and rejects a
//! second batch while one is in progress.
//!
//! # Example
//!
//! ```rust,ignore
//! use postwright_pipeline::GenerationPipeline;
//! use postwright_core::{Batch, Brief, Settings};
//!
//! let pipeline = GenerationPipeline::new(provider);
//! let briefs: Vec<Brief> = ["Topic A", "Topic B"]
//!     .iter()
//!     .enumerate()
//!     .filter_map(|(i, topic)| Brief::indexed(i, topic))
//!     .collect();
//! let batch = pipeline
//!     .run(&briefs, Settings::new("sk-...", "Write a post."), &mut |batch: &Batch| {
//!         println!("{}", batch.summary());
//!     })
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;
mod session;

pub use pipeline::{GenerationPipeline, MISSING_API_KEY_MESSAGE};
pub use session::GenerationSession;

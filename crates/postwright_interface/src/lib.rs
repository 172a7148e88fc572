//! Trait definitions for the seams of the Postwright workspace.
//!
//! The generation pipeline only ever talks to its collaborators through these traits:
//! - [`CompletionProvider`] turns one brief into text
//! - [`SettingsStore`] persists the user's credential and prompt
//! - [`BatchObserver`] receives every published batch snapshot

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observer;
mod traits;

pub use observer::{BatchObserver, NoopObserver};
pub use traits::{CompletionProvider, SettingsStore};

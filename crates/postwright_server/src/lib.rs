//! HTTP relay for Postwright.
//!
//! The relay accepts one brief per request, forwards it to an upstream
//! completion provider with the caller's credential, and reports the outcome:
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | Success | 200 | `{"content": "..."}` |
//! | Body is not JSON | 400 | `{"error": "Invalid JSON body"}` |
//! | Missing or blank field | 400 | `{"error": "brief, apiKey, and systemPrompt are required"}` |
//! | Upstream returned no text | 502 | `{"error": "No content generated"}` |
//! | Any other upstream failure | 500 | `{"error": "Failed to generate post: ..."}` |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod server;

pub use api::{INVALID_JSON_MESSAGE, MISSING_FIELDS_MESSAGE, RelayState, create_router};
pub use server::{serve, serve_with_listener};

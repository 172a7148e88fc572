//! CLI command handling.

mod commands;
mod extract;
mod generate;
mod progress;
mod serve;
mod settings;

pub use commands::{Cli, Commands};
pub use extract::run_extract;
pub use generate::run_generate;
pub use serve::run_serve;
pub use settings::handle_settings_command;

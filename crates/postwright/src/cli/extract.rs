//! Brief preview command.

use super::commands::OutputFormat;
use postwright::{JsonError, PostwrightResult, extract_file};
use std::path::Path;

/// Print the briefs extracted from `file`.
pub fn run_extract(file: &Path, format: OutputFormat) -> PostwrightResult<()> {
    let briefs = extract_file(file)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&briefs)
                .map_err(|e| JsonError::new("briefs", e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            for brief in &briefs {
                println!("{}: {}", brief.id(), brief.content());
            }
            println!("Total: {} briefs", briefs.len());
        }
    }
    Ok(())
}

//! In-place regeneration of layer comments.

use crate::cli::common::{CliError, CliResult};
use crate::services::keymap_patcher::{update_file, NoLayersFound, SkippedLayer};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Update the keymap file with generated comments
#[derive(Debug, Clone)]
pub struct UpdateArgs {
    /// Path to the keymap source
    pub file: PathBuf,

    /// Output as JSON
    pub json: bool,
}

/// JSON response for an update
#[derive(Debug, Serialize)]
struct UpdateResponse {
    file: String,
    updated: Vec<String>,
    skipped: Vec<SkippedLayer>,
    written: bool,
}

impl UpdateArgs {
    /// Execute the update command
    pub fn execute(&self) -> CliResult<()> {
        if !self.json {
            println!("Updating {}...", self.file.display());
        }

        let summary = match update_file(&self.file) {
            Ok(summary) => summary,
            Err(e) => {
                if !self.json {
                    println!("✗ Failed to update file");
                }
                if e.downcast_ref::<NoLayersFound>().is_some() {
                    return Err(CliError::validation(format!(
                        "No layers found in {}",
                        self.file.display()
                    )));
                }
                return Err(CliError::io(format!("{e:#}")));
            }
        };

        for skipped in &summary.skipped {
            info!(layer = %skipped.name, reason = %skipped.reason, "Layer comment not regenerated");
        }

        if self.json {
            let response = UpdateResponse {
                file: self.file.display().to_string(),
                updated: summary.updated,
                skipped: summary.skipped,
                written: summary.written,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("✓ File updated successfully!");
        }

        Ok(())
    }
}

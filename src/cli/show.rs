//! Read-only listing of the layers in a keymap.

use crate::cli::common::{CliError, CliResult};
use crate::export::{layer_labels, render_layer_diagram};
use crate::models::Layer;
use crate::parser::parse_keymap;
use serde::Serialize;
use std::path::PathBuf;

/// Width of the separator printed between layers.
const SEPARATOR_WIDTH: usize = 80;

/// Print each layer and its generated diagram without touching the file
#[derive(Debug, Clone)]
pub struct ShowArgs {
    /// Path to the keymap source
    pub file: PathBuf,

    /// Output as JSON
    pub json: bool,
}

/// JSON response for the layer listing
#[derive(Debug, Serialize)]
struct ShowResponse {
    file: String,
    layers: Vec<LayerData>,
}

/// Per-layer data for JSON output
#[derive(Debug, Serialize)]
struct LayerData {
    name: String,
    line: usize,
    key_count: usize,
    renderable: bool,
    labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagram: Option<String>,
}

impl LayerData {
    fn from_layer(layer: &Layer) -> Self {
        Self {
            name: layer.name.clone(),
            line: layer.line,
            key_count: layer.key_count(),
            renderable: layer.is_renderable(),
            labels: layer_labels(&layer.tokens),
            diagram: render_layer_diagram(&layer.name, &layer.tokens),
        }
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let layers = parse_keymap(&self.file)
            .map_err(|e| CliError::io(format!("Failed to load keymap: {e:#}")))?;

        if self.json {
            let response = ShowResponse {
                file: self.file.display().to_string(),
                layers: layers.iter().map(LayerData::from_layer).collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Found {} layers:\n", layers.len());
        for layer in &layers {
            println!("Layer: {} ({} keycodes)\n", layer.name, layer.key_count());
            println!(
                "{}",
                render_layer_diagram(&layer.name, &layer.tokens).unwrap_or_default()
            );
            println!("\n{}\n", "=".repeat(SEPARATOR_WIDTH));
        }

        Ok(())
    }
}

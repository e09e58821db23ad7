use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::core::processing::pipeline::ProcessReport;

/// Provenance document written next to the output PNG.
#[derive(Serialize)]
struct SidecarDocument<'a> {
    tool: &'a str,
    version: &'a str,
    created: String,
    source: &'a Path,
    #[serde(flatten)]
    report: &'a ProcessReport,
}

/// Create a sidecar metadata file for processed PNG images
pub fn create_png_metadata_sidecar(
    output_path: &Path,
    source_path: &Path,
    report: &ProcessReport,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = SidecarDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        created: chrono::Utc::now().to_rfc3339(),
        source: source_path,
        report,
    };

    // Create sidecar file path
    let sidecar_path = output_path.with_extension("json");

    // Write metadata to JSON file
    let json_string = serde_json::to_string_pretty(&document)?;
    std::fs::write(&sidecar_path, json_string)?;

    info!("Created PNG metadata sidecar: {:?}", sidecar_path);
    Ok(())
}

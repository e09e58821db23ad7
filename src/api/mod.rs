//! High-level, ergonomic library API: process logo images to files or in-memory
//! buffers, and read or probe UTF-16 text files. Prefer using these entrypoints
//! over low-level processing modules when integrating logoprep.
use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::params::LogoParams;
use crate::core::processing::pipeline::process_logo_pipeline;
use crate::error::{Error, Result};
use crate::io::reader::{load_rgba, load_rgba_from_memory};
use crate::io::writers::png::write_rgba_png;
use crate::io::writers::sidecar::create_png_metadata_sidecar;
use crate::text::{self, ProbeOutcome};
use crate::types::Utf16Mode;

pub use crate::core::processing::pipeline::{ProcessReport, ProcessedLogo};

/// Process a logo image file into a centered transparent PNG at `output`.
///
/// The stages run in a fixed order: load, matte near-black pixels, downscale
/// to fit the canvas, center on a fully transparent canvas, create the
/// output's parent directory, save. Nothing is written when the source file
/// does not exist. Returns the per-stage report.
pub fn process_logo_to_path(
    input: &Path,
    output: &Path,
    params: &LogoParams,
) -> Result<ProcessReport> {
    if params.canvas_size == 0 {
        return Err(Error::ZeroCanvasSize {
            size: params.canvas_size,
        });
    }
    if !input.exists() {
        return Err(Error::SourceNotFound {
            path: input.to_path_buf(),
        });
    }

    let img = load_rgba(input)?;
    let processed = process_logo_pipeline(img, params).map_err(|e| Error::external(e))?;

    // Ensure the destination directory exists before saving
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    write_rgba_png(output, &processed.image).map_err(|e| Error::external(e))?;
    info!(
        "Saved {}x{} PNG: {:?}",
        params.canvas_size, params.canvas_size, output
    );

    if params.sidecar {
        create_png_metadata_sidecar(output, input, &processed.report)
            .map_err(|e| Error::external(e))?;
    }

    Ok(processed.report)
}

/// Process an in-memory image to an in-memory canvas (no disk I/O)
pub fn process_logo_to_buffer(bytes: &[u8], params: &LogoParams) -> Result<ProcessedLogo> {
    if params.canvas_size == 0 {
        return Err(Error::ZeroCanvasSize {
            size: params.canvas_size,
        });
    }
    let img = load_rgba_from_memory(bytes)?;
    process_logo_pipeline(img, params).map_err(|e| Error::external(e))
}

/// Read a text file under a single UTF-16 mode
pub fn read_text_file(path: &Path, mode: Utf16Mode) -> Result<String> {
    Ok(text::read_utf16_file(path, mode)?)
}

/// Probe a text file through the fixed Detect-then-Le sequence
pub fn probe_text_file(path: &Path) -> ProbeOutcome {
    text::probe_file(path)
}

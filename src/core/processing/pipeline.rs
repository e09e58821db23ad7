use image::RgbaImage;
use serde::Serialize;
use tracing::info;

use crate::core::params::LogoParams;
use crate::core::processing::background::matte_near_black;
use crate::core::processing::canvas::center_on_canvas;
use crate::core::processing::resize::downscale_to_fit;

/// Record of one pipeline run, suitable for logs and the JSON sidecar.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub source_width: u32,
    pub source_height: u32,
    pub threshold: u8,
    pub cleared_pixels: u64,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub canvas_size: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Composited canvas plus the report describing how it was produced.
#[derive(Debug, Clone)]
pub struct ProcessedLogo {
    pub image: RgbaImage,
    pub report: ProcessReport,
}

/// Runs the full matte, fit-resize, center sequence over an RGBA image.
pub fn process_logo_pipeline(
    mut img: RgbaImage,
    params: &LogoParams,
) -> Result<ProcessedLogo, Box<dyn std::error::Error>> {
    let (source_width, source_height) = img.dimensions();
    info!("Processing {}x{} image", source_width, source_height);

    let cleared_pixels = matte_near_black(&mut img, params.threshold);

    let scaled = downscale_to_fit(&img, params.canvas_size)?;
    let (scaled_width, scaled_height) = scaled.dimensions();

    let (canvas, offset_x, offset_y) = center_on_canvas(&scaled, params.canvas_size)?;

    Ok(ProcessedLogo {
        image: canvas,
        report: ProcessReport {
            source_width,
            source_height,
            threshold: params.threshold,
            cleared_pixels,
            scaled_width,
            scaled_height,
            canvas_size: params.canvas_size,
            offset_x,
            offset_y,
        },
    })
}

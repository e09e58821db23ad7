use image::{RgbaImage, imageops};
use tracing::info;

/// Centers `img` on a fully transparent square canvas of `canvas_size`.
///
/// Offsets use integer division, so an odd remainder leaves the image one
/// pixel up and left of true center. Compositing respects the image's own
/// alpha: matted pixels leave the canvas transparent underneath.
///
/// Returns the canvas together with the `(x, y)` paste offsets.
pub fn center_on_canvas(
    img: &RgbaImage,
    canvas_size: u32,
) -> Result<(RgbaImage, u32, u32), Box<dyn std::error::Error>> {
    let (cols, rows) = img.dimensions();
    if cols > canvas_size || rows > canvas_size {
        return Err(format!(
            "image {}x{} exceeds {}x{} canvas",
            cols, rows, canvas_size, canvas_size
        )
        .into());
    }

    let pad_left = (canvas_size - cols) / 2;
    let pad_top = (canvas_size - rows) / 2;

    info!(
        "Centering {}x{} image at offset ({}, {}) on {}x{} canvas",
        cols, rows, pad_left, pad_top, canvas_size, canvas_size
    );

    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    imageops::overlay(&mut canvas, img, pad_left as i64, pad_top as i64);

    Ok((canvas, pad_left, pad_top))
}

use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::info;

/// Dimensions that fit `width x height` inside a `max_size` square while
/// preserving aspect ratio. Never upscales: an image already inside the
/// square keeps its dimensions.
pub fn calculate_fit_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let short_side = width.min(height);
    let long_side = width.max(height);

    if long_side <= max_size {
        return (width, height);
    }

    let scale_factor = max_size as f64 / long_side as f64;
    let new_short_side = ((short_side as f64 * scale_factor).round() as u32).max(1);

    if width > height {
        (max_size, new_short_side)
    } else if height > width {
        (new_short_side, max_size)
    } else {
        (max_size, max_size)
    }
}

pub fn resize_rgba_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

/// Downscales `img` so both sides fit within `max_size`, preserving aspect
/// ratio. Returns a clone when the image already fits. Resampling is
/// alpha-aware: fully transparent pixels do not bleed color into their
/// neighbors.
pub fn downscale_to_fit(
    img: &RgbaImage,
    max_size: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let (cols, rows) = img.dimensions();
    let (new_cols, new_rows) = calculate_fit_dimensions(cols, rows, max_size);

    if (new_cols, new_rows) == (cols, rows) {
        info!(
            "Image {}x{} already fits within {}; skipping resize",
            cols, rows, max_size
        );
        return Ok(img.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{}",
        cols, rows, new_cols, new_rows
    );

    let resized = resize_rgba_image(img.as_raw(), cols, rows, new_cols, new_rows)?;
    RgbaImage::from_raw(new_cols, new_rows, resized)
        .ok_or_else(|| "resized buffer does not match target dimensions".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn fit_scales_wide_image_to_max_width() {
        assert_eq!(calculate_fit_dimensions(240, 120, 120), (120, 60));
    }

    #[test]
    fn fit_scales_tall_image_to_max_height() {
        assert_eq!(calculate_fit_dimensions(120, 240, 120), (60, 120));
    }

    #[test]
    fn fit_never_upscales() {
        assert_eq!(calculate_fit_dimensions(50, 40, 120), (50, 40));
        assert_eq!(calculate_fit_dimensions(120, 120, 120), (120, 120));
        assert_eq!(calculate_fit_dimensions(1, 1, 120), (1, 1));
    }

    #[test]
    fn fit_rounds_short_side() {
        // 241x120 scales by 120/241; the short side rounds to 60.
        assert_eq!(calculate_fit_dimensions(241, 120, 120), (120, 60));
    }

    #[test]
    fn fit_scales_square_to_square() {
        assert_eq!(calculate_fit_dimensions(500, 500, 120), (120, 120));
    }

    #[test]
    fn fit_clamps_degenerate_short_side_to_one() {
        assert_eq!(calculate_fit_dimensions(500, 2, 120), (120, 1));
    }

    #[test]
    fn downscale_halves_both_dimensions() {
        let img = RgbaImage::from_pixel(240, 120, Rgba([10, 200, 30, 255]));
        let out = downscale_to_fit(&img, 120).unwrap();
        assert_eq!(out.dimensions(), (120, 60));
        // A solid color survives resampling within rounding error.
        for p in out.pixels() {
            assert!(p[0].abs_diff(10) <= 1);
            assert!(p[1].abs_diff(200) <= 1);
            assert!(p[2].abs_diff(30) <= 1);
            assert_eq!(p[3], 255);
        }
    }

    #[test]
    fn downscale_skips_resampling_when_within_bounds() {
        let img = RgbaImage::from_pixel(100, 80, Rgba([1, 2, 3, 4]));
        let out = downscale_to_fit(&img, 120).unwrap();
        assert_eq!(out, img);
    }
}

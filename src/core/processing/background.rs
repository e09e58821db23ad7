use image::{Rgba, RgbaImage};
use tracing::{info, warn};

/// Rewrites near-black pixels to fully transparent white, in place.
///
/// A pixel counts as near-black when all three color channels are strictly
/// below `threshold`. Matted pixels become `(255, 255, 255, 0)`; every other
/// pixel keeps its channels, alpha included. Returns the number of pixels
/// cleared.
pub fn matte_near_black(img: &mut RgbaImage, threshold: u8) -> u64 {
    let total = img.width() as u64 * img.height() as u64;
    let mut cleared: u64 = 0;

    for pixel in img.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        if r < threshold && g < threshold && b < threshold {
            *pixel = Rgba([255, 255, 255, 0]);
            cleared += 1;
        }
    }

    info!(
        "Matted {} near-black pixels (threshold {})",
        cleared, threshold
    );
    if total > 0 && cleared == total {
        warn!("All {} pixels matted; output is fully transparent", total);
    }
    cleared
}

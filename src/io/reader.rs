use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::Result;

/// Loads an image from disk and converts it to 8-bit RGBA. The format is
/// sniffed from the file contents, not the extension.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?.to_rgba8();
    info!("Loaded {:?}: {}x{}", path, img.width(), img.height());
    Ok(img)
}

/// Decodes an in-memory image to 8-bit RGBA.
pub fn load_rgba_from_memory(bytes: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    #[test]
    fn decodes_png_bytes_to_rgba() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 255]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();

        let decoded = load_rgba_from_memory(buf.get_ref()).unwrap();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(*decoded.get_pixel(0, 0), Rgba([9, 8, 7, 255]));
    }

    #[test]
    fn opaque_rgb_input_gains_full_alpha() {
        let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
        let mut buf = Cursor::new(Vec::new());
        rgb.write_to(&mut buf, ImageFormat::Png).unwrap();

        let decoded = load_rgba_from_memory(buf.get_ref()).unwrap();
        assert_eq!(*decoded.get_pixel(0, 0), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_rgba(Path::new("/definitely/not/here.png")).is_err());
    }
}

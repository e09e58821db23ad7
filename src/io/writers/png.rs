use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_rgba_png(output: &Path, img: &RgbaImage) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

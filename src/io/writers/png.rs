use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

use image::{ImageFormat, RgbaImage};

/// Encodes an RGBA sheet as PNG bytes. PNG is the only sheet format: it is
/// lossless and keeps the transparent background intact.
pub fn encode_rgba_png(image: &RgbaImage) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, ImageFormat::Png)?;
    Ok(())
}

use image::RgbaImage;
use tracing::{error, info, warn};

use crate::core::params::{SheetParams, TOP_INSET};
use crate::core::processing::crop::{CropRect, extract_tile};
use crate::core::processing::resize::shrink_to_max_width;
use crate::types::{Diagnostic, SourceImage};

/// Runs the per-image step over the whole batch in input order: decode,
/// force RGBA, downscale oversized inputs, crop-or-skip. Every per-image
/// fault is recovered here and surfaced only as a diagnostic; a bad input
/// never aborts the batch and never reserves a grid slot.
pub fn build_tiles(
    images: &[SourceImage],
    params: &SheetParams,
) -> (Vec<RgbaImage>, Vec<Diagnostic>) {
    let mut tiles = Vec::with_capacity(images.len());
    let mut diagnostics = Vec::new();

    for source in images {
        match crop_one(source, params, &mut diagnostics) {
            Ok(Some(tile)) => tiles.push(tile),
            Ok(None) => {}
            Err(e) => {
                error!("Error processing image '{}': {}", source.name, e);
                diagnostics.push(Diagnostic::error(
                    &source.name,
                    format!("Processing failed: {}", e),
                ));
            }
        }
    }

    (tiles, diagnostics)
}

/// Decode-resize-crop for a single image. `Ok(None)` means the image was
/// skipped because the crop window does not fit.
fn crop_one(
    source: &SourceImage,
    params: &SheetParams,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Option<RgbaImage>, Box<dyn std::error::Error>> {
    let decoded = image::load_from_memory(&source.bytes)?;
    // to_rgba8 covers the force-convert: every pixel format gains alpha here
    let rgba = decoded.to_rgba8();
    let (orig_cols, orig_rows) = rgba.dimensions();

    let (rgba, resized) = shrink_to_max_width(rgba, params.max_width)?;
    if let Some((new_cols, new_rows)) = resized {
        info!(
            "Resized image '{}' from {}x{} to {}x{}",
            source.name, orig_cols, orig_rows, new_cols, new_rows
        );
        diagnostics.push(
            Diagnostic::info(
                &source.name,
                format!(
                    "Resized from {}x{} to {}x{}",
                    orig_cols, orig_rows, new_cols, new_rows
                ),
            )
            .with_dimensions(new_cols, new_rows),
        );
    }

    let (cols, rows) = rgba.dimensions();
    let rect = CropRect::for_image(cols, params);
    if !rect.fits_within(cols, rows) {
        warn!(
            "Image '{}' ({}x{}) is too small for a {}x{} crop with {} px top inset, skipping",
            source.name, cols, rows, params.crop_width, params.crop_height, TOP_INSET
        );
        diagnostics.push(
            Diagnostic::warning(
                &source.name,
                format!(
                    "Too small ({}x{}) for a {}x{} crop with {} px top inset, skipped",
                    cols, rows, params.crop_width, params.crop_height, TOP_INSET
                ),
            )
            .with_dimensions(cols, rows),
        );
        return Ok(None);
    }

    Ok(Some(extract_tile(&rgba, &rect, params)))
}

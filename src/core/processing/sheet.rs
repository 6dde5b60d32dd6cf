use image::{Rgba, RgbaImage, imageops};

use crate::core::params::SheetParams;

/// Base filename for the first sheet; later sheets get a numbered suffix.
pub const SHEET_BASE_NAME: &str = "Emo_sheet";

/// One assembled sheet together with its derived filename.
#[derive(Clone, Debug)]
pub struct NamedSheet {
    pub image: RgbaImage,
    pub filename: String,
}

/// Filename for the 1-based sheet number: the base name alone for sheet 1,
/// a two-digit zero-padded suffix for every later sheet.
pub fn sheet_filename(sheet_number: usize) -> String {
    if sheet_number == 1 {
        format!("{}.png", SHEET_BASE_NAME)
    } else {
        format!("{}_{:02}.png", SHEET_BASE_NAME, sheet_number)
    }
}

/// Partitions `tiles` into groups of at most `capacity` and composites each
/// group onto a transparent sheet, left-to-right, top-to-bottom, in input
/// order. The final sheet only allocates the rows it actually fills.
pub fn assemble_sheets(tiles: Vec<RgbaImage>, params: &SheetParams) -> Vec<NamedSheet> {
    let capacity = params.capacity() as usize;
    let columns = params.columns as usize;
    let mut sheets = Vec::new();

    for (group_index, group) in tiles.chunks(capacity).enumerate() {
        let actual_rows = group.len().div_ceil(columns);
        let sheet_width = params.crop_width * params.columns;
        let sheet_height = params.crop_height * actual_rows as u32;

        let mut sheet = RgbaImage::from_pixel(sheet_width, sheet_height, Rgba([0, 0, 0, 0]));

        for (index, tile) in group.iter().enumerate() {
            let x = (index % columns) as i64 * params.crop_width as i64;
            let y = (index / columns) as i64 * params.crop_height as i64;
            // Tile alpha acts as the mask; the sheet background is fully
            // transparent and tiles never overlap
            imageops::overlay(&mut sheet, tile, x, y);
        }

        sheets.push(NamedSheet {
            image: sheet,
            filename: sheet_filename(group_index + 1),
        });
    }

    sheets
}

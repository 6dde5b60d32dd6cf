use image::{RgbaImage, imageops};

use crate::core::params::{SheetParams, TOP_INSET};

/// Crop window for one source image, in source pixel coordinates. Computed
/// with signed arithmetic so an out-of-bounds window can be detected before
/// any extraction happens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropRect {
    /// Window centered on `width / 2`, shifted by `x_offset`, inset
    /// `TOP_INSET` pixels from the top.
    pub fn for_image(width: u32, params: &SheetParams) -> Self {
        let center_x = (width / 2) as i64;
        let left = center_x - (params.crop_width / 2) as i64 + params.x_offset as i64;
        let top = TOP_INSET as i64;
        Self {
            left,
            top,
            right: left + params.crop_width as i64,
            bottom: top + params.crop_height as i64,
        }
    }

    /// True when the whole window lies inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0 && self.right <= width as i64 && self.bottom <= height as i64
    }
}

/// Extracts the crop window as a standalone tile, alpha included.
/// Callers must have checked `fits_within` first.
pub fn extract_tile(image: &RgbaImage, rect: &CropRect, params: &SheetParams) -> RgbaImage {
    imageops::crop_imm(
        image,
        rect.left as u32,
        rect.top as u32,
        params.crop_width,
        params.crop_height,
    )
    .to_image()
}

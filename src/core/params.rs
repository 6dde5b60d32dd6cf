use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed vertical inset from the top of every source image, in pixels.
/// The TKOOL face convention trims this strip above the crop window; it is
/// not configurable and does not scale with `crop_height`.
pub const TOP_INSET: u32 = 20;

/// Crop and layout parameters suitable for config files and GUI presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetParams {
    /// Width of each extracted tile in pixels
    pub crop_width: u32,
    /// Height of each extracted tile in pixels
    pub crop_height: u32,
    /// Tiles per sheet row
    pub columns: u32,
    /// Tile rows per full sheet
    pub rows: u32,
    /// Images wider than this are downscaled before cropping
    pub max_width: u32,
    /// Signed horizontal shift of the crop window from the image center
    pub x_offset: i32,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            crop_width: 144,
            crop_height: 144,
            columns: 4,
            rows: 2,
            max_width: 400,
            x_offset: 0,
        }
    }
}

impl SheetParams {
    /// Maximum number of tiles per sheet.
    pub fn capacity(&self) -> u32 {
        self.columns * self.rows
    }

    /// Rejects parameter values the core cannot work with. The narrower UI
    /// ranges (e.g. crop size 50..=500) are enforced by external layers.
    pub fn validate(&self) -> Result<()> {
        if self.crop_width == 0 {
            return Err(Error::InvalidArgument {
                arg: "crop_width",
                value: self.crop_width.to_string(),
            });
        }
        if self.crop_height == 0 {
            return Err(Error::InvalidArgument {
                arg: "crop_height",
                value: self.crop_height.to_string(),
            });
        }
        if self.columns == 0 {
            return Err(Error::InvalidArgument {
                arg: "columns",
                value: self.columns.to_string(),
            });
        }
        if self.rows == 0 {
            return Err(Error::InvalidArgument {
                arg: "rows",
                value: self.rows.to_string(),
            });
        }
        if self.max_width == 0 {
            return Err(Error::InvalidArgument {
                arg: "max_width",
                value: self.max_width.to_string(),
            });
        }
        Ok(())
    }
}

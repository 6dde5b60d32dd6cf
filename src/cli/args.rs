use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "facesheet", version, about = "facesheet CLI")]
pub struct CliArgs {
    /// Input image file (repeat for multiple images; order fixes the layout)
    #[arg(short, long)]
    pub input: Vec<PathBuf>,

    /// Input directory scanned for png/jpg/jpeg files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for sheets and the zip bundle
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Width of each extracted tile in pixels
    #[arg(long, default_value_t = 144)]
    pub crop_width: u32,

    /// Height of each extracted tile in pixels
    #[arg(long, default_value_t = 144)]
    pub crop_height: u32,

    /// Tiles per sheet row
    #[arg(long, default_value_t = 4)]
    pub columns: u32,

    /// Tile rows per full sheet
    #[arg(long, default_value_t = 2)]
    pub rows: u32,

    /// Images wider than this are downscaled before cropping
    #[arg(long, default_value_t = 400)]
    pub max_width: u32,

    /// Horizontal crop shift from the image center (positive = right)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub x_offset: i32,

    /// JSON preset file with all crop/layout parameters; overrides the
    /// individual parameter flags
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

//! I/O layer: reading source images from memory or disk, and writers for
//! PNG sheets and the zip archive bundle.
pub mod reader;
pub use reader::{collect_image_files, read_source_images};

pub mod writers;

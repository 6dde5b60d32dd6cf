use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::types::SourceImage;

/// File extensions accepted as batch inputs, matching the upload filter of
/// the interactive front end.
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

/// Lists the image files directly inside `dir`, sorted by name so batch
/// order (and therefore sheet layout) is stable across runs.
pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_image_extension(&path) {
            files.push(path);
        } else {
            info!("Skipping non-image entry: {:?}", path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads each path into a `SourceImage`, using the file name as the display
/// name. Bytes are left undecoded; decoding happens per image inside the
/// pipeline so a corrupt file cannot abort the batch here.
pub fn read_source_images(paths: &[PathBuf]) -> Result<Vec<SourceImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = fs::read(path)?;
        images.push(SourceImage::new(name, bytes));
    }
    Ok(images)
}

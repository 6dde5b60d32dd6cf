use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;

/// Fixed name of the bundle offered when a batch yields multiple sheets.
pub const ARCHIVE_FILE_NAME: &str = "emo_sheets.zip";

/// Serializes the ordered `(filename, bytes)` entries into a single Deflated
/// zip buffer. Entries keep their input order; entry bytes are whatever the
/// caller encoded (PNG sheets here).
pub fn pack_sheets(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (filename, bytes) in entries {
        zip.start_file(filename.as_str(), options)?;
        zip.write_all(bytes)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

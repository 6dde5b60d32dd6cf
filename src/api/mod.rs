//! High-level, ergonomic library API: build sheets from an in-memory request,
//! encode them to PNG buffers (plus a zip bundle for multi-sheet batches), or
//! run the whole flow file-to-file. Prefer these entrypoints over the
//! low-level processing modules when embedding facesheet.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::core::params::SheetParams;
use crate::core::processing::pipeline::build_tiles;
use crate::core::processing::sheet::assemble_sheets;
use crate::error::{Error, Result};
use crate::io::reader::read_source_images;
use crate::io::writers::archive::{ARCHIVE_FILE_NAME, pack_sheets};
use crate::io::writers::png::{encode_rgba_png, write_rgba_png};
use crate::types::{Diagnostic, Severity, SourceImage};

pub use crate::core::processing::sheet::NamedSheet;

/// One whole batch as an explicit, immutable request: every input image and
/// every parameter, bundled once. The core is a pure function of this value;
/// no session state survives outside it.
#[derive(Clone, Debug)]
pub struct SheetRequest {
    pub images: Vec<SourceImage>,
    pub params: SheetParams,
}

/// Result of in-memory sheet building: assembled sheets plus every per-image
/// notice collected along the way.
#[derive(Clone, Debug)]
pub struct SheetBatch {
    pub sheets: Vec<NamedSheet>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Encoded result of a batch: PNG bytes per sheet, and the zip bundle when
/// more than one sheet was produced.
#[derive(Clone, Debug)]
pub struct BatchOutput {
    pub files: Vec<(String, Vec<u8>)>,
    pub archive: Option<(String, Vec<u8>)>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome counters for a file-to-file batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub produced: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Builds the sheets for one request. Fails only on unusable parameters;
/// every per-image fault is recovered and reported through the returned
/// diagnostics. An all-skipped batch is an `Ok` with zero sheets.
pub fn build_sheets(request: &SheetRequest) -> Result<SheetBatch> {
    request.params.validate()?;
    let (tiles, diagnostics) = build_tiles(&request.images, &request.params);
    let sheets = assemble_sheets(tiles, &request.params);
    Ok(SheetBatch {
        sheets,
        diagnostics,
    })
}

/// Builds and encodes a request entirely in memory. Sheets become PNG
/// buffers; when more than one sheet results, a zip bundle named
/// [`ARCHIVE_FILE_NAME`] is packed as well. The single-sheet and zero-sheet
/// cases carry no archive; deciding how to surface an empty batch is left to
/// the caller.
pub fn process_request_to_buffer(request: &SheetRequest) -> Result<BatchOutput> {
    let batch = build_sheets(request)?;

    let mut files = Vec::with_capacity(batch.sheets.len());
    for sheet in &batch.sheets {
        let bytes = encode_rgba_png(&sheet.image).map_err(Error::external)?;
        files.push((sheet.filename.clone(), bytes));
    }

    let archive = if files.len() > 1 {
        Some((ARCHIVE_FILE_NAME.to_string(), pack_sheets(&files)?))
    } else {
        None
    };

    Ok(BatchOutput {
        files,
        archive,
        diagnostics: batch.diagnostics,
    })
}

/// Reads the given image files, builds the sheets, and writes every sheet
/// PNG (plus the zip bundle for multi-sheet batches) into `output_dir`.
/// A batch that produces nothing is a user-visible failure
/// ([`Error::EmptyBatch`]), distinct from structural faults.
pub fn process_files_to_path(
    inputs: &[PathBuf],
    output_dir: &Path,
    params: &SheetParams,
) -> Result<BatchReport> {
    let images = read_source_images(inputs)?;
    let request = SheetRequest {
        images,
        params: *params,
    };
    let batch = build_sheets(&request)?;

    let mut report = BatchReport::default();
    for diagnostic in &batch.diagnostics {
        log_diagnostic(diagnostic);
        match diagnostic.severity {
            Severity::Warning => report.skipped += 1,
            Severity::Error => report.errors += 1,
            Severity::Info => {}
        }
    }

    if batch.sheets.is_empty() {
        return Err(Error::EmptyBatch);
    }

    fs::create_dir_all(output_dir)?;
    for sheet in &batch.sheets {
        let path = output_dir.join(&sheet.filename);
        write_rgba_png(&path, &sheet.image).map_err(Error::external)?;
        info!("Wrote sheet: {:?}", path);
        report.produced += 1;
    }

    if batch.sheets.len() > 1 {
        let mut files = Vec::with_capacity(batch.sheets.len());
        for sheet in &batch.sheets {
            let bytes = encode_rgba_png(&sheet.image).map_err(Error::external)?;
            files.push((sheet.filename.clone(), bytes));
        }
        let archive_path = output_dir.join(ARCHIVE_FILE_NAME);
        fs::write(&archive_path, pack_sheets(&files)?)?;
        info!("Wrote archive: {:?}", archive_path);
    }

    Ok(report)
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic.severity {
        Severity::Info => info!("{}", diagnostic),
        Severity::Warning => tracing::warn!("{}", diagnostic),
        Severity::Error => error!("{}", diagnostic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::{Cursor, Read};

    fn png_source(name: &str, cols: u32, rows: u32, value: u8) -> SourceImage {
        let img = RgbaImage::from_pixel(cols, rows, Rgba([value, value, value, 255]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        SourceImage::new(name, buf.into_inner())
    }

    fn request(images: Vec<SourceImage>) -> SheetRequest {
        SheetRequest {
            images,
            params: SheetParams::default(),
        }
    }

    #[test]
    fn invalid_params_are_rejected_up_front() {
        let mut req = request(vec![png_source("a.png", 300, 300, 1)]);
        req.params.crop_width = 0;
        assert!(matches!(
            build_sheets(&req),
            Err(Error::InvalidArgument { arg: "crop_width", .. })
        ));
    }

    #[test]
    fn empty_input_is_ok_with_zero_sheets() {
        let output = process_request_to_buffer(&request(Vec::new())).unwrap();
        assert!(output.files.is_empty());
        assert!(output.archive.is_none());
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn single_sheet_batch_has_no_archive() {
        let output =
            process_request_to_buffer(&request(vec![png_source("a.png", 300, 300, 1)])).unwrap();
        assert_eq!(output.files.len(), 1);
        assert_eq!(output.files[0].0, "Emo_sheet.png");
        assert!(output.archive.is_none());
    }

    #[test]
    fn ten_portraits_make_two_sheets_and_an_archive() {
        // Spec scenario: 10 x 300x300 with defaults -> no resize, 10 crops,
        // 2 sheets (8 + 2 tiles), archive with 2 entries
        let images = (0..10)
            .map(|i| png_source(&format!("face{:02}.png", i), 300, 300, (i * 20) as u8))
            .collect();
        let output = process_request_to_buffer(&request(images)).unwrap();

        assert_eq!(output.files.len(), 2);
        assert_eq!(output.files[0].0, "Emo_sheet.png");
        assert_eq!(output.files[1].0, "Emo_sheet_02.png");
        assert!(output.diagnostics.is_empty());

        let sheet1 = image::load_from_memory(&output.files[0].1).unwrap().to_rgba8();
        let sheet2 = image::load_from_memory(&output.files[1].1).unwrap().to_rgba8();
        assert_eq!(sheet1.dimensions(), (576, 288));
        assert_eq!(sheet2.dimensions(), (576, 144));
        // Ninth image lands at cell 0 of sheet 2
        assert_eq!(sheet2.get_pixel(0, 0), &Rgba([160, 160, 160, 255]));

        let (name, bytes) = output.archive.as_ref().unwrap();
        assert_eq!(name, ARCHIVE_FILE_NAME);
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        assert_eq!(archive.len(), 2);
        for i in 0..2 {
            let mut entry = archive.by_index(i).unwrap();
            assert_eq!(entry.name(), output.files[i].0);
            let mut content = Vec::new();
            entry.read_to_end(&mut content).unwrap();
            assert_eq!(content, output.files[i].1);
        }
    }

    #[test]
    fn all_skipped_batch_yields_no_files_and_one_warning() {
        let output =
            process_request_to_buffer(&request(vec![png_source("tiny.png", 100, 100, 0)])).unwrap();
        assert!(output.files.is_empty());
        assert!(output.archive.is_none());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn oversized_portrait_resizes_then_crops_into_one_sheet() {
        // Spec scenario: 800x600 with max_width 400 -> 400x300, crop fits
        let output =
            process_request_to_buffer(&request(vec![png_source("big.png", 800, 600, 9)])).unwrap();
        assert_eq!(output.files.len(), 1);
        assert!(output.archive.is_none());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].severity, Severity::Info);
    }

    #[test]
    fn identical_requests_encode_identical_bytes() {
        let images = vec![
            png_source("a.png", 800, 600, 3),
            png_source("b.png", 300, 300, 4),
        ];
        let first = process_request_to_buffer(&request(images.clone())).unwrap();
        let second = process_request_to_buffer(&request(images)).unwrap();
        assert_eq!(first.files, second.files);
    }
}

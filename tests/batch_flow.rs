//! End-to-end file flow: input images on disk in, sheet PNGs (and the zip
//! bundle) out.

use std::fs;
use std::io::{Cursor, Read};
use std::path::PathBuf;

use image::{ImageFormat, Rgba, RgbaImage};

use facesheet::{ARCHIVE_FILE_NAME, Error, SheetParams, process_files_to_path};

fn write_png(dir: &std::path::Path, name: &str, cols: u32, rows: u32, value: u8) -> PathBuf {
    let img = RgbaImage::from_pixel(cols, rows, Rgba([value, value, value, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    let path = dir.join(name);
    fs::write(&path, buf.into_inner()).unwrap();
    path
}

#[test]
fn multi_sheet_batch_writes_sheets_and_bundle() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    let inputs: Vec<PathBuf> = (0..10)
        .map(|i| {
            write_png(
                input_dir.path(),
                &format!("face{:02}.png", i),
                300,
                300,
                (i * 20) as u8,
            )
        })
        .collect();

    let report =
        process_files_to_path(&inputs, output_dir.path(), &SheetParams::default()).unwrap();
    assert_eq!(report.produced, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.errors, 0);

    let sheet1 = image::open(output_dir.path().join("Emo_sheet.png"))
        .unwrap()
        .to_rgba8();
    let sheet2 = image::open(output_dir.path().join("Emo_sheet_02.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(sheet1.dimensions(), (576, 288));
    assert_eq!(sheet2.dimensions(), (576, 144));

    // Bundle holds the same two entries, same order, same bytes as on disk
    let bundle = fs::read(output_dir.path().join(ARCHIVE_FILE_NAME)).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bundle)).unwrap();
    assert_eq!(archive.len(), 2);
    for (i, name) in ["Emo_sheet.png", "Emo_sheet_02.png"].iter().enumerate() {
        let mut entry = archive.by_index(i).unwrap();
        assert_eq!(entry.name(), *name);
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        assert_eq!(content, fs::read(output_dir.path().join(name)).unwrap());
    }
}

#[test]
fn single_sheet_batch_writes_no_bundle() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    let inputs = vec![write_png(input_dir.path(), "only.png", 300, 300, 90)];
    let report =
        process_files_to_path(&inputs, output_dir.path(), &SheetParams::default()).unwrap();
    assert_eq!(report.produced, 1);
    assert!(output_dir.path().join("Emo_sheet.png").is_file());
    assert!(!output_dir.path().join(ARCHIVE_FILE_NAME).exists());
}

#[test]
fn all_skipped_batch_fails_with_empty_batch() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    let inputs = vec![write_png(input_dir.path(), "tiny.png", 100, 100, 0)];
    let result = process_files_to_path(&inputs, output_dir.path(), &SheetParams::default());
    assert!(matches!(result, Err(Error::EmptyBatch)));
    assert!(!output_dir.path().join("Emo_sheet.png").exists());
}

#[test]
fn corrupt_file_is_dropped_and_counted() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    let bad = input_dir.path().join("broken.png");
    fs::write(&bad, b"not a png").unwrap();
    let good = write_png(input_dir.path(), "good.png", 300, 300, 70);

    let report = process_files_to_path(&[bad, good], output_dir.path(), &SheetParams::default())
        .unwrap();
    assert_eq!(report.produced, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.skipped, 0);
}

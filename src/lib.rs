#![doc = r#"
facesheet — a batch portrait-to-sprite-sheet processor.

This crate turns a batch of portrait images into fixed-size tiled face/emotion
sheets for game-creation tools following the TKOOL/RPG Maker face conventions:
each source image is cropped to a fixed window around its (optionally offset)
horizontal center, oversized inputs are downscaled first, the resulting tiles
are composited onto transparent grid sheets, and multi-sheet batches are
bundled into a single zip archive. It powers the facesheet CLI and can be
embedded in your own Rust applications.

Per-image faults never abort a batch: undecodable and too-small images are
dropped and reported through structured [`Diagnostic`] records so a UI layer
can localize or filter them.

Add dependency
--------------
```toml
[dependencies]
facesheet = "0.1"
```

Quick start: process files to a directory
-----------------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use facesheet::{SheetParams, process_files_to_path};

fn main() -> facesheet::Result<()> {
    let inputs = vec![PathBuf::from("faces/alice.png"), PathBuf::from("faces/bob.png")];
    let params = SheetParams::default(); // 144x144 tiles, 4x2 grid, 400 px max width

    let report = process_files_to_path(&inputs, Path::new("out"), &params)?;
    println!(
        "produced={} skipped={} errors={}",
        report.produced, report.skipped, report.errors
    );
    Ok(())
}
```

Process in-memory to `BatchOutput`
----------------------------------
```rust,no_run
use facesheet::{SheetParams, SheetRequest, SourceImage, process_request_to_buffer};

fn main() -> facesheet::Result<()> {
    let request = SheetRequest {
        images: vec![SourceImage::new("alice.png", std::fs::read("faces/alice.png")?)],
        params: SheetParams {
            crop_width: 144,
            crop_height: 144,
            columns: 4,
            rows: 2,
            max_width: 400,
            x_offset: 0,
        },
    };

    let output = process_request_to_buffer(&request)?;
    for (filename, bytes) in &output.files {
        println!("{}: {} bytes", filename, bytes.len());
    }
    if let Some((name, bytes)) = &output.archive {
        println!("bundle {}: {} bytes", name, bytes.len());
    }
    for diagnostic in &output.diagnostics {
        eprintln!("{}", diagnostic);
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `facesheet::Result<T>`; match on
`facesheet::Error` to handle specific cases. Only whole-batch problems
surface as errors — per-image faults are diagnostics.

```rust,no_run
use std::path::{Path, PathBuf};
use facesheet::{Error, SheetParams, process_files_to_path};

fn main() {
    let inputs = vec![PathBuf::from("faces/alice.png")];
    match process_files_to_path(&inputs, Path::new("out"), &SheetParams::default()) {
        Ok(report) => println!("produced {} sheet(s)", report.produced),
        Err(Error::EmptyBatch) => eprintln!("nothing to produce: every image was skipped"),
        Err(other) => eprintln!("batch failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — diagnostics and input types (`Severity`, `Diagnostic`, `SourceImage`).
- [`io`] — readers and PNG/zip writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{SheetParams, TOP_INSET};
pub use error::{Error, Result};
pub use types::{Diagnostic, Severity, SourceImage};

// Writer helpers and constants
pub use io::writers::archive::{ARCHIVE_FILE_NAME, pack_sheets};
pub use io::writers::png::{encode_rgba_png, write_rgba_png};

// High-level API re-exports
pub use api::{
    BatchOutput, BatchReport, NamedSheet, SheetBatch, SheetRequest, build_sheets,
    process_files_to_path, process_request_to_buffer,
};
pub use core::processing::sheet::{SHEET_BASE_NAME, sheet_filename};

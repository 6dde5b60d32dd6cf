use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::info;

use facesheet::SheetParams;
use facesheet::api::process_files_to_path;
use facesheet::io::collect_image_files;

use super::args::CliArgs;
use super::errors::AppError;

fn load_params(args: &CliArgs) -> Result<SheetParams, Box<dyn std::error::Error>> {
    if let Some(path) = &args.params {
        let file = File::open(path).map_err(AppError::Io)?;
        let params: SheetParams =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| AppError::InvalidParamsFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        return Ok(params);
    }

    Ok(SheetParams {
        crop_width: args.crop_width,
        crop_height: args.crop_height,
        columns: args.columns,
        rows: args.rows,
        max_width: args.max_width,
        x_offset: args.x_offset,
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = load_params(&args)?;

    let mut inputs: Vec<PathBuf> = args.input.clone();
    if let Some(input_dir) = &args.input_dir {
        info!("Scanning input directory: {:?}", input_dir);
        inputs.extend(collect_image_files(input_dir)?);
    }
    if inputs.is_empty() {
        return Err(AppError::MissingArgument {
            arg: "--input or --input-dir".to_string(),
        }
        .into());
    }

    info!("Processing {} image(s) -> {:?}", inputs.len(), args.output_dir);
    let report = process_files_to_path(&inputs, &args.output_dir, &params)?;

    info!("Batch complete!");
    info!("Sheets produced: {}", report.produced);
    info!("Images skipped: {}", report.skipped);
    info!("Images failed: {}", report.errors);

    Ok(())
}

//! CLI command for importing expense files

use std::path::PathBuf;

use clap::Args;

use crate::error::{OutlayError, OutlayResult};
use crate::services::{import_str, ImportFormat};
use crate::storage::Storage;

/// Arguments for `outlay import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to a .json or .csv file
    pub file: PathBuf,

    /// Override the format inferred from the file extension
    #[arg(short, long, value_enum)]
    pub format: Option<ImportFormat>,
}

/// Handle `outlay import`
pub fn handle_import_command(storage: &mut Storage, args: ImportArgs) -> OutlayResult<()> {
    let format = args
        .format
        .or_else(|| ImportFormat::from_path(&args.file))
        .ok_or_else(|| {
            OutlayError::Validation(format!(
                "Cannot infer format of {} (use --format json|csv)",
                args.file.display()
            ))
        })?;

    let text = std::fs::read_to_string(&args.file).map_err(|e| {
        OutlayError::Import(format!("Failed to read {}: {}", args.file.display(), e))
    })?;

    let result = import_str(storage, &text, format)?;
    println!(
        "Imported {} expense(s) from {}",
        result.imported,
        args.file.display()
    );

    Ok(())
}

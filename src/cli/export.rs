//! CLI command for exporting expense data
//!
//! Spreadsheet and report exports run through injected writer capabilities;
//! when one fails the failure is logged and reported with an actionable
//! message instead of taking the command chain down.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::error;

use crate::config::Settings;
use crate::error::{OutlayError, OutlayResult};
use crate::export::{
    build_monthly_report, build_report, export_expenses_csv, export_expenses_json,
    export_expenses_spreadsheet, render_report, stamped_filename, HtmlDocumentWriter,
    XmlSpreadsheetWriter,
};
use crate::models::Expense;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV with fixed columns
    Csv,
    /// Pretty-printed JSON array
    Json,
    /// Spreadsheet worksheet (SpreadsheetML)
    Xlsx,
    /// Printable report document
    Report,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xls",
            Self::Report => "html",
        }
    }
}

/// Arguments for `outlay export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to a date-stamped name in the current directory)
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Restrict to one month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Handle `outlay export`
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> OutlayResult<()> {
    let today = chrono::Utc::now().date_naive();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(stamped_filename("expenses", args.format.extension(), today)));

    let snapshot: Vec<Expense> = match (&args.month, args.format) {
        // The report format applies its own month filter with its own notice
        (Some(month), ExportFormat::Csv | ExportFormat::Json | ExportFormat::Xlsx) => storage
            .expenses
            .all()
            .iter()
            .filter(|e| e.month_key() == *month)
            .cloned()
            .collect(),
        _ => storage.expenses.all().to_vec(),
    };

    // Exports build in memory first so a refused export leaves no file behind
    let result = match args.format {
        ExportFormat::Csv => {
            let mut buffer = Vec::new();
            export_expenses_csv(&snapshot, &mut buffer)
                .and_then(|()| write_bytes(&output, &buffer))
        }
        ExportFormat::Json => {
            let mut buffer = Vec::new();
            export_expenses_json(&snapshot, &mut buffer)
                .and_then(|()| write_bytes(&output, &buffer))
        }
        ExportFormat::Xlsx => export_expenses_spreadsheet(&snapshot, &XmlSpreadsheetWriter)
            .and_then(|bytes| write_bytes(&output, &bytes)),
        ExportFormat::Report => {
            let document = match &args.month {
                Some(month) => {
                    build_monthly_report(&snapshot, month, &settings.currency_symbol)?
                }
                None => build_report(&snapshot, &settings.currency_symbol, None),
            };
            render_report(&document, &HtmlDocumentWriter)
                .and_then(|bytes| write_bytes(&output, &bytes))
        }
    };

    match result {
        Ok(()) => {
            println!("Exported {} expense(s) to {}", snapshot.len(), output.display());
            Ok(())
        }
        Err(err) if err.is_capability() => {
            // A broken writer capability must not take the application down
            error!(error = %err, "export capability failed");
            eprintln!(
                "{}. The {} writer is unavailable; try --format csv or --format json instead.",
                err,
                match args.format {
                    ExportFormat::Xlsx => "spreadsheet",
                    _ => "document",
                }
            );
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn write_bytes(output: &PathBuf, bytes: &[u8]) -> OutlayResult<()> {
    std::fs::write(output, bytes).map_err(|e| {
        OutlayError::Export(format!("Failed to write file {}: {}", output.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::OutlayPaths;
    use crate::models::{Category, ExpenseId, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &mut Storage) {
        storage
            .expenses
            .add(Expense::with_details(
                ExpenseId::from_raw(1),
                "Coffee",
                Money::from_cents(450),
                "2024-01-15".parse().unwrap(),
                Category::FoodAndDrink,
            ))
            .unwrap();
    }

    #[test]
    fn test_export_csv_to_file() {
        let (temp_dir, mut storage) = create_test_storage();
        seed(&mut storage);

        let output = temp_dir.path().join("out.csv");
        handle_export_command(
            &storage,
            &Settings::default(),
            ExportArgs {
                output: Some(output.clone()),
                format: ExportFormat::Csv,
                month: None,
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert!(contents.starts_with("id,reason,amount,date,category"));
        assert!(contents.contains("Coffee"));
    }

    #[test]
    fn test_export_empty_store_is_refused() {
        let (temp_dir, storage) = create_test_storage();
        let output = temp_dir.path().join("out.csv");

        let err = handle_export_command(
            &storage,
            &Settings::default(),
            ExportArgs {
                output: Some(output.clone()),
                format: ExportFormat::Csv,
                month: None,
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("No expenses"));
        assert!(!output.exists());
    }

    #[test]
    fn test_export_monthly_report_refuses_empty_month() {
        let (temp_dir, mut storage) = create_test_storage();
        seed(&mut storage);

        let err = handle_export_command(
            &storage,
            &Settings::default(),
            ExportArgs {
                output: Some(temp_dir.path().join("report.html")),
                format: ExportFormat::Report,
                month: Some("2019-01".into()),
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("No data for month"));
    }

    #[test]
    fn test_export_report_writes_html() {
        let (temp_dir, mut storage) = create_test_storage();
        seed(&mut storage);

        let output = temp_dir.path().join("report.html");
        handle_export_command(
            &storage,
            &Settings::default(),
            ExportArgs {
                output: Some(output.clone()),
                format: ExportFormat::Report,
                month: Some("2024-01".into()),
            },
        )
        .unwrap();

        let html = std::fs::read_to_string(output).unwrap();
        assert!(html.contains("Monthly Report for 2024-01"));
    }

    #[test]
    fn test_export_month_filter_for_csv() {
        let (temp_dir, mut storage) = create_test_storage();
        seed(&mut storage);
        storage
            .expenses
            .add(Expense::with_details(
                ExpenseId::from_raw(2),
                "Rent",
                Money::from_cents(90000),
                "2024-02-01".parse().unwrap(),
                Category::Bills,
            ))
            .unwrap();

        let output = temp_dir.path().join("jan.csv");
        handle_export_command(
            &storage,
            &Settings::default(),
            ExportArgs {
                output: Some(output.clone()),
                format: ExportFormat::Csv,
                month: Some("2024-01".into()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert!(contents.contains("Coffee"));
        assert!(!contents.contains("Rent"));
    }
}

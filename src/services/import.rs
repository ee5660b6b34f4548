//! Expense import service
//!
//! Parses uploaded JSON or CSV text into normalized expense records and
//! appends them to the store. Structural problems (not an array, empty
//! file, unreadable JSON) abort the whole import with no mutation;
//! field-level problems are silently recovered with defaults.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use csv::{ReaderBuilder, Trim};
use serde_json::Value;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Supported import formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// A record as it arrives from a file, before normalization
///
/// Every field is optional; `normalize` applies the defaulting table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub id: Option<i64>,
    pub reason: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

/// Summary of a completed import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportResult {
    /// Number of records appended
    pub imported: usize,
}

/// Turn a raw record into a typed expense
///
/// Defaulting table (field, when missing or invalid, becomes):
///
/// | field    | default               |
/// |----------|-----------------------|
/// | id       | `fallback_id`         |
/// | reason   | `"Imported"`          |
/// | amount   | zero                  |
/// | date     | `today`               |
/// | category | `Category::Other`     |
pub fn normalize(raw: RawRecord, fallback_id: ExpenseId, today: NaiveDate) -> Expense {
    let id = raw.id.map(ExpenseId::from_raw).unwrap_or(fallback_id);

    let reason = match raw.reason {
        Some(r) if !r.trim().is_empty() => r.trim().to_string(),
        _ => "Imported".to_string(),
    };

    let amount = raw
        .amount
        .map(|a| Money::parse_lossy(&a))
        .unwrap_or_else(Money::zero);

    let date = raw
        .date
        .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
        .unwrap_or(today);

    let category = raw
        .category
        .map(|c| Category::from_label(&c))
        .unwrap_or_default();

    Expense::with_details(id, reason, amount, date, category)
}

/// Parse JSON text into raw records
///
/// The top-level value must be an array; anything else is an invalid-format
/// error. Elements that are not objects contribute a fully-defaulted record
/// rather than failing the import.
pub fn parse_json(text: &str) -> OutlayResult<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| OutlayError::Import(format!("Invalid file: {}", e)))?;

    let items = value
        .as_array()
        .ok_or_else(|| OutlayError::Import("Invalid format: expected a JSON array".into()))?;

    Ok(items.iter().map(raw_from_value).collect())
}

fn raw_from_value(value: &Value) -> RawRecord {
    RawRecord {
        id: value.get("id").and_then(Value::as_i64),
        reason: value
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string),
        amount: value.get("amount").map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }),
        date: value
            .get("date")
            .and_then(Value::as_str)
            .map(str::to_string),
        category: value
            .get("category")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

/// Parse CSV text into raw records
///
/// The first row is a header; data rows map positionally to header names
/// (case-insensitive). A file with a header but no data rows is an
/// empty-file error.
pub fn parse_csv(text: &str) -> OutlayResult<Vec<RawRecord>> {
    if text.lines().filter(|l| !l.trim().is_empty()).count() < 2 {
        return Err(OutlayError::Import("Empty file: no data rows".into()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| OutlayError::Import(format!("Invalid file: {}", e)))?
        .iter()
        .map(|h| h.trim().trim_matches('"').to_ascii_lowercase())
        .collect();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let id_col = column("id");
    let reason_col = column("reason");
    let amount_col = column("amount");
    let date_col = column("date");
    let category_col = column("category");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| OutlayError::Import(format!("Invalid file: {}", e)))?;
        let field = |col: Option<usize>| {
            col.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        records.push(RawRecord {
            id: field(id_col).and_then(|s| s.parse().ok()),
            reason: field(reason_col),
            amount: field(amount_col),
            date: field(date_col),
            category: field(category_col),
        });
    }

    Ok(records)
}

/// Parse `text` in the given format and append the records to the store
///
/// Records are appended in file order and the store is persisted once.
/// Generated ids start at a timestamp base and step by one per row.
pub fn import_str(
    storage: &mut Storage,
    text: &str,
    format: ImportFormat,
) -> OutlayResult<ImportResult> {
    let raw_records = match format {
        ImportFormat::Json => parse_json(text)?,
        ImportFormat::Csv => parse_csv(text)?,
    };

    let base_id = ExpenseId::now();
    let today = Utc::now().date_naive();

    let expenses: Vec<Expense> = raw_records
        .into_iter()
        .enumerate()
        .map(|(row, raw)| normalize(raw, base_id.offset(row as i64), today))
        .collect();

    let imported = expenses.len();
    if imported > 0 {
        storage.expenses.add_all(expenses)?;
    }

    Ok(ImportResult { imported })
}

//! Export module for outlay
//!
//! Serializes a record snapshot into downloadable artifacts:
//! - CSV: fixed columns, spreadsheet-compatible
//! - JSON: machine-readable array that round-trips through the importer
//! - Spreadsheet: a single named worksheet via an injected writer
//! - Report: a titled, printable document via an injected writer
//!
//! The spreadsheet and document writers are trait objects supplied by the
//! embedding application; tests stub them. Writer failures surface as
//! `OutlayError::Capability` and are never fatal to the application.

pub mod csv;
pub mod json;
pub mod report;
pub mod spreadsheet;

pub use csv::export_expenses_csv;
pub use json::{export_expenses_json, ExpenseRecord};
pub use report::{
    build_monthly_report, build_report, render_report, DocumentWriter, HtmlDocumentWriter,
    ReportDocument, ReportRow,
};
pub use spreadsheet::{export_expenses_spreadsheet, SpreadsheetWriter, XmlSpreadsheetWriter};

use chrono::NaiveDate;

/// Default export file name, stamped with the given date
///
/// `stamped_filename("expenses", "csv", date)` is `"expenses-2024-02-01.csv"`.
pub fn stamped_filename(stem: &str, extension: &str, date: NaiveDate) -> String {
    format!("{}-{}.{}", stem, date.format("%Y-%m-%d"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_filename() {
        let date: NaiveDate = "2024-02-01".parse().unwrap();
        assert_eq!(
            stamped_filename("expenses", "csv", date),
            "expenses-2024-02-01.csv"
        );
    }
}

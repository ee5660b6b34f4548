//! Spreadsheet export functionality
//!
//! The exporter itself only shapes rows; turning them into worksheet bytes
//! is the job of an injected `SpreadsheetWriter`. The shipped writer emits
//! SpreadsheetML (Excel-compatible XML), which keeps the crate free of a
//! spreadsheet dependency while remaining openable in spreadsheet tools.

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;

use super::csv::CSV_COLUMNS;

/// Worksheet name used for expense exports
pub const WORKSHEET_NAME: &str = "Expenses";

/// An injected capability that turns tabular data into worksheet bytes
///
/// Implementations are supplied by the embedding application and may be
/// stubbed in tests. Errors are plain strings; the exporter wraps them.
pub trait SpreadsheetWriter {
    fn write_worksheet(
        &self,
        sheet_name: &str,
        header: &[&str],
        rows: &[Vec<String>],
    ) -> Result<Vec<u8>, String>;
}

/// Export expenses as a single named worksheet
///
/// Columns match the CSV export. Writer failures come back as
/// `OutlayError::Capability`, which callers report without aborting.
pub fn export_expenses_spreadsheet(
    expenses: &[Expense],
    writer: &dyn SpreadsheetWriter,
) -> OutlayResult<Vec<u8>> {
    if expenses.is_empty() {
        return Err(OutlayError::Export("No expenses to export".into()));
    }

    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.reason.clone(),
                format!("{:.2}", e.amount.to_units_f64()),
                e.date.to_string(),
                e.category.label().to_string(),
            ]
        })
        .collect();

    writer
        .write_worksheet(WORKSHEET_NAME, &CSV_COLUMNS, &rows)
        .map_err(OutlayError::Capability)
}

/// SpreadsheetML writer shipped with the CLI
///
/// Emits the Excel 2003 XML workbook format: one `<Workbook>` with one
/// `<Worksheet>`, all cells as strings except the amount column.
pub struct XmlSpreadsheetWriter;

impl SpreadsheetWriter for XmlSpreadsheetWriter {
    fn write_worksheet(
        &self,
        sheet_name: &str,
        header: &[&str],
        rows: &[Vec<String>],
    ) -> Result<Vec<u8>, String> {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\"?>\n");
        out.push_str("<?mso-application progid=\"Excel.Sheet\"?>\n");
        out.push_str(
            "<Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\" \
             xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\">\n",
        );
        out.push_str(&format!(
            " <Worksheet ss:Name=\"{}\">\n  <Table>\n",
            escape_xml(sheet_name)
        ));

        out.push_str("   <Row>\n");
        for cell in header {
            out.push_str(&format!(
                "    <Cell><Data ss:Type=\"String\">{}</Data></Cell>\n",
                escape_xml(cell)
            ));
        }
        out.push_str("   </Row>\n");

        for row in rows {
            out.push_str("   <Row>\n");
            for cell in row {
                let cell_type = if cell.parse::<f64>().is_ok() {
                    "Number"
                } else {
                    "String"
                };
                out.push_str(&format!(
                    "    <Cell><Data ss:Type=\"{}\">{}</Data></Cell>\n",
                    cell_type,
                    escape_xml(cell)
                ));
            }
            out.push_str("   </Row>\n");
        }

        out.push_str("  </Table>\n </Worksheet>\n</Workbook>\n");
        Ok(out.into_bytes())
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money};

    fn sample() -> Vec<Expense> {
        vec![Expense::with_details(
            ExpenseId::from_raw(1),
            "Coffee & cake",
            Money::from_cents(1250),
            "2024-01-15".parse().unwrap(),
            Category::FoodAndDrink,
        )]
    }

    /// A writer that always fails, standing in for a broken capability
    struct FailingWriter;

    impl SpreadsheetWriter for FailingWriter {
        fn write_worksheet(
            &self,
            _sheet_name: &str,
            _header: &[&str],
            _rows: &[Vec<String>],
        ) -> Result<Vec<u8>, String> {
            Err("writer unavailable".into())
        }
    }

    #[test]
    fn test_export_spreadsheet_xml() {
        let bytes = export_expenses_spreadsheet(&sample(), &XmlSpreadsheetWriter).unwrap();
        let xml = String::from_utf8(bytes).unwrap();

        assert!(xml.contains("ss:Name=\"Expenses\""));
        assert!(xml.contains("Coffee &amp; cake"));
        assert!(xml.contains("<Data ss:Type=\"Number\">12.50</Data>"));
        assert!(xml.contains("<Data ss:Type=\"String\">Food &amp; Drink</Data>"));
    }

    #[test]
    fn test_writer_failure_is_a_capability_error() {
        let err = export_expenses_spreadsheet(&sample(), &FailingWriter).unwrap_err();
        assert!(err.is_capability());
        assert!(err.to_string().contains("writer unavailable"));
    }

    #[test]
    fn test_export_spreadsheet_refuses_empty() {
        let err = export_expenses_spreadsheet(&[], &XmlSpreadsheetWriter).unwrap_err();
        assert!(err.to_string().contains("No expenses"));
    }
}

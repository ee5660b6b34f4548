//! Report document export
//!
//! Builds a titled table of expenses with a grand-total row and hands it to
//! an injected `DocumentWriter` for layout. The shipped writer produces a
//! self-contained HTML document with print styling, so "save as PDF" is one
//! browser dialog away.

use crate::error::{OutlayError, OutlayResult};
use crate::models::{Expense, Money};
use crate::reports::grand_total;

/// One table row of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub reason: String,
    pub category: String,
    pub date: String,
    pub amount: Money,
}

/// A fully-shaped report, ready for layout
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    /// Optional sub-heading, e.g. "Monthly Report for 2024-01"
    pub caption: Option<String>,
    pub currency_symbol: String,
    pub rows: Vec<ReportRow>,
    pub grand_total: Money,
}

/// An injected capability that lays out a report document
///
/// Implementations are supplied by the embedding application and may be
/// stubbed in tests. Errors are plain strings; the exporter wraps them.
pub trait DocumentWriter {
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, String>;
}

/// Shape a report over the full snapshot
pub fn build_report(
    expenses: &[Expense],
    currency_symbol: &str,
    caption: Option<String>,
) -> ReportDocument {
    let rows = expenses
        .iter()
        .map(|e| ReportRow {
            reason: e.reason.clone(),
            category: e.category.label().to_string(),
            date: e.date.to_string(),
            amount: e.amount,
        })
        .collect();

    ReportDocument {
        title: "Expense Report".to_string(),
        caption,
        currency_symbol: currency_symbol.to_string(),
        rows,
        grand_total: grand_total(expenses),
    }
}

/// Shape a report restricted to one `"YYYY-MM"` month
///
/// An empty month aborts before any writer runs.
pub fn build_monthly_report(
    expenses: &[Expense],
    month: &str,
    currency_symbol: &str,
) -> OutlayResult<ReportDocument> {
    let filtered: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.month_key() == month)
        .cloned()
        .collect();

    if filtered.is_empty() {
        return Err(OutlayError::Export(format!("No data for month {}", month)));
    }

    Ok(build_report(
        &filtered,
        currency_symbol,
        Some(format!("Monthly Report for {}", month)),
    ))
}

/// Render a report through the injected writer
///
/// Writer failures come back as `OutlayError::Capability`, which callers
/// report without aborting.
pub fn render_report(
    document: &ReportDocument,
    writer: &dyn DocumentWriter,
) -> OutlayResult<Vec<u8>> {
    writer.render(document).map_err(OutlayError::Capability)
}

/// HTML document writer shipped with the CLI
///
/// Emits a self-contained page: embedded CSS, a header, the expense table,
/// and a grand-total row. Prints cleanly to paper or PDF.
pub struct HtmlDocumentWriter;

impl DocumentWriter for HtmlDocumentWriter {
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, String> {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_html(&document.title)));
        out.push_str(
            "<style>\n\
             body { font-family: sans-serif; margin: 2rem; }\n\
             h1 { margin-bottom: 0.25rem; }\n\
             .caption { color: #555; margin-top: 0; }\n\
             table { border-collapse: collapse; width: 100%; }\n\
             th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }\n\
             td.amount, th.amount { text-align: right; }\n\
             tfoot td { font-weight: bold; }\n\
             @media print { body { margin: 0; } }\n\
             </style>\n</head>\n<body>\n",
        );

        out.push_str(&format!("<h1>{}</h1>\n", escape_html(&document.title)));
        if let Some(caption) = &document.caption {
            out.push_str(&format!(
                "<p class=\"caption\">{}</p>\n",
                escape_html(caption)
            ));
        }

        out.push_str(
            "<table>\n<thead>\n<tr><th>Reason</th><th>Category</th><th>Date</th>\
             <th class=\"amount\">Amount</th></tr>\n</thead>\n<tbody>\n",
        );

        for row in &document.rows {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"amount\">{}</td></tr>\n",
                escape_html(&row.reason),
                escape_html(&row.category),
                escape_html(&row.date),
                escape_html(&row.amount.format_with_symbol(&document.currency_symbol)),
            ));
        }

        out.push_str(&format!(
            "</tbody>\n<tfoot>\n<tr><td colspan=\"3\">Total</td>\
             <td class=\"amount\">{}</td></tr>\n</tfoot>\n</table>\n</body>\n</html>\n",
            escape_html(
                &document
                    .grand_total
                    .format_with_symbol(&document.currency_symbol)
            ),
        ));

        Ok(out.into_bytes())
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId};

    fn expense(id: i64, reason: &str, cents: i64, date: &str) -> Expense {
        Expense::with_details(
            ExpenseId::from_raw(id),
            reason,
            Money::from_cents(cents),
            date.parse().unwrap(),
            Category::FoodAndDrink,
        )
    }

    /// A writer that always fails, standing in for a broken capability
    struct FailingWriter;

    impl DocumentWriter for FailingWriter {
        fn render(&self, _document: &ReportDocument) -> Result<Vec<u8>, String> {
            Err("layout engine missing".into())
        }
    }

    #[test]
    fn test_build_report_totals() {
        let expenses = vec![
            expense(1, "Coffee", 450, "2024-01-05"),
            expense(2, "Lunch", 1250, "2024-01-06"),
        ];
        let document = build_report(&expenses, "$", None);

        assert_eq!(document.rows.len(), 2);
        assert_eq!(document.grand_total, Money::from_cents(1700));
        assert_eq!(document.caption, None);
    }

    #[test]
    fn test_build_monthly_report_filters_and_captions() {
        let expenses = vec![
            expense(1, "Coffee", 450, "2024-01-05"),
            expense(2, "Lunch", 1250, "2024-02-06"),
        ];
        let document = build_monthly_report(&expenses, "2024-01", "$").unwrap();

        assert_eq!(document.rows.len(), 1);
        assert_eq!(document.grand_total, Money::from_cents(450));
        assert_eq!(
            document.caption.as_deref(),
            Some("Monthly Report for 2024-01")
        );
    }

    #[test]
    fn test_build_monthly_report_refuses_empty_month() {
        let expenses = vec![expense(1, "Coffee", 450, "2024-01-05")];
        let err = build_monthly_report(&expenses, "2023-06", "$").unwrap_err();
        assert!(err.to_string().contains("No data for month 2023-06"));
    }

    #[test]
    fn test_html_writer_output() {
        let expenses = vec![expense(1, "Fish & chips", 899, "2024-01-05")];
        let document = build_report(&expenses, "$", Some("Monthly Report for 2024-01".into()));
        let bytes = render_report(&document, &HtmlDocumentWriter).unwrap();
        let html = String::from_utf8(bytes).unwrap();

        assert!(html.contains("<h1>Expense Report</h1>"));
        assert!(html.contains("Monthly Report for 2024-01"));
        assert!(html.contains("Fish &amp; chips"));
        assert!(html.contains("$8.99"));
        assert!(html.contains("<tfoot>"));
    }

    #[test]
    fn test_writer_failure_is_a_capability_error() {
        let document = build_report(&[], "$", None);
        let err = render_report(&document, &FailingWriter).unwrap_err();
        assert!(err.is_capability());
    }
}

//! CLI commands for recording and browsing expenses

use clap::Args;

use crate::config::Settings;
use crate::display::format_expense_table;
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::reports::{filter_and_sort, CategoryFilter, ExpenseFilter, SortKey};
use crate::storage::Storage;

/// Arguments for `outlay add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub reason: String,

    /// Amount, e.g. "12.50"
    pub amount: String,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Spending category
    #[arg(short, long, value_enum, default_value = "other")]
    pub category: Category,
}

/// Arguments for `outlay list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show this category
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// Inclusive start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Inclusive end date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Sort order
    #[arg(short, long, value_enum, default_value = "newest")]
    pub sort: SortKey,
}

/// Handle `outlay add`
pub fn handle_add_command(storage: &mut Storage, args: AddArgs) -> OutlayResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| OutlayError::Validation(e.to_string()))?;

    let date = match &args.date {
        Some(d) => parse_date(d)?,
        None => chrono::Utc::now().date_naive(),
    };

    let expense = Expense::with_details(
        ExpenseId::now(),
        args.reason.trim(),
        amount,
        date,
        args.category,
    );
    expense
        .validate()
        .map_err(|e| OutlayError::Validation(e.to_string()))?;
    let id = expense.id;

    storage.expenses.add(expense)?;
    println!("Recorded expense {} ({} on {})", id, amount, date);

    Ok(())
}

/// Handle `outlay list`
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> OutlayResult<()> {
    let filter = ExpenseFilter {
        category: match args.category {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        },
        from: args.from.as_deref().map(parse_date).transpose()?,
        to: args.to.as_deref().map(parse_date).transpose()?,
        sort: args.sort,
    };

    let view = filter_and_sort(storage.expenses.all(), &filter);
    print!("{}", format_expense_table(&view, settings.theme));

    Ok(())
}

/// Handle `outlay delete`
pub fn handle_delete_command(storage: &mut Storage, id: ExpenseId) -> OutlayResult<()> {
    if storage.expenses.remove(id)? {
        println!("Deleted expense {}", id);
    } else {
        println!("No expense with id {} (nothing deleted)", id);
    }
    Ok(())
}

pub(crate) fn parse_date(s: &str) -> OutlayResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| OutlayError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

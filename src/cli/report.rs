//! CLI commands for reports and spending tips

use clap::Args;

use crate::config::Settings;
use crate::display::{format_insights, format_summary, format_trend};
use crate::error::OutlayResult;
use crate::models::Expense;
use crate::reports::generate_insights;
use crate::storage::Storage;

/// Arguments for `outlay report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Restrict to one month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Also show the cumulative spending trend
    #[arg(short, long)]
    pub trend: bool,
}

/// Handle `outlay report`
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> OutlayResult<()> {
    let snapshot: Vec<Expense> = match &args.month {
        Some(month) => storage
            .expenses
            .all()
            .iter()
            .filter(|e| e.month_key() == *month)
            .cloned()
            .collect(),
        None => storage.expenses.all().to_vec(),
    };

    let today = chrono::Utc::now().date_naive();
    print!("{}", format_summary(&snapshot, settings.budget, today));

    if args.trend {
        println!();
        print!("{}", format_trend(&snapshot, 12));
    }

    Ok(())
}

/// Handle `outlay insights`
pub fn handle_insights_command(storage: &Storage, settings: &Settings) -> OutlayResult<()> {
    let today = chrono::Utc::now().date_naive();
    let insights = generate_insights(storage.expenses.all(), settings.budget, today);
    print!("{}", format_insights(&insights));
    Ok(())
}

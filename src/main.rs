use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use outlay::cli::{
    handle_add_command, handle_budget_command, handle_config_command, handle_delete_command,
    handle_export_command, handle_import_command, handle_insights_command, handle_list_command,
    handle_report_command, AddArgs, BudgetCommands, ConfigArgs, ExportArgs, ImportArgs, ListArgs,
    ReportArgs,
};
use outlay::config::{paths::OutlayPaths, settings::Settings};
use outlay::models::ExpenseId;
use outlay::reports::days_since_last;
use outlay::storage::Storage;

#[derive(Parser)]
#[command(
    name = "outlay",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "outlay is a terminal-based personal expense tracker. Record \
                  expenses, browse and filter them, view aggregate reports and \
                  spending tips, and export your data to CSV, JSON, spreadsheet, \
                  or printable report formats."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses with optional filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete {
        /// Expense id (see `outlay list`)
        id: ExpenseId,
    },

    /// Import expenses from a JSON or CSV file
    Import(ImportArgs),

    /// Export expenses to CSV, JSON, spreadsheet, or report formats
    Export(ExportArgs),

    /// Show the spending summary
    Report(ReportArgs),

    /// Show rule-based spending tips
    Insights,

    /// Budget threshold commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show or change settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = OutlayPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    if settings.reminder_enabled {
        let today = chrono::Utc::now().date_naive();
        if let Some(days) = days_since_last(storage.expenses.all(), today) {
            if days >= 1 {
                eprintln!("Reminder: no expenses logged for {} day(s).", days);
            }
        }
    }

    match cli.command {
        Some(Commands::Add(args)) => {
            handle_add_command(&mut storage, args)?;
        }
        Some(Commands::List(args)) => {
            handle_list_command(&storage, &settings, args)?;
        }
        Some(Commands::Delete { id }) => {
            handle_delete_command(&mut storage, id)?;
        }
        Some(Commands::Import(args)) => {
            handle_import_command(&mut storage, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&storage, &settings, args)?;
        }
        Some(Commands::Insights) => {
            handle_insights_command(&storage, &settings)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut settings, &paths, cmd)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&mut settings, &paths, args)?;
        }
        None => {
            println!("outlay - Terminal-based personal expense tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
            println!("Run 'outlay add <reason> <amount>' to record your first expense.");
        }
    }

    Ok(())
}

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod import;
pub mod report;

pub use budget::{handle_budget_command, handle_config_command, BudgetCommands, ConfigArgs};
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, AddArgs, ListArgs,
};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use import::{handle_import_command, ImportArgs};
pub use report::{handle_insights_command, handle_report_command, ReportArgs};

//! CLI commands for the budget threshold and settings

use clap::{Args, Subcommand, ValueEnum};

use crate::config::{OutlayPaths, Settings, Theme};
use crate::error::{OutlayError, OutlayResult};
use crate::models::Money;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget threshold (0 disables it)
    Set {
        /// Amount, e.g. "500" or "499.99"
        amount: String,
    },
    /// Show the current budget threshold
    Show,
}

/// On/off switch for boolean settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> bool {
        matches!(toggle, Toggle::On)
    }
}

/// Arguments for `outlay config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Switch the terminal theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Enable or disable the logging reminder
    #[arg(long, value_enum)]
    pub reminder: Option<Toggle>,
}

/// Handle `outlay budget`
pub fn handle_budget_command(
    settings: &mut Settings,
    paths: &OutlayPaths,
    cmd: BudgetCommands,
) -> OutlayResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let budget = Money::parse(&amount)
                .map_err(|e| OutlayError::Validation(e.to_string()))?;
            if budget.is_negative() {
                return Err(OutlayError::Validation(
                    "Budget cannot be negative".into(),
                ));
            }

            settings.budget = budget;
            settings.save(paths)?;

            if budget.is_zero() {
                println!("Budget tracking disabled");
            } else {
                println!("Budget set to {}", budget);
            }
        }
        BudgetCommands::Show => {
            if settings.budget.is_zero() {
                println!("No budget set");
            } else {
                println!("Budget: {}", settings.budget);
            }
        }
    }
    Ok(())
}

/// Handle `outlay config`
pub fn handle_config_command(
    settings: &mut Settings,
    paths: &OutlayPaths,
    args: ConfigArgs,
) -> OutlayResult<()> {
    let mut changed = false;

    if let Some(theme) = args.theme {
        settings.theme = theme;
        changed = true;
    }
    if let Some(reminder) = args.reminder {
        settings.reminder_enabled = reminder.into();
        changed = true;
    }

    if changed {
        settings.save(paths)?;
        println!("Settings updated");
    }

    println!("Theme:    {:?}", settings.theme);
    println!(
        "Reminder: {}",
        if settings.reminder_enabled { "on" } else { "off" }
    );
    println!(
        "Budget:   {}",
        if settings.budget.is_zero() {
            "not set".to_string()
        } else {
            settings.budget.to_string()
        }
    );
    println!("Data dir: {}", paths.base_dir().display());

    Ok(())
}

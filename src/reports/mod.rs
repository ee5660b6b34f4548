//! Derived views over the expense collection
//!
//! Everything in this module is a pure function of a record snapshot:
//! filtered/sorted views, category and monthly totals, the cumulative
//! spending series, budget usage, and rule-based insights. Views are
//! recomputed in full on every call; the dataset is personal-scale and
//! caching would only add staleness bugs.

pub mod filter;
pub mod insights;
pub mod totals;

pub use filter::{filter_and_sort, CategoryFilter, ExpenseFilter, SortKey};
pub use insights::{generate_insights, percent_of_budget, Insight, InsightKind};
pub use totals::{
    category_totals, cumulative_series, days_since_last, grand_total, month_key,
    monthly_totals, CumulativePoint, MonthlyTotal,
};

use serde::{Deserialize, Serialize};

/// The four aggregate figures computed from a dataset.
///
/// Serializes to an object with exactly the keys `total_revenue`,
/// `total_expenses`, `total_profit` and `avg_daily_profit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Sum of revenue over all records
    pub total_revenue: f64,

    /// Sum of expenses over all records
    pub total_expenses: f64,

    /// Sum of profit over all records
    pub total_profit: f64,

    /// total_profit / number of records
    pub avg_daily_profit: f64,
}

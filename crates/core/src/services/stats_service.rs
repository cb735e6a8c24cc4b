use crate::errors::CoreError;
use crate::models::dataset::Dataset;
use crate::models::stats::SummaryStats;

/// Reduces a dataset to its summary figures.
///
/// Sums run in dataset order with plain f64 addition, so the totals are
/// exactly what a left-to-right fold over the records gives.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute total revenue, expenses, profit and the average daily profit.
    ///
    /// An empty dataset has no average; it fails with `DivisionByZero`
    /// instead of returning NaN.
    pub fn summarize(&self, dataset: &Dataset) -> Result<SummaryStats, CoreError> {
        if dataset.is_empty() {
            return Err(CoreError::DivisionByZero);
        }

        let mut total_revenue = 0.0;
        let mut total_expenses = 0.0;
        let mut total_profit = 0.0;
        for record in dataset {
            total_revenue += record.revenue;
            total_expenses += record.expenses;
            total_profit += record.profit;
        }

        Ok(SummaryStats {
            total_revenue,
            total_expenses,
            total_profit,
            avg_daily_profit: total_profit / dataset.len() as f64,
        })
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

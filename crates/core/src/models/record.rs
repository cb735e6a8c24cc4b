use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column / key names every record must carry.
pub const FIELD_DATE: &str = "date";
pub const FIELD_REVENUE: &str = "revenue";
pub const FIELD_EXPENSES: &str = "expenses";
pub const FIELD_PROFIT: &str = "profit";

/// All required fields, in the order they are validated.
pub const REQUIRED_FIELDS: [&str; 4] = [FIELD_DATE, FIELD_REVENUE, FIELD_EXPENSES, FIELD_PROFIT];

/// Date format used in both input encodings and on the chart axis.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day's financial observation.
///
/// `profit` is taken as given and is not recomputed from revenue and
/// expenses, even when the input disagrees with `revenue - expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date of the observation (daily granularity)
    pub date: NaiveDate,

    /// Money taken in on this date
    pub revenue: f64,

    /// Money spent on this date
    pub expenses: f64,

    /// Net result on this date
    pub profit: f64,
}

impl Record {
    pub fn new(date: NaiveDate, revenue: f64, expenses: f64, profit: f64) -> Self {
        Self {
            date,
            revenue,
            expenses,
            profit,
        }
    }

    /// Build a record whose profit is `revenue - expenses`.
    pub fn from_margin(date: NaiveDate, revenue: f64, expenses: f64) -> Self {
        Self::new(date, revenue, expenses, revenue - expenses)
    }

    /// The date rendered the way it appears on the chart x-axis.
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

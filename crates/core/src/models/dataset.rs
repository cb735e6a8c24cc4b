use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::Record;

/// Ordered collection of records, exactly as they appeared in the input.
///
/// Records are never re-sorted: charts and sums follow input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Append a record at the end (keeps input order).
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    pub fn revenues(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.revenue).collect()
    }

    pub fn expenses(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.expenses).collect()
    }

    pub fn profits(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.profit).collect()
    }

    /// Whether the dates are in non-decreasing order.
    /// Informational only; nothing in the library sorts a dataset.
    pub fn is_chronological(&self) -> bool {
        self.records.windows(2).all(|w| w[0].date <= w[1].date)
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

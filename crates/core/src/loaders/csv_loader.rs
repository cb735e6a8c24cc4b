use csv::{ReaderBuilder, StringRecord, Trim};

use crate::errors::CoreError;
use crate::models::dataset::Dataset;
use crate::models::record::{Record, FIELD_DATE, FIELD_EXPENSES, FIELD_PROFIT, FIELD_REVENUE};

use super::fields;
use super::traits::{DatasetLoader, SourceFormat};

/// Loader for delimited text with a header row.
///
/// Columns are matched by header name, so column order does not matter
/// and unknown columns are ignored.
pub struct CsvLoader {
    delimiter: u8,
}

impl CsvLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Use a different single-byte field delimiter (e.g., `b';'` or `b'\t'`).
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Position of each required column in the header row.
struct ColumnIndex {
    date: usize,
    revenue: usize,
    expenses: usize,
    profit: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, CoreError> {
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(CoreError::Decode("CSV input has no header row".into()));
        }

        // First match wins on duplicate headers. A missing column is reported
        // against record 0 because every record would lack it.
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| CoreError::missing(name, 0))
        };
        Ok(Self {
            date: position(FIELD_DATE)?,
            revenue: position(FIELD_REVENUE)?,
            expenses: position(FIELD_EXPENSES)?,
            profit: position(FIELD_PROFIT)?,
        })
    }

    fn record_from(&self, row: &StringRecord, index: usize) -> Result<Record, CoreError> {
        let cells = [
            (FIELD_DATE, self.date),
            (FIELD_REVENUE, self.revenue),
            (FIELD_EXPENSES, self.expenses),
            (FIELD_PROFIT, self.profit),
        ];
        // Presence first, then types
        for (name, column) in cells {
            match row.get(column) {
                Some(cell) if !cell.trim().is_empty() => {}
                _ => return Err(CoreError::missing(name, index)),
            }
        }

        let cell = |column: usize| row.get(column).unwrap_or_default();
        Ok(Record {
            date: fields::parse_date(FIELD_DATE, index, cell(self.date))?,
            revenue: fields::parse_amount(FIELD_REVENUE, index, cell(self.revenue))?,
            expenses: fields::parse_amount(FIELD_EXPENSES, index, cell(self.expenses))?,
            profit: fields::parse_amount(FIELD_PROFIT, index, cell(self.profit))?,
        })
    }
}

impl DatasetLoader for CsvLoader {
    fn name(&self) -> &str {
        "CsvLoader"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }

    fn load_from_bytes(&self, data: &[u8]) -> Result<Dataset, CoreError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(data);

        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut dataset = Dataset::default();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            dataset.push(columns.record_from(&row, index)?);
        }

        log::debug!(
            "{}: decoded {} records from {} header columns",
            self.name(),
            dataset.len(),
            headers.len()
        );
        Ok(dataset)
    }
}

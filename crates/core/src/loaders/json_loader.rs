use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::models::dataset::Dataset;
use crate::models::record::{
    Record, FIELD_DATE, FIELD_EXPENSES, FIELD_PROFIT, FIELD_REVENUE, REQUIRED_FIELDS,
};

use super::fields;
use super::traits::{DatasetLoader, SourceFormat};

/// Top-level key holding the record array.
pub const RECORDS_KEY: &str = "records";

/// Loader for JSON documents shaped like
/// `{ "records": [ { "date": ..., "revenue": ..., "expenses": ..., "profit": ... } ] }`.
///
/// Amounts must be JSON numbers; quoted numbers are rejected.
pub struct JsonLoader;

impl JsonLoader {
    pub fn new() -> Self {
        Self
    }

    fn record_from(object: &Map<String, Value>, index: usize) -> Result<Record, CoreError> {
        for name in REQUIRED_FIELDS {
            match object.get(name) {
                None | Some(Value::Null) => return Err(CoreError::missing(name, index)),
                Some(_) => {}
            }
        }

        Ok(Record {
            date: Self::date_field(object, index)?,
            revenue: Self::amount_field(object, FIELD_REVENUE, index)?,
            expenses: Self::amount_field(object, FIELD_EXPENSES, index)?,
            profit: Self::amount_field(object, FIELD_PROFIT, index)?,
        })
    }

    fn date_field(
        object: &Map<String, Value>,
        index: usize,
    ) -> Result<chrono::NaiveDate, CoreError> {
        match object.get(FIELD_DATE) {
            Some(Value::String(s)) => fields::parse_date(FIELD_DATE, index, s),
            Some(other) => Err(CoreError::mismatch(FIELD_DATE, index, other.to_string())),
            None => Err(CoreError::missing(FIELD_DATE, index)),
        }
    }

    fn amount_field(
        object: &Map<String, Value>,
        field: &str,
        index: usize,
    ) -> Result<f64, CoreError> {
        match object.get(field) {
            Some(Value::Number(n)) => {
                let value = n
                    .as_f64()
                    .ok_or_else(|| CoreError::mismatch(field, index, n.to_string()))?;
                fields::check_amount(field, index, value)
            }
            Some(other) => Err(CoreError::mismatch(field, index, other.to_string())),
            None => Err(CoreError::missing(field, index)),
        }
    }
}

impl Default for JsonLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader for JsonLoader {
    fn name(&self) -> &str {
        "JsonLoader"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn load_from_bytes(&self, data: &[u8]) -> Result<Dataset, CoreError> {
        let document: Value = serde_json::from_slice(data)?;

        let root = document.as_object().ok_or_else(|| {
            CoreError::Decode(format!(
                "Expected a JSON object with a top-level '{RECORDS_KEY}' array"
            ))
        })?;
        let entries = root
            .get(RECORDS_KEY)
            .ok_or_else(|| CoreError::Decode(format!("Missing top-level '{RECORDS_KEY}' key")))?
            .as_array()
            .ok_or_else(|| CoreError::Decode(format!("'{RECORDS_KEY}' must be an array")))?;

        let mut dataset = Dataset::default();
        for (index, entry) in entries.iter().enumerate() {
            let object = entry.as_object().ok_or_else(|| {
                CoreError::Decode(format!("Record {index} is not a JSON object"))
            })?;
            dataset.push(Self::record_from(object, index)?);
        }

        log::debug!("{}: decoded {} records", self.name(), dataset.len());
        Ok(dataset)
    }
}

use thiserror::Error;

/// Unified error type for the entire finance-report-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Source / Decoding ───────────────────────────────────────────
    #[error("Data source not readable: {0}")]
    SourceNotFound(String),

    #[error("Failed to decode data source: {0}")]
    Decode(String),

    // ── Record Validation ───────────────────────────────────────────
    #[error("Record {record} is missing required field '{field}'")]
    MissingField { field: String, record: usize },

    #[error("Record {record} has invalid value for '{field}': {value:?}")]
    TypeMismatch {
        field: String,
        record: usize,
        value: String,
    },

    // ── Statistics ──────────────────────────────────────────────────
    #[error("Cannot average an empty dataset (division by zero)")]
    DivisionByZero,

    // ── Configuration / Export ──────────────────────────────────────
    #[error("Invalid report settings: {0}")]
    InvalidSettings(String),

    #[error("Chart export failed: {0}")]
    Export(String),
}

impl CoreError {
    pub(crate) fn missing(field: &str, record: usize) -> Self {
        CoreError::MissingField {
            field: field.to_string(),
            record,
        }
    }

    pub(crate) fn mismatch(field: &str, record: usize, value: impl Into<String>) -> Self {
        CoreError::TypeMismatch {
            field: field.to_string(),
            record,
            value: value.into(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::SourceNotFound(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Decode(e.to_string())
    }
}

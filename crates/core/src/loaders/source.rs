use std::path::PathBuf;

use super::traits::SourceFormat;

/// Where the raw input lives.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceLocation {
    /// A file on disk, read fully before decoding
    File(PathBuf),
    /// Input already held in memory
    Bytes(Vec<u8>),
}

/// A dataset location plus the encoding the caller says it uses.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub location: SourceLocation,
    pub format: SourceFormat,
}

impl DataSource {
    pub fn new(location: SourceLocation, format: SourceFormat) -> Self {
        Self { location, format }
    }

    pub fn csv_file(path: impl Into<PathBuf>) -> Self {
        Self::new(SourceLocation::File(path.into()), SourceFormat::Csv)
    }

    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self::new(SourceLocation::File(path.into()), SourceFormat::Json)
    }

    pub fn csv_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::new(SourceLocation::Bytes(data.into()), SourceFormat::Csv)
    }

    pub fn json_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::new(SourceLocation::Bytes(data.into()), SourceFormat::Json)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            SourceLocation::File(path) => write!(f, "{} file {}", self.format, path.display()),
            SourceLocation::Bytes(data) => {
                write!(f, "{} buffer ({} bytes)", self.format, data.len())
            }
        }
    }
}

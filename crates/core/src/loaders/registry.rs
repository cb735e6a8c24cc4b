use crate::errors::CoreError;
use crate::models::settings::ReportSettings;

use super::csv_loader::CsvLoader;
use super::json_loader::JsonLoader;
use super::traits::{DatasetLoader, SourceFormat};

/// Registry of available dataset loaders, one per `SourceFormat`.
///
/// Routes a load to the loader for the format the caller asked for.
pub struct LoaderRegistry {
    loaders: Vec<Box<dyn DatasetLoader>>,
}

impl LoaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            loaders: Vec::new(),
        }
    }

    /// Create a registry with the CSV and JSON loaders, configured from `settings`.
    /// The settings are validated first.
    pub fn new_with_defaults(settings: &ReportSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        let mut registry = Self::new();
        registry.register(Box::new(CsvLoader::with_delimiter(settings.delimiter_byte()?)));
        registry.register(Box::new(JsonLoader::new()));
        Ok(registry)
    }

    /// Register a loader. Replaces any loader already registered for the same format.
    pub fn register(&mut self, loader: Box<dyn DatasetLoader>) {
        let format = loader.format();
        self.loaders.retain(|l| l.format() != format);
        self.loaders.push(loader);
    }

    /// Find the loader for the given format.
    pub fn get_loader_for(&self, format: SourceFormat) -> Option<&dyn DatasetLoader> {
        self.loaders
            .iter()
            .find(|l| l.format() == format)
            .map(|l| l.as_ref())
    }

    /// Formats that currently have a loader, in registration order.
    pub fn formats(&self) -> Vec<SourceFormat> {
        self.loaders.iter().map(|l| l.format()).collect()
    }
}

impl Default for LoaderRegistry {
    /// CSV (comma-delimited) and JSON loaders.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CsvLoader::new()));
        registry.register(Box::new(JsonLoader::new()));
        registry
    }
}

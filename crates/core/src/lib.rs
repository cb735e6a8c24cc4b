pub mod errors;
pub mod loaders;
pub mod models;
pub mod services;

use std::path::Path;

use loaders::{
    registry::LoaderRegistry,
    source::{DataSource, SourceLocation},
    traits::DatasetLoader,
};
use models::{chart::ChartArtifact, dataset::Dataset, settings::ReportSettings, stats::SummaryStats};
use services::{chart_service::ChartService, stats_service::StatsService};

use errors::CoreError;

/// Result of one analysis: the summary figures and the chart drawn from the same dataset.
#[derive(Debug)]
pub struct Report {
    pub stats: SummaryStats,
    pub chart: ChartArtifact,
}

/// Main entry point for the Finance Report core library.
/// Holds the settings, the loaders and the services needed to build a report.
#[must_use]
pub struct ReportBuilder {
    settings: ReportSettings,
    registry: LoaderRegistry,
    stats_service: StatsService,
    chart_service: ChartService,
}

impl std::fmt::Debug for ReportBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportBuilder")
            .field("settings", &self.settings)
            .field("formats", &self.registry.formats())
            .finish()
    }
}

impl ReportBuilder {
    /// Create a builder with default settings and the CSV and JSON loaders.
    pub fn new() -> Self {
        Self::build(ReportSettings::default(), LoaderRegistry::default())
    }

    /// Create a builder with custom settings. The settings are validated first.
    pub fn with_settings(settings: ReportSettings) -> Result<Self, CoreError> {
        let registry = LoaderRegistry::new_with_defaults(&settings)?;
        Ok(Self::build(settings, registry))
    }

    /// Create a builder from a JSON settings file, or defaults if the file is absent.
    pub fn from_settings_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let settings = ReportSettings::load_or_default(path)?;
        Self::with_settings(settings)
    }

    fn build(settings: ReportSettings, registry: LoaderRegistry) -> Self {
        Self {
            settings,
            registry,
            stats_service: StatsService::new(),
            chart_service: ChartService::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Replace the loader for the format `loader` handles.
    pub fn register_loader(&mut self, loader: Box<dyn DatasetLoader>) {
        self.registry.register(loader);
    }

    // ── Pipeline steps ──────────────────────────────────────────────

    /// Load and validate a dataset with the loader for the source's format.
    pub fn load(&self, source: &DataSource) -> Result<Dataset, CoreError> {
        let loader = self.registry.get_loader_for(source.format).ok_or_else(|| {
            CoreError::Decode(format!("No loader registered for {} input", source.format))
        })?;

        log::debug!("loading {source} with {}", loader.name());
        match &source.location {
            SourceLocation::File(path) => loader.load_from_file(path),
            SourceLocation::Bytes(data) => loader.load_from_bytes(data),
        }
    }

    /// Compute the summary figures for an already loaded dataset.
    pub fn summarize(&self, dataset: &Dataset) -> Result<SummaryStats, CoreError> {
        self.stats_service.summarize(dataset)
    }

    /// Render the chart for an already loaded dataset.
    pub fn render_chart(&self, dataset: &Dataset) -> Result<ChartArtifact, CoreError> {
        self.chart_service.render(dataset, &self.settings)
    }

    // ── Analysis ────────────────────────────────────────────────────

    /// Summarize and chart a dataset. Fails before drawing anything if the
    /// dataset cannot be summarized.
    pub fn analyze_dataset(&self, dataset: &Dataset) -> Result<Report, CoreError> {
        let stats = self.summarize(dataset)?;
        let chart = self.render_chart(dataset)?;
        Ok(Report { stats, chart })
    }

    /// Load `source`, summarize it and chart it.
    ///
    /// The whole call fails on the first problem found; nothing is retried
    /// and no partial report is returned. The chart is neither saved nor shown.
    pub fn analyze(&self, source: &DataSource) -> Result<Report, CoreError> {
        let dataset = self.load(source)?;
        let report = self.analyze_dataset(&dataset)?;
        log::info!(
            "analyzed {source}: {} records, total profit {:.2}, avg daily profit {:.2}",
            dataset.len(),
            report.stats.total_profit,
            report.stats.avg_daily_profit
        );
        Ok(report)
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a CSV file with default settings.
pub fn analyze_csv(path: impl AsRef<Path>) -> Result<Report, CoreError> {
    ReportBuilder::new().analyze(&DataSource::csv_file(path.as_ref()))
}

/// Analyze a JSON `records` document with default settings.
pub fn analyze_json(path: impl AsRef<Path>) -> Result<Report, CoreError> {
    ReportBuilder::new().analyze(&DataSource::json_file(path.as_ref()))
}

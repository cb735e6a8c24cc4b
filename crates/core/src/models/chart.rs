use std::path::Path;

use chrono::NaiveDate;
use plotly::Plot;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Marker drawn at every point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    Circle,
    Square,
    TriangleUp,
}

impl std::fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerShape::Circle => write!(f, "circle"),
            MarkerShape::Square => write!(f, "square"),
            MarkerShape::TriangleUp => write!(f, "triangle-up"),
        }
    }
}

/// A single (date, amount) point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One line of the chart.
///
/// Points are kept in dataset order; a dataset with unsorted dates
/// produces a line that follows input order, not calendar order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label (e.g., "Profit")
    pub label: String,

    /// Marker shape, distinct per series
    pub marker: MarkerShape,

    /// Data points in dataset order
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }
}

/// The rendered figure: the series that were drawn plus the plotly figure itself.
///
/// Nothing here is written to disk unless the caller asks for it.
pub struct ChartArtifact {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// Counter-clockwise rotation of the x tick labels, in degrees
    pub tick_angle: f64,

    /// Series in drawing order: profit, revenue, expenses
    pub series: Vec<ChartSeries>,

    plot: Plot,
}

impl std::fmt::Debug for ChartArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartArtifact")
            .field("title", &self.title)
            .field("x_label", &self.x_label)
            .field("y_label", &self.y_label)
            .field("tick_angle", &self.tick_angle)
            .field(
                "series",
                &self
                    .series
                    .iter()
                    .map(|s| (s.label.as_str(), s.points.len()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ChartArtifact {
    pub(crate) fn new(
        title: String,
        x_label: String,
        y_label: String,
        tick_angle: f64,
        series: Vec<ChartSeries>,
        plot: Plot,
    ) -> Self {
        Self {
            title,
            x_label,
            y_label,
            tick_angle,
            series,
            plot,
        }
    }

    /// Find a series by its legend label (case-insensitive).
    pub fn series_by_label(&self, label: &str) -> Option<&ChartSeries> {
        self.series
            .iter()
            .find(|s| s.label.eq_ignore_ascii_case(label))
    }

    /// The underlying plotly figure.
    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    pub fn into_plot(self) -> Plot {
        self.plot
    }

    /// Figure as plotly JSON (traces + layout).
    pub fn to_json(&self) -> String {
        self.plot.to_json()
    }

    /// Figure as a standalone HTML page.
    pub fn to_html(&self) -> String {
        self.plot.to_html()
    }

    /// Write the standalone HTML page to `path`.
    pub fn write_html(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_html())
            .map_err(|e| CoreError::Export(format!("{}: {e}", path.display())))?;
        log::debug!("chart written to {}", path.display());
        Ok(())
    }
}

use plotly::common::{Marker, MarkerSymbol, Mode};
use plotly::layout::{Axis, AxisType, Layout, Legend};
use plotly::{Plot, Scatter};

use crate::errors::CoreError;
use crate::models::chart::{ChartArtifact, ChartPoint, ChartSeries, MarkerShape};
use crate::models::dataset::Dataset;
use crate::models::record::Record;
use crate::models::settings::ReportSettings;

/// Renders the daily performance chart for a dataset.
///
/// Three line series are drawn against the record dates:
/// - Profit (circle markers)
/// - Revenue (square markers)
/// - Expenses (triangle markers)
///
/// The x-axis is categorical, so points sit in dataset order even when
/// the dates themselves are out of order.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the series for `dataset` in drawing order.
    pub fn build_series(&self, dataset: &Dataset) -> Vec<ChartSeries> {
        vec![
            series_of(dataset, "Profit", MarkerShape::Circle, |r| r.profit),
            series_of(dataset, "Revenue", MarkerShape::Square, |r| r.revenue),
            series_of(dataset, "Expenses", MarkerShape::TriangleUp, |r| r.expenses),
        ]
    }

    /// Render the full chart: series, title, axis labels, legend and rotated date ticks.
    pub fn render(
        &self,
        dataset: &Dataset,
        settings: &ReportSettings,
    ) -> Result<ChartArtifact, CoreError> {
        settings.validate()?;

        let series = self.build_series(dataset);
        let x_labels: Vec<String> = dataset.iter().map(|r| r.date_label()).collect();

        let mut plot = Plot::new();
        for s in &series {
            plot.add_trace(
                Scatter::new(x_labels.clone(), s.values())
                    .name(s.label.as_str())
                    .mode(Mode::LinesMarkers)
                    .marker(Marker::new().symbol(marker_symbol(s.marker))),
            );
        }

        // plotly rotates ticks clockwise for positive angles
        let layout = Layout::new()
            .title(settings.title.as_str())
            .x_axis(
                Axis::new()
                    .title(settings.x_label.as_str())
                    .type_(AxisType::Category)
                    .tick_angle(-settings.tick_angle),
            )
            .y_axis(Axis::new().title(settings.y_label.as_str()))
            .show_legend(true)
            .legend(Legend::new())
            .width(settings.width)
            .height(settings.height);
        plot.set_layout(layout);

        log::debug!(
            "rendered chart '{}' with {} series of {} points",
            settings.title,
            series.len(),
            dataset.len()
        );

        Ok(ChartArtifact::new(
            settings.title.clone(),
            settings.x_label.clone(),
            settings.y_label.clone(),
            settings.tick_angle,
            series,
            plot,
        ))
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

fn series_of(
    dataset: &Dataset,
    label: &str,
    marker: MarkerShape,
    value: fn(&Record) -> f64,
) -> ChartSeries {
    ChartSeries {
        label: label.to_string(),
        marker,
        points: dataset
            .iter()
            .map(|r| ChartPoint {
                date: r.date,
                value: value(r),
            })
            .collect(),
    }
}

fn marker_symbol(shape: MarkerShape) -> MarkerSymbol {
    match shape {
        MarkerShape::Circle => MarkerSymbol::Circle,
        MarkerShape::Square => MarkerSymbol::Square,
        MarkerShape::TriangleUp => MarkerSymbol::TriangleUp,
    }
}

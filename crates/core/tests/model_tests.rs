// ═══════════════════════════════════════════════════════════════════
// Model Tests — Record, Dataset, SummaryStats, ReportSettings, chart types
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use finance_report_core::errors::CoreError;
use finance_report_core::models::chart::{ChartPoint, ChartSeries, MarkerShape};
use finance_report_core::models::dataset::Dataset;
use finance_report_core::models::record::{Record, REQUIRED_FIELDS};
use finance_report_core::models::settings::ReportSettings;
use finance_report_core::models::stats::SummaryStats;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ── Record ──────────────────────────────────────────────────────────

mod record {
    use super::*;

    #[test]
    fn new_keeps_profit_as_given() {
        let r = Record::new(d(2024, 1, 1), 100.0, 40.0, 75.0);
        assert_eq!(r.profit, 75.0);
    }

    #[test]
    fn from_margin_derives_profit() {
        let r = Record::from_margin(d(2024, 1, 1), 100.0, 40.0);
        assert_eq!(r.profit, 60.0);
    }

    #[test]
    fn date_label_is_iso() {
        let r = Record::new(d(2024, 3, 7), 0.0, 0.0, 0.0);
        assert_eq!(r.date_label(), "2024-03-07");
    }

    #[test]
    fn required_fields_order() {
        assert_eq!(REQUIRED_FIELDS, ["date", "revenue", "expenses", "profit"]);
    }

    #[test]
    fn serde_roundtrip_json() {
        let r = Record::new(d(2024, 1, 2), 200.0, 90.0, 110.0);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"date\":\"2024-01-02\""));
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}

// ── Dataset ─────────────────────────────────────────────────────────

mod dataset {
    use super::*;

    fn unsorted() -> Dataset {
        Dataset::new(vec![
            Record::new(d(2024, 1, 3), 30.0, 10.0, 20.0),
            Record::new(d(2024, 1, 1), 10.0, 5.0, 5.0),
            Record::new(d(2024, 1, 2), 20.0, 8.0, 12.0),
        ])
    }

    #[test]
    fn default_is_empty() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
    }

    #[test]
    fn columns_follow_input_order() {
        let ds = unsorted();
        assert_eq!(ds.dates(), vec![d(2024, 1, 3), d(2024, 1, 1), d(2024, 1, 2)]);
        assert_eq!(ds.revenues(), vec![30.0, 10.0, 20.0]);
        assert_eq!(ds.expenses(), vec![10.0, 5.0, 8.0]);
        assert_eq!(ds.profits(), vec![20.0, 5.0, 12.0]);
    }

    #[test]
    fn is_chronological_detects_unsorted() {
        assert!(!unsorted().is_chronological());
    }

    #[test]
    fn is_chronological_accepts_repeated_dates() {
        let ds = Dataset::new(vec![
            Record::new(d(2024, 1, 1), 1.0, 1.0, 0.0),
            Record::new(d(2024, 1, 1), 1.0, 1.0, 0.0),
            Record::new(d(2024, 1, 2), 1.0, 1.0, 0.0),
        ]);
        assert!(ds.is_chronological());
    }

    #[test]
    fn push_appends_at_end() {
        let mut ds = unsorted();
        ds.push(Record::new(d(2023, 12, 31), 1.0, 1.0, 0.0));
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.records.last().unwrap().date, d(2023, 12, 31));
    }

    #[test]
    fn from_vec_and_iterate() {
        let ds: Dataset = vec![Record::new(d(2024, 1, 1), 1.0, 2.0, 3.0)].into();
        let profits: Vec<f64> = (&ds).into_iter().map(|r| r.profit).collect();
        assert_eq!(profits, vec![3.0]);
    }
}

// ── SummaryStats ────────────────────────────────────────────────────

mod summary_stats {
    use super::*;

    #[test]
    fn serializes_exactly_four_keys() {
        let stats = SummaryStats {
            total_revenue: 300.0,
            total_expenses: 130.0,
            total_profit: 170.0,
            avg_daily_profit: 85.0,
        };
        let value = serde_json::to_value(stats).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["total_revenue"], 300.0);
        assert_eq!(object["total_expenses"], 130.0);
        assert_eq!(object["total_profit"], 170.0);
        assert_eq!(object["avg_daily_profit"], 85.0);
    }
}

// ── ReportSettings ──────────────────────────────────────────────────

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = ReportSettings::default();
        assert_eq!(s.title, "Daily Financial Performance");
        assert_eq!(s.x_label, "Date");
        assert_eq!(s.y_label, "Amount ($)");
        assert_eq!((s.width, s.height), (1000, 600));
        assert_eq!(s.tick_angle, 45.0);
        assert_eq!(s.csv_delimiter, ',');
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = ReportSettings::from_json_str(r#"{"title": "Q1", "csv_delimiter": ";"}"#).unwrap();
        assert_eq!(s.title, "Q1");
        assert_eq!(s.csv_delimiter, ';');
        assert_eq!(s.delimiter_byte().unwrap(), b';');
        assert_eq!(s.y_label, "Amount ($)");
    }

    #[test]
    fn malformed_json_is_invalid_settings() {
        let err = ReportSettings::from_json_str("{ title").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn zero_width_rejected() {
        let err = ReportSettings::from_json_str(r#"{"width": 0}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn tick_angle_out_of_range_rejected() {
        let s = ReportSettings {
            tick_angle: 120.0,
            ..ReportSettings::default()
        };
        assert!(matches!(s.validate(), Err(CoreError::InvalidSettings(_))));
    }

    #[test]
    fn non_ascii_delimiter_rejected() {
        let s = ReportSettings {
            csv_delimiter: '§',
            ..ReportSettings::default()
        };
        assert!(matches!(s.validate(), Err(CoreError::InvalidSettings(_))));
    }

    #[test]
    fn non_ascii_delimiter_is_not_truncated_to_a_byte() {
        let s = ReportSettings {
            csv_delimiter: 'é',
            ..ReportSettings::default()
        };
        assert!(matches!(s.delimiter_byte(), Err(CoreError::InvalidSettings(_))));
    }

    #[test]
    fn quote_delimiter_rejected() {
        let s = ReportSettings {
            csv_delimiter: '"',
            ..ReportSettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let s = ReportSettings::load_or_default(dir.path().join("absent.json")).unwrap();
        assert_eq!(s, ReportSettings::default());
    }

    #[test]
    fn from_file_reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"height": 480, "tick_angle": 30}"#).unwrap();
        let s = ReportSettings::load_or_default(&path).unwrap();
        assert_eq!(s.height, 480);
        assert_eq!(s.tick_angle, 30.0);
    }

    #[test]
    fn from_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReportSettings::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }
}

// ── Chart model ─────────────────────────────────────────────────────

mod chart_model {
    use super::*;

    #[test]
    fn marker_shape_display() {
        assert_eq!(MarkerShape::Circle.to_string(), "circle");
        assert_eq!(MarkerShape::Square.to_string(), "square");
        assert_eq!(MarkerShape::TriangleUp.to_string(), "triangle-up");
    }

    #[test]
    fn series_accessors_keep_order() {
        let series = ChartSeries {
            label: "Profit".into(),
            marker: MarkerShape::Circle,
            points: vec![
                ChartPoint { date: d(2024, 1, 2), value: 2.0 },
                ChartPoint { date: d(2024, 1, 1), value: 1.0 },
            ],
        };
        assert_eq!(series.values(), vec![2.0, 1.0]);
        assert_eq!(series.dates(), vec![d(2024, 1, 2), d(2024, 1, 1)]);
    }
}

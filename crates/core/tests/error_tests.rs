// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_report_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn source_not_found() {
        let err = CoreError::SourceNotFound("data.csv: No such file".into());
        assert_eq!(
            err.to_string(),
            "Data source not readable: data.csv: No such file"
        );
    }

    #[test]
    fn decode() {
        let err = CoreError::Decode("unexpected EOF".into());
        assert_eq!(err.to_string(), "Failed to decode data source: unexpected EOF");
    }

    #[test]
    fn missing_field() {
        let err = CoreError::MissingField {
            field: "profit".into(),
            record: 3,
        };
        assert_eq!(
            err.to_string(),
            "Record 3 is missing required field 'profit'"
        );
    }

    #[test]
    fn type_mismatch_quotes_value() {
        let err = CoreError::TypeMismatch {
            field: "revenue".into(),
            record: 1,
            value: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "Record 1 has invalid value for 'revenue': \"abc\""
        );
    }

    #[test]
    fn division_by_zero() {
        let err = CoreError::DivisionByZero;
        assert_eq!(
            err.to_string(),
            "Cannot average an empty dataset (division by zero)"
        );
    }

    #[test]
    fn invalid_settings() {
        let err = CoreError::InvalidSettings("width is zero".into());
        assert_eq!(err.to_string(), "Invalid report settings: width is zero");
    }

    #[test]
    fn export() {
        let err = CoreError::Export("disk full".into());
        assert_eq!(err.to_string(), "Chart export failed: disk full");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn io_error_becomes_source_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CoreError = io.into();
        match err {
            CoreError::SourceNotFound(msg) => assert_eq!(msg, "gone"),
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn permission_denied_is_also_source_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::SourceNotFound(_)));
    }

    #[test]
    fn serde_json_error_becomes_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Decode(_)));
    }

    #[test]
    fn csv_error_becomes_decode() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(&b"a,b\n\xff\xfe,1\n"[..]);
        let csv_err = reader.records().next().unwrap().unwrap_err();
        let err: CoreError = csv_err.into();
        assert!(matches!(err, CoreError::Decode(_)));
    }

    #[test]
    fn errors_are_debug_printable() {
        let err = CoreError::DivisionByZero;
        assert_eq!(format!("{err:?}"), "DivisionByZero");
    }
}

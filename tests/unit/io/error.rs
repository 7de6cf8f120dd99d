//! Tests for error message formatting and source chaining

#[cfg(test)]
mod tests {
    use citygrid::LayoutError;
    use std::error::Error;

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = LayoutError::FileSystem {
            path: "/tmp/out/grid.png".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("/tmp/out/grid.png"));
    }

    #[test]
    fn test_invalid_parameter_error() {
        let error = LayoutError::InvalidParameter {
            parameter: "cell_size",
            value: "-1".to_string(),
            reason: "must be a finite positive number".to_string(),
        };

        assert!(error.source().is_none());
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'cell_size' = '-1': must be a finite positive number"
        );
    }
}

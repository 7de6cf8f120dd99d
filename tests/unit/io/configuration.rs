//! Tests for grid configuration defaults and validation

#[cfg(test)]
mod tests {
    use citygrid::io::configuration::{
        DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_DIMENSION,
        STRICT_CHECKS_DEFAULT,
    };
    use citygrid::{GridConfig, LayoutError};

    #[test]
    fn test_default_config_is_valid() {
        let config = GridConfig::default();

        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert!((config.cell_size - DEFAULT_CELL_SIZE).abs() < f32::EPSILON);
        assert_eq!(config.strict_checks, STRICT_CHECKS_DEFAULT);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_debug_builds_default_to_strict_checks() {
        assert!(STRICT_CHECKS_DEFAULT);
    }

    #[test]
    fn test_with_strict_checks_overrides_mode() {
        let config = GridConfig::new(4, 4, 1.0).with_strict_checks(false);
        assert!(!config.strict_checks);
    }

    #[test]
    fn test_dimensions_are_bounded() {
        let zero_height = GridConfig::new(4, 0, 1.0).validate();
        assert!(matches!(
            zero_height,
            Err(LayoutError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));

        let oversize = GridConfig::new(MAX_GRID_DIMENSION + 1, 4, 1.0).validate();
        assert!(matches!(
            oversize,
            Err(LayoutError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));

        assert!(GridConfig::new(MAX_GRID_DIMENSION, 1, 1.0).validate().is_ok());
    }

    #[test]
    fn test_cell_size_must_be_finite_and_positive() {
        for cell_size in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let result = GridConfig::new(4, 4, cell_size).validate();
            assert!(
                matches!(
                    result,
                    Err(LayoutError::InvalidParameter {
                        parameter: "cell_size",
                        ..
                    })
                ),
                "cell size {cell_size} should be rejected"
            );
        }
    }
}

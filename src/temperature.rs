//! Temperature conversion
//!
//! Celsius, Fahrenheit, and Kelvin relate through an affine transform,
//! so they cannot live in the factor tables. Conversion pivots through
//! Celsius: normalize the input to Celsius, then denormalize to the
//! target scale.

use crate::ConversionError;

/// Temperature unit symbols, lowercase
const TEMPERATURE_UNITS: [&str; 3] = ["c", "f", "k"];

/// Check whether a symbol names a temperature unit (case-insensitive)
pub fn is_temperature_unit(symbol: &str) -> bool {
    TEMPERATURE_UNITS.contains(&symbol.to_lowercase().as_str())
}

/// Convert a value between Celsius ("c"), Fahrenheit ("f"), and Kelvin ("k").
///
/// Symbols are case-insensitive. The function validates its own inputs:
/// any other symbol fails with [`ConversionError::UnrecognizedUnit`],
/// whether or not the caller checked membership beforehand.
pub fn convert_temperature(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let from_unit = from_unit.to_lowercase();
    let to_unit = to_unit.to_lowercase();

    let celsius = match from_unit.as_str() {
        "c" => value,
        "f" => (value - 32.0) * 5.0 / 9.0,
        "k" => value - 273.15,
        _ => return Err(ConversionError::UnrecognizedUnit(from_unit)),
    };

    match to_unit.as_str() {
        "c" => Ok(celsius),
        "f" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "k" => Ok(celsius + 273.15),
        _ => Err(ConversionError::UnrecognizedUnit(to_unit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_is_temperature_unit() {
        assert!(is_temperature_unit("c"));
        assert!(is_temperature_unit("f"));
        assert!(is_temperature_unit("k"));
        assert!(is_temperature_unit("K"));
        assert!(!is_temperature_unit("m"));
        assert!(!is_temperature_unit(""));
    }

    #[test]
    fn test_freezing_point() {
        assert_eq!(convert_temperature(0.0, "c", "f").unwrap(), 32.0);
        assert_eq!(convert_temperature(32.0, "f", "c").unwrap(), 0.0);
        assert_eq!(convert_temperature(0.0, "c", "k").unwrap(), 273.15);
    }

    #[test]
    fn test_boiling_point() {
        assert_relative_eq!(
            convert_temperature(212.0, "f", "c").unwrap(),
            100.0,
            max_relative = 1e-9
        );
        assert_eq!(convert_temperature(100.0, "c", "f").unwrap(), 212.0);
    }

    #[test]
    fn test_absolute_zero() {
        assert_eq!(convert_temperature(0.0, "k", "c").unwrap(), -273.15);
        assert_relative_eq!(
            convert_temperature(0.0, "k", "f").unwrap(),
            -459.67,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        assert_relative_eq!(
            convert_temperature(32.0, "f", "k").unwrap(),
            273.15,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_identity() {
        assert_eq!(convert_temperature(37.5, "c", "c").unwrap(), 37.5);
        assert_eq!(convert_temperature(98.6, "f", "f").unwrap(), 98.6);
        assert_eq!(convert_temperature(310.15, "k", "k").unwrap(), 310.15);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            convert_temperature(0.0, "C", "F").unwrap(),
            convert_temperature(0.0, "c", "f").unwrap()
        );
    }

    #[test]
    fn test_unrecognized_from_unit() {
        let err = convert_temperature(0.0, "r", "c").unwrap_err();
        assert_eq!(err, ConversionError::UnrecognizedUnit("r".to_string()));
    }

    #[test]
    fn test_unrecognized_to_unit() {
        let err = convert_temperature(0.0, "c", "rankine").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnrecognizedUnit("rankine".to_string())
        );
    }
}

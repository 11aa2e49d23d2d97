//! The conversion entry point

use crate::temperature::{convert_temperature, is_temperature_unit};
use crate::units::UNITS;
use crate::ConversionError;

/// Convert `value` from `from_unit` to `to_unit`.
///
/// Both symbols are lowercased before any comparison, so "KM" and "km"
/// are equivalent. A pair of temperature symbols takes the affine path;
/// any other pair must resolve to two units of the same category and
/// converts through the category base unit as
/// `value * factor(from) / factor(to)`.
///
/// Fails with [`ConversionError::Unsupported`] when no category contains
/// both units — unknown symbols and pairs from two different categories
/// produce the same error. Results carry ordinary floating-point
/// representation error; no rounding is applied.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from_unit = from_unit.to_lowercase();
    let to_unit = to_unit.to_lowercase();

    if is_temperature_unit(&from_unit) && is_temperature_unit(&to_unit) {
        return convert_temperature(value, &from_unit, &to_unit);
    }

    match (UNITS.get(&from_unit), UNITS.get(&to_unit)) {
        (Some(from), Some(to)) if from.is_compatible(to) => {
            Ok(value * from.factor / to.factor)
        }
        _ => Err(ConversionError::Unsupported {
            from: from_unit,
            to: to_unit,
        }),
    }
}

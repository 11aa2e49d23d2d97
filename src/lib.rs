//! Unitconv - Unit Conversion for Common Physical Quantities
//!
//! Converts numeric values between units of the same category through a
//! per-category base unit and multiplicative factors. Temperature is the
//! exception: Celsius, Fahrenheit, and Kelvin relate through an affine
//! transform and convert via Celsius as the pivot.
//!
//! Categories:
//! - Distance (m, km, mi, ft, etc.) — base meter
//! - Mass (g, kg, lb, oz, etc.) — base gram
//! - Volume (l, ml, gal, cup, etc.) — base liter
//! - Duration (s, min, h, week, etc.) — base second
//! - Energy (j, kj, kwh, cal, etc.) — base joule
//! - Temperature (c, f, k) — affine, via Celsius
//!
//! All symbols are case-insensitive. The unit tables are built once at
//! first use and never mutated afterwards, so the registry is safe to
//! read from any number of threads.

mod category;
mod convert;
mod temperature;
mod unit;
mod units;

pub use category::Category;
pub use convert::convert;
pub use temperature::{convert_temperature, is_temperature_unit};
pub use unit::{ConversionError, Unit};
pub use units::{UnitRegistry, UNITS};

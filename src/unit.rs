//! Unit representation and conversion errors

use crate::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A unit of measurement with its conversion factor.
///
/// The factor expresses one of this unit in terms of the base unit of
/// its category (km carries 1000.0 because 1 km = 1000 m). Factors are
/// strictly positive; the base unit of each category carries exactly 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol, lowercase (e.g. "m", "kg", "kwh")
    pub symbol: String,
    /// The unit name (e.g. "meter", "kilogram", "kilowatt-hour")
    pub name: String,
    /// The category this unit belongs to
    pub category: Category,
    /// Factor to the category base unit
    pub factor: f64,
}

impl Unit {
    /// Create a new unit
    pub fn new(symbol: &str, name: &str, category: Category, factor: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            category,
            factor,
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }

    /// Check if two units belong to the same category (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// No supported category contains both units. Unknown symbols and
    /// pairs from two different categories produce this same error.
    #[error("conversion impossible between {from} and {to}")]
    Unsupported { from: String, to: String },

    /// A symbol outside c/f/k reached the temperature converter
    #[error("unrecognized temperature unit: {0}")]
    UnrecognizedUnit(String),
}

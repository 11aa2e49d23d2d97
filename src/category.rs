//! Category identifiers for convertible units

use serde::{Deserialize, Serialize};
use std::fmt;

/// The categories of units this library converts between.
///
/// Units within one category share a base unit and convert through
/// multiplicative factors. `Temperature` is the exception: its units
/// relate through an affine transform and carry no factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Distance,
    Mass,
    Volume,
    Duration,
    Energy,
    Temperature,
}

impl Category {
    /// Symbol of the base unit of this category.
    ///
    /// For the multiplicative categories this is the unit with factor
    /// 1.0. Temperature has no factor; Celsius is the pivot of its
    /// affine conversion.
    pub fn base_symbol(&self) -> &'static str {
        match self {
            Category::Distance => "m",
            Category::Mass => "g",
            Category::Volume => "l",
            Category::Duration => "s",
            Category::Energy => "j",
            Category::Temperature => "c",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Distance => "distance",
            Category::Mass => "mass",
            Category::Volume => "volume",
            Category::Duration => "duration",
            Category::Energy => "energy",
            Category::Temperature => "temperature",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Category::Distance.to_string(), "distance");
        assert_eq!(Category::Energy.to_string(), "energy");
        assert_eq!(Category::Temperature.to_string(), "temperature");
    }

    #[test]
    fn test_base_symbol() {
        assert_eq!(Category::Distance.base_symbol(), "m");
        assert_eq!(Category::Mass.base_symbol(), "g");
        assert_eq!(Category::Volume.base_symbol(), "l");
        assert_eq!(Category::Duration.base_symbol(), "s");
        assert_eq!(Category::Energy.base_symbol(), "j");
        assert_eq!(Category::Temperature.base_symbol(), "c");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Duration).unwrap();
        assert_eq!(json, "\"duration\"");

        let back: Category = serde_json::from_str("\"mass\"").unwrap();
        assert_eq!(back, Category::Mass);
    }
}

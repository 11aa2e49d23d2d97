//! Unit definitions - the five fixed conversion tables

use crate::{Category, Unit};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all units with a multiplicative conversion factor.
///
/// One merged symbol-to-unit map; the five category tables have pairwise
/// disjoint symbols, so each unit keeps its category tag and conversion
/// stays a category-equality check. Temperature units are not listed
/// here: they convert through an affine transform and are handled by the
/// `temperature` module.
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
        };
        registry.register_distance_units();
        registry.register_mass_units();
        registry.register_volume_units();
        registry.register_duration_units();
        registry.register_energy_units();
        registry
    }

    /// Get a unit by its lowercase symbol
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        self.units.get(symbol)
    }

    /// Get all units in a category
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units
            .values()
            .filter(|u| u.category == category)
            .collect()
    }

    /// Get all unit symbols
    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn register_distance_units(&mut self) {
        self.register(Unit::new("m", "meter", Category::Distance, 1.0));
        self.register(Unit::new("km", "kilometer", Category::Distance, 1000.0));
        self.register(Unit::new("cm", "centimeter", Category::Distance, 0.01));
        self.register(Unit::new("mm", "millimeter", Category::Distance, 0.001));
        self.register(Unit::new("mi", "mile", Category::Distance, 1609.34));
        self.register(Unit::new("yd", "yard", Category::Distance, 0.9144));
        self.register(Unit::new("ft", "foot", Category::Distance, 0.3048));
        self.register(Unit::new("in", "inch", Category::Distance, 0.0254));
    }

    fn register_mass_units(&mut self) {
        self.register(Unit::new("g", "gram", Category::Mass, 1.0));
        self.register(Unit::new("kg", "kilogram", Category::Mass, 1000.0));
        self.register(Unit::new("t", "tonne", Category::Mass, 1_000_000.0));
        self.register(Unit::new("lb", "pound", Category::Mass, 453.592));
        self.register(Unit::new("oz", "ounce", Category::Mass, 28.3495));
    }

    fn register_volume_units(&mut self) {
        self.register(Unit::new("l", "liter", Category::Volume, 1.0));
        self.register(Unit::new("ml", "milliliter", Category::Volume, 0.001));
        self.register(Unit::new("cl", "centiliter", Category::Volume, 0.01));
        self.register(Unit::new("gal", "gallon", Category::Volume, 3.78541));
        self.register(Unit::new("qt", "quart", Category::Volume, 0.946353));
        self.register(Unit::new("pt", "pint", Category::Volume, 0.473176));
        self.register(Unit::new("cup", "cup", Category::Volume, 0.24));
        self.register(Unit::new("floz", "fluid ounce", Category::Volume, 0.0295735));
    }

    fn register_duration_units(&mut self) {
        self.register(Unit::new("s", "second", Category::Duration, 1.0));
        self.register(Unit::new("min", "minute", Category::Duration, 60.0));
        self.register(Unit::new("h", "hour", Category::Duration, 3600.0));
        self.register(Unit::new("d", "day", Category::Duration, 86400.0));
        self.register(Unit::new("week", "week", Category::Duration, 604_800.0));
        self.register(Unit::new("month", "month", Category::Duration, 2_629_746.0)); // average
        self.register(Unit::new("year", "year", Category::Duration, 31_556_952.0)); // average
    }

    fn register_energy_units(&mut self) {
        self.register(Unit::new("j", "joule", Category::Energy, 1.0));
        self.register(Unit::new("kj", "kilojoule", Category::Energy, 1000.0));
        self.register(Unit::new("kwh", "kilowatt-hour", Category::Energy, 3_600_000.0));
        self.register(Unit::new("cal", "calorie", Category::Energy, 4.184));
        self.register(Unit::new("kcal", "kilocalorie", Category::Energy, 4184.0));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

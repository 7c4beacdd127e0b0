use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Unit of a package weight. Exactly two tokens are recognized
/// (case-insensitive): `"g"` and `"kg"`. Anything else is unparseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Gram,
    Kilogram,
}

impl FromStr for WeightUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("g") {
            Ok(WeightUnit::Gram)
        } else if s.eq_ignore_ascii_case("kg") {
            Ok(WeightUnit::Kilogram)
        } else {
            Err(CoreError::UnrecognizedUnit(s.to_owned()))
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::Gram => write!(f, "g"),
            WeightUnit::Kilogram => write!(f, "kg"),
        }
    }
}

/// A parsed package weight, e.g. `250 g` or `1.5 kg`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Weight {
    #[must_use]
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        Weight { value, unit }
    }

    /// Weight expressed in kilograms, the basis for price-per-kg math.
    #[must_use]
    pub fn kilograms(&self) -> f64 {
        match self.unit {
            WeightUnit::Kilogram => self.value,
            WeightUnit::Gram => self.value / 1000.0,
        }
    }
}

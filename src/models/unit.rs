use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

pub const ML_PER_LITER: f64 = 1000.0;
pub const ML_PER_OUNCE: f64 = 29.5735295625;

/// Display unit. Storage is always integral milliliters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Unit {
    #[serde(rename = "ml")]
    Milliliter,
    #[default]
    #[serde(rename = "liters")]
    Liter,
    #[serde(rename = "oz")]
    Ounce,
}

impl Unit {
    /// Storage label, as written in the settings record.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Milliliter => "ml",
            Unit::Liter => "liters",
            Unit::Ounce => "oz",
        }
    }

    /// Exact storage label → enum
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "ml" => Some(Unit::Milliliter),
            "liters" => Some(Unit::Liter),
            "oz" => Some(Unit::Ounce),
            _ => None,
        }
    }

    /// Milliliters in one display unit.
    pub fn ml_factor(&self) -> f64 {
        match self {
            Unit::Milliliter => 1.0,
            Unit::Liter => ML_PER_LITER,
            Unit::Ounce => ML_PER_OUNCE,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lenient parser for CLI input (case-insensitive, common aliases).
impl FromStr for Unit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(Unit::Milliliter)
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Ok(Unit::Liter),
            "oz" | "ounce" | "ounces" => Ok(Unit::Ounce),
            other => Err(AppError::InvalidUnit(other.to_string())),
        }
    }
}

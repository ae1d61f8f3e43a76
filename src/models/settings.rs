use serde::{Deserialize, Serialize};

use crate::models::unit::Unit;

pub const DEFAULT_GOAL_ML: u32 = 2000;
pub const DEFAULT_INCREMENT_ML: u32 = 250;

/// Persisted tracker settings. All quantities are integral milliliters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub unit: Unit,
    pub goal_ml: u32,
    /// Always >= 1.
    pub increment_ml: u32,
    pub current_ml: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit: Unit::Liter,
            goal_ml: DEFAULT_GOAL_ML,
            increment_ml: DEFAULT_INCREMENT_ML,
            current_ml: 0,
        }
    }
}

/// Values used to populate the settings form, expressed in the active unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub unit: Unit,
    pub goal: String,
    pub increment: String,
}

//! Formula constants configuration

use serde::{Deserialize, Serialize};

/// Tunable constants of the damage formula
///
/// Defaults reproduce the live game values; overriding them in a TOML file
/// lets balance experiments run without touching the formula code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConstants {
    /// Flat term of the defense formula
    #[serde(default = "default_def_flat")]
    pub def_flat: f64,
    /// Defense gained per level, applied on both sides of the defense ratio
    #[serde(default = "default_def_per_level")]
    pub def_per_level: f64,
    /// Toughness multiplier against a target that is not weakness-broken
    #[serde(default = "default_unbroken_toughness")]
    pub unbroken_toughness: f64,
}

impl Default for FormulaConstants {
    fn default() -> Self {
        FormulaConstants {
            def_flat: 200.0,
            def_per_level: 10.0,
            unbroken_toughness: 0.9,
        }
    }
}

fn default_def_flat() -> f64 {
    200.0
}
fn default_def_per_level() -> f64 {
    10.0
}
fn default_unbroken_toughness() -> f64 {
    0.9
}

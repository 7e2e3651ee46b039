//! DamageResult - the published output triple

use serde::{Deserialize, Serialize};

/// One attack preview: non-critical, critical, and probability-weighted
/// damage
///
/// Always produced as a complete triple from a single Parameter Set
/// snapshot; it has no identity of its own and is recreated on every
/// recompute. Values are full-precision reals; display truncation is a
/// presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageResult {
    /// Damage of a non-critical hit
    pub min_damage: f64,
    /// Damage of a critical hit
    pub max_damage: f64,
    /// Crit-rate-weighted average of the two
    pub expected_damage: f64,
}

impl DamageResult {
    /// Absolute damage added by a critical hit
    pub fn crit_gain(&self) -> f64 {
        self.max_damage - self.min_damage
    }

    /// Whether every output is a finite number. Degenerate inputs (defense
    /// denominator of zero) legitimately produce non-finite results.
    pub fn is_finite(&self) -> bool {
        self.min_damage.is_finite() && self.max_damage.is_finite() && self.expected_damage.is_finite()
    }

    /// One-line summary for logs and combat readouts
    pub fn summary(&self) -> String {
        format!(
            "{:.0} ({:.0} crit, {:.0} expected)",
            self.min_damage, self.max_damage, self.expected_damage
        )
    }
}

//! Damage evaluation - turning a Parameter Set into a DamageResult
//!
//! Pure and total: no side effects, no panics, no clamping. The formula is
//! evaluated identically whether or not the inputs look "reasonable"; 150%
//! resistance legally yields negative damage, and a degenerate defense
//! denominator surfaces as an infinite or NaN result rather than a synthetic
//! fallback.

use super::{DamageResult, Derived};
use crate::config::FormulaConstants;
use crate::params::ParamSet;

/// Evaluate the full damage pipeline for one Parameter Set snapshot
pub fn evaluate(params: &ParamSet, constants: &FormulaConstants) -> DamageResult {
    evaluate_with_derived(params, constants).1
}

/// Evaluate and also return the intermediate quantities, for breakdown
/// display
pub fn evaluate_with_derived(
    params: &ParamSet,
    constants: &FormulaConstants,
) -> (Derived, DamageResult) {
    let derived = Derived::compute(params, constants);

    let min_damage = derived.base_damage
        * derived.damage_multiplier
        * derived.def_multiplier
        * derived.res_multiplier
        * derived.toughness_multiplier;
    let max_damage = min_damage * (1.0 + params.crit_damage / 100.0);

    let crit_chance = params.crit_rate / 100.0;
    let expected_damage = (1.0 - crit_chance) * min_damage + crit_chance * max_damage;

    (
        derived,
        DamageResult {
            min_damage,
            max_damage,
            expected_damage,
        },
    )
}

//! Calculator - the single owner of the authoritative Parameter Set
//!
//! Presentation collaborators submit raw field edits and read the published
//! result; they never touch the Parameter Set directly. Every accepted edit
//! runs the full validate -> recompute -> publish sequence before returning,
//! so the published triple always reflects one consistent snapshot.

use crate::config::{CalcConfig, DefaultProfile, FormulaConstants};
use crate::formula::{evaluate_with_derived, DamageResult, Derived};
use crate::params::ParamSet;
use crate::types::{Field, RawValue};

/// Holds the current Parameter Set and republishes the Damage Result
/// synchronously whenever a field changes
#[derive(Debug, Clone)]
pub struct Calculator {
    profile: DefaultProfile,
    constants: FormulaConstants,
    params: ParamSet,
    derived: Derived,
    result: DamageResult,
}

impl Calculator {
    /// Calculator seeded with the standard profile and default constants
    pub fn new() -> Self {
        Calculator::with_profile(DefaultProfile::standard())
    }

    /// Calculator seeded from a specific default profile
    pub fn with_profile(profile: DefaultProfile) -> Self {
        Calculator::with_config(CalcConfig {
            profile,
            constants: FormulaConstants::default(),
        })
    }

    /// Calculator built from a full configuration. An initial result is
    /// published immediately; `result()` is valid from the first call.
    pub fn with_config(config: CalcConfig) -> Self {
        let params = ParamSet::from_profile(&config.profile);
        let (derived, result) = evaluate_with_derived(&params, &config.constants);
        Calculator {
            profile: config.profile,
            constants: config.constants,
            params,
            derived,
            result,
        }
    }

    /// Apply one raw field edit: normalize, replace, recompute, publish.
    /// A rejected edit (unparseable, empty, wrong kind) leaves everything
    /// unchanged, including the published result.
    pub fn set_field(&mut self, field: Field, raw: &RawValue) {
        if self.params.apply_raw(field, raw) {
            self.republish();
        }
    }

    /// Text-edit convenience for numeric fields
    pub fn set_text(&mut self, field: Field, text: &str) {
        self.set_field(field, &RawValue::Text(text.to_string()));
    }

    /// Toggle convenience for the weakness-broken flag
    pub fn set_flag(&mut self, field: Field, on: bool) {
        self.set_field(field, &RawValue::Flag(on));
    }

    /// The most recently published result; never stale relative to the last
    /// accepted edit
    pub fn result(&self) -> &DamageResult {
        &self.result
    }

    /// The published intermediate quantities, for breakdown display
    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    /// Read access to the current Parameter Set
    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    /// Restore the profile defaults and republish
    pub fn reset(&mut self) {
        self.params = ParamSet::from_profile(&self.profile);
        self.republish();
    }

    fn republish(&mut self) {
        let (derived, result) = evaluate_with_derived(&self.params, &self.constants);
        self.derived = derived;
        self.result = result;
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_result_is_published() {
        let calc = Calculator::new();
        assert!((calc.result().min_damage - 360.0).abs() < 1e-9);
        assert!((calc.result().max_damage - 540.0).abs() < 1e-9);
        assert!((calc.result().expected_damage - 369.0).abs() < 1e-9);
    }

    #[test]
    fn test_edit_republishes_synchronously() {
        let mut calc = Calculator::new();
        calc.set_flag(Field::Broken, true);
        assert!((calc.result().min_damage - 400.0).abs() < 1e-9);
        assert!((calc.result().max_damage - 600.0).abs() < 1e-9);
        assert!((calc.result().expected_damage - 410.0).abs() < 1e-9);
    }

    #[test]
    fn test_derived_breakdown_tracks_the_result() {
        let mut calc = Calculator::new();
        assert!((calc.derived().enemy_def - 700.0).abs() < 1e-9);
        calc.set_text(Field::DefDebuff, "50");
        assert!((calc.derived().enemy_def - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_edit_changes_nothing() {
        let mut calc = Calculator::new();
        let before_params = calc.params().clone();
        let before_result = *calc.result();

        calc.set_text(Field::EnemyLevel, "abc");
        calc.set_text(Field::EnemyLevel, "");

        assert_eq!(calc.params(), &before_params);
        assert_eq!(calc.result(), &before_result);
    }

    #[test]
    fn test_resubmitting_the_current_value_is_idempotent() {
        let mut calc = Calculator::new();
        let before = *calc.result();
        calc.set_text(Field::ScalingAttribute, "2000");
        assert_eq!(calc.result(), &before);
    }

    #[test]
    fn test_reset_restores_profile_defaults() {
        let mut calc = Calculator::new();
        calc.set_text(Field::ScalingAttribute, "4000");
        calc.set_flag(Field::Broken, true);
        calc.reset();

        assert_eq!(calc.params(), &ParamSet::default());
        assert!((calc.result().min_damage - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_drives_reset_and_initial_state() {
        let mut calc = Calculator::with_profile(DefaultProfile::simple());
        // base_damage = 2000 * 100 / 100 = 2000; no crit contribution
        assert!((calc.result().min_damage - 720.0).abs() < 1e-9);
        assert_eq!(calc.result().expected_damage, calc.result().min_damage);

        calc.set_text(Field::SkillMultiplier, "50");
        calc.reset();
        assert!((calc.params().skill_multiplier - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_constants_flow_through() {
        let config = CalcConfig {
            profile: DefaultProfile::standard(),
            constants: FormulaConstants {
                unbroken_toughness: 1.0,
                ..FormulaConstants::default()
            },
        };
        let calc = Calculator::with_config(config);
        // Without the toughness penalty the default preview is 400
        assert!((calc.result().min_damage - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_field_names_route_through_from_str() {
        let mut calc = Calculator::new();
        let field: Field = "critRate".parse().unwrap();
        calc.set_text(field, "100");
        assert_eq!(calc.result().expected_damage, calc.result().max_damage);
    }
}

//! Parameter Set - the canonical, validated input bundle
//!
//! One struct holds every input the formula needs. It has exactly one state,
//! valid and current: raw edits pass through the normalization policy in
//! `normalize` before they land here, so the evaluator never sees anything
//! un-normalized.

mod normalize;

use crate::config::DefaultProfile;
use crate::types::Field;
use serde::{Deserialize, Serialize};

/// Complete input state for one attack preview
///
/// All numeric fields are unclamped: documented ranges (crit rate 0-100,
/// resistance at most 100) are presentation affordances, not invariants.
/// Serialized names use the camelCase form-payload keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSet {
    /// Attacker level
    pub character_level: f64,
    /// Target level
    pub enemy_level: f64,
    /// Attacker's scaling stat (e.g. ATK)
    pub scaling_attribute: f64,
    /// Skill percentage scaling
    pub skill_multiplier: f64,
    /// Critical-hit chance, percent
    pub crit_rate: f64,
    /// Critical damage bonus, percent
    pub crit_damage: f64,
    /// Additive damage increase, percent (may be negative)
    pub damage_buff: f64,
    /// Target defense reduction, percent
    pub def_debuff: f64,
    /// Target damage resistance, percent
    pub res: f64,
    /// Whether the target is weakness-broken
    pub broken: bool,
}

impl Default for ParamSet {
    fn default() -> Self {
        ParamSet::from_profile(&DefaultProfile::standard())
    }
}

impl ParamSet {
    /// Seed a Parameter Set from a default profile
    pub fn from_profile(profile: &DefaultProfile) -> Self {
        ParamSet {
            character_level: profile.character_level,
            enemy_level: profile.enemy_level,
            scaling_attribute: profile.scaling_attribute,
            skill_multiplier: profile.skill_multiplier,
            crit_rate: profile.crit_rate,
            crit_damage: profile.crit_damage,
            damage_buff: profile.damage_buff,
            def_debuff: profile.def_debuff,
            res: profile.res,
            broken: profile.broken,
        }
    }

    /// Current value of a numeric field; `None` for `broken`
    pub fn numeric(&self, field: Field) -> Option<f64> {
        match field {
            Field::CharacterLevel => Some(self.character_level),
            Field::EnemyLevel => Some(self.enemy_level),
            Field::ScalingAttribute => Some(self.scaling_attribute),
            Field::SkillMultiplier => Some(self.skill_multiplier),
            Field::CritRate => Some(self.crit_rate),
            Field::CritDamage => Some(self.crit_damage),
            Field::DamageBuff => Some(self.damage_buff),
            Field::DefDebuff => Some(self.def_debuff),
            Field::Res => Some(self.res),
            Field::Broken => None,
        }
    }

    /// Replace a numeric field. Returns false (and changes nothing) for
    /// `broken`, which is boolean-only.
    pub fn set_numeric(&mut self, field: Field, value: f64) -> bool {
        let slot = match field {
            Field::CharacterLevel => &mut self.character_level,
            Field::EnemyLevel => &mut self.enemy_level,
            Field::ScalingAttribute => &mut self.scaling_attribute,
            Field::SkillMultiplier => &mut self.skill_multiplier,
            Field::CritRate => &mut self.crit_rate,
            Field::CritDamage => &mut self.crit_damage,
            Field::DamageBuff => &mut self.damage_buff,
            Field::DefDebuff => &mut self.def_debuff,
            Field::Res => &mut self.res,
            Field::Broken => return false,
        };
        *slot = value;
        true
    }
}

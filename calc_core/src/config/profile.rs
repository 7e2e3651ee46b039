//! Default parameter profiles
//!
//! Variant front-ends ship different default bundles (a skill-focused page
//! seeds a full multiplier with crit zeroed, for example). They all share one
//! engine and differ only in these seed values.

use serde::{Deserialize, Serialize};

/// Default value for every Parameter Set field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultProfile {
    #[serde(default = "default_character_level")]
    pub character_level: f64,
    #[serde(default = "default_enemy_level")]
    pub enemy_level: f64,
    #[serde(default = "default_scaling_attribute")]
    pub scaling_attribute: f64,
    #[serde(default = "default_skill_multiplier")]
    pub skill_multiplier: f64,
    #[serde(default = "default_crit_rate")]
    pub crit_rate: f64,
    #[serde(default = "default_crit_damage")]
    pub crit_damage: f64,
    #[serde(default)]
    pub damage_buff: f64,
    #[serde(default)]
    pub def_debuff: f64,
    #[serde(default = "default_res")]
    pub res: f64,
    #[serde(default)]
    pub broken: bool,
}

impl Default for DefaultProfile {
    fn default() -> Self {
        DefaultProfile::standard()
    }
}

impl DefaultProfile {
    /// Defaults of the standard front-end
    pub fn standard() -> Self {
        DefaultProfile {
            character_level: 50.0,
            enemy_level: 50.0,
            scaling_attribute: 2000.0,
            skill_multiplier: 50.0,
            crit_rate: 5.0,
            crit_damage: 50.0,
            damage_buff: 0.0,
            def_debuff: 0.0,
            res: 20.0,
            broken: false,
        }
    }

    /// Variant bundle: full skill multiplier with crit inputs zeroed, used by
    /// front-ends that omit the crit fields entirely
    pub fn simple() -> Self {
        DefaultProfile {
            skill_multiplier: 100.0,
            crit_rate: 0.0,
            crit_damage: 0.0,
            ..DefaultProfile::standard()
        }
    }
}

fn default_character_level() -> f64 {
    50.0
}
fn default_enemy_level() -> f64 {
    50.0
}
fn default_scaling_attribute() -> f64 {
    2000.0
}
fn default_skill_multiplier() -> f64 {
    50.0
}
fn default_crit_rate() -> f64 {
    5.0
}
fn default_crit_damage() -> f64 {
    50.0
}
fn default_res() -> f64 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_profile() {
        let profile = DefaultProfile::standard();
        assert!((profile.character_level - 50.0).abs() < f64::EPSILON);
        assert!((profile.scaling_attribute - 2000.0).abs() < f64::EPSILON);
        assert!((profile.crit_rate - 5.0).abs() < f64::EPSILON);
        assert!((profile.res - 20.0).abs() < f64::EPSILON);
        assert!(!profile.broken);
    }

    #[test]
    fn test_simple_profile() {
        let profile = DefaultProfile::simple();
        assert!((profile.skill_multiplier - 100.0).abs() < f64::EPSILON);
        assert!((profile.crit_rate - 0.0).abs() < f64::EPSILON);
        assert!((profile.crit_damage - 0.0).abs() < f64::EPSILON);
        // Everything else follows the standard bundle
        assert!((profile.res - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_partial_profile_fills_defaults() {
        let profile: DefaultProfile = toml::from_str("scaling_attribute = 3200").unwrap();
        assert!((profile.scaling_attribute - 3200.0).abs() < f64::EPSILON);
        assert!((profile.skill_multiplier - 50.0).abs() < f64::EPSILON);
        assert!((profile.crit_damage - 50.0).abs() < f64::EPSILON);
    }
}

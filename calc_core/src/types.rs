//! Shared types - field identifiers and raw edit values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier for a single Parameter Set field
///
/// These are the only keys a presentation collaborator can edit. Everything
/// else the formula uses is derived and recomputed, never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CharacterLevel,
    EnemyLevel,
    ScalingAttribute,
    SkillMultiplier,
    CritRate,
    CritDamage,
    DamageBuff,
    DefDebuff,
    Res,
    Broken,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::CharacterLevel,
            Field::EnemyLevel,
            Field::ScalingAttribute,
            Field::SkillMultiplier,
            Field::CritRate,
            Field::CritDamage,
            Field::DamageBuff,
            Field::DefDebuff,
            Field::Res,
            Field::Broken,
        ]
    }

    /// Canonical field name
    pub fn name(&self) -> &'static str {
        match self {
            Field::CharacterLevel => "character_level",
            Field::EnemyLevel => "enemy_level",
            Field::ScalingAttribute => "scaling_attribute",
            Field::SkillMultiplier => "skill_multiplier",
            Field::CritRate => "crit_rate",
            Field::CritDamage => "crit_damage",
            Field::DamageBuff => "damage_buff",
            Field::DefDebuff => "def_debuff",
            Field::Res => "res",
            Field::Broken => "broken",
        }
    }

    /// Whether the field holds a number (everything except `broken`)
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Field::Broken)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for unrecognized field names at the presentation boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown parameter field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the canonical snake_case names and the camelCase spellings
    /// used in serialized payloads.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character_level" | "characterLevel" => Ok(Field::CharacterLevel),
            "enemy_level" | "enemyLevel" => Ok(Field::EnemyLevel),
            "scaling_attribute" | "scalingAttribute" => Ok(Field::ScalingAttribute),
            "skill_multiplier" | "skillMultiplier" => Ok(Field::SkillMultiplier),
            "crit_rate" | "critRate" => Ok(Field::CritRate),
            "crit_damage" | "critDamage" => Ok(Field::CritDamage),
            "damage_buff" | "damageBuff" => Ok(Field::DamageBuff),
            "def_debuff" | "defDebuff" => Ok(Field::DefDebuff),
            "res" => Ok(Field::Res),
            "broken" => Ok(Field::Broken),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// A raw field edit as submitted by a presentation collaborator
///
/// Numeric fields arrive as text (whatever the user typed); the
/// weakness-broken flag arrives as a plain boolean toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<bool> for RawValue {
    fn from(flag: bool) -> Self {
        RawValue::Flag(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for field in Field::all() {
            assert_eq!(field.name().parse::<Field>().unwrap(), *field);
        }
    }

    #[test]
    fn test_parse_camel_case_names() {
        assert_eq!("characterLevel".parse::<Field>().unwrap(), Field::CharacterLevel);
        assert_eq!("scalingAttribute".parse::<Field>().unwrap(), Field::ScalingAttribute);
        assert_eq!("critRate".parse::<Field>().unwrap(), Field::CritRate);
        assert_eq!("defDebuff".parse::<Field>().unwrap(), Field::DefDebuff);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "toughness".parse::<Field>().unwrap_err();
        assert_eq!(err, UnknownField("toughness".to_string()));
    }

    #[test]
    fn test_only_broken_is_boolean() {
        let numeric_count = Field::all().iter().filter(|f| f.is_numeric()).count();
        assert_eq!(numeric_count, 9);
        assert!(!Field::Broken.is_numeric());
    }
}

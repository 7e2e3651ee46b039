//! Derived quantities - the intermediate factors of the damage pipeline
//!
//! Each value is a pure function of upstream Parameter Set fields, forming a
//! small dependency DAG. They are never stored on the Parameter Set; the
//! whole set is recomputed in dependency order on every evaluation.

use crate::config::FormulaConstants;
use crate::params::ParamSet;
use serde::{Deserialize, Serialize};

/// The six intermediate quantities, each computed once per evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Derived {
    /// Target defense after the defense debuff
    pub enemy_def: f64,
    /// Share of damage that passes the target's defense
    pub def_multiplier: f64,
    /// Scaling attribute scaled by the skill percentage
    pub base_damage: f64,
    /// Additive damage-buff factor
    pub damage_multiplier: f64,
    /// Share of damage that passes the target's resistance (negative above
    /// 100% res)
    pub res_multiplier: f64,
    /// 1.0 against a weakness-broken target, reduced otherwise
    pub toughness_multiplier: f64,
}

impl Derived {
    /// Compute all derived quantities for one Parameter Set snapshot
    pub fn compute(params: &ParamSet, constants: &FormulaConstants) -> Self {
        let enemy_def = (constants.def_flat + constants.def_per_level * params.enemy_level)
            * (1.0 - params.def_debuff / 100.0);
        let def_multiplier = 1.0
            - enemy_def
                / (enemy_def + constants.def_flat + constants.def_per_level * params.character_level);

        Derived {
            enemy_def,
            def_multiplier,
            base_damage: params.scaling_attribute * params.skill_multiplier / 100.0,
            damage_multiplier: 1.0 + params.damage_buff / 100.0,
            res_multiplier: 1.0 - params.res / 100.0,
            toughness_multiplier: if params.broken {
                1.0
            } else {
                constants.unbroken_toughness
            },
        }
    }
}

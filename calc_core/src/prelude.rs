//! Prelude module for convenient imports
//!
//! ```rust
//! use calc_core::prelude::*;
//! ```

// Core types
pub use crate::params::ParamSet;
pub use crate::types::{Field, RawValue, UnknownField};

// Formula pipeline
pub use crate::formula::{evaluate, evaluate_with_derived, DamageResult, Derived};

// Controller
pub use crate::controller::{Calculator, SharedCalculator};

// Config
pub use crate::config::{CalcConfig, ConfigError, DefaultProfile, FormulaConstants};

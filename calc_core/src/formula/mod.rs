//! Formula pipeline - derived quantities and damage evaluation

mod derived;
mod evaluate;
mod result;

pub use derived::Derived;
pub use evaluate::{evaluate, evaluate_with_derived};
pub use result::DamageResult;

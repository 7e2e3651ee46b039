//! Reactive recalculation - owning the Parameter Set and keeping the
//! published result consistent with it

mod calculator;
mod shared;

pub use calculator::Calculator;
pub use shared::SharedCalculator;

//! Input normalization - the parse-or-retain policy for raw edits
//!
//! Numeric fields: parse the text as a real number; anything unparseable,
//! empty, or non-finite retains the previous valid value. The published
//! Parameter Set never holds NaN or undefined from an edit.
//! The `broken` flag: a direct boolean toggle, no parsing involved.
//! No clamping anywhere; out-of-typical-range values flow through.

use super::ParamSet;
use crate::types::{Field, RawValue};

impl ParamSet {
    /// Apply one raw edit. Returns whether the field was replaced; a rejected
    /// edit leaves the Parameter Set untouched.
    pub fn apply_raw(&mut self, field: Field, raw: &RawValue) -> bool {
        match (field, raw) {
            (Field::Broken, RawValue::Flag(on)) => {
                self.broken = *on;
                true
            }
            // Kind mismatches fall under the same retain-previous policy
            (Field::Broken, RawValue::Text(_)) => false,
            (_, RawValue::Flag(_)) => false,
            (field, RawValue::Text(text)) => match parse_numeric(text) {
                Some(value) => self.set_numeric(field, value),
                None => false,
            },
        }
    }
}

/// Parse a numeric edit. `f64::from_str` accepts "NaN" and "inf", which no
/// number input ever emits; those are rejected so only computed results can
/// be non-finite.
fn parse_numeric(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

//! Serde helpers for engine-facing numbers.
//!
//! Dimensions are carried as `f64` so callers keep whatever precision they pass in. The engine
//! declares most of these fields as integers, so values with no fractional part are written as
//! JSON integers (`800`) and everything else as JSON floats (`12.5`).

use serde::Serializer;

// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

pub(crate) fn compact<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_EXACT {
        s.serialize_i64(*v as i64)
    } else {
        s.serialize_f64(*v)
    }
}

pub(crate) fn compact_opt<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(v) => compact(v, s),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/number.rs"]
mod tests;

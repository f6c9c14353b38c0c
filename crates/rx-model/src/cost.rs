//! Cost field parsing.

use crate::error::{ModelError, Result};

/// Parse a cost field into whole currency units.
///
/// Surrounding whitespace is ignored and the fractional part is truncated
/// toward zero, so `"19.99"` becomes `19` and `"-0.5"` becomes `0`.
/// Exponent notation is accepted; `NaN` and infinities are rejected.
pub fn parse_cost(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| ModelError::MalformedCost {
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ModelError::MalformedCost {
            value: raw.to_string(),
        });
    }
    let truncated = value.trunc();
    // i64::MAX is not representable as f64; 2^63 is the first value out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(ModelError::CostOutOfRange {
            value: raw.to_string(),
        });
    }
    Ok(truncated as i64)
}

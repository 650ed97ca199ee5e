//! Conversions between display text and numbers.

use crate::error::{CalcError, Result};

/// Fractional digits kept in a displayed result.
pub const RESULT_PLACES: usize = 10;

/// Parse display text as an operand.
///
/// Only what the display can legitimately hold is accepted: digits, a
/// decimal point and a leading minus from an earlier negative result.
/// Anything else (`ERROR`, `1.2.3`, a lone `-`) is a parse error.
pub fn parse_operand(text: &str) -> Result<f64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let well_formed = !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.chars().any(|c| c.is_ascii_digit());

    if !well_formed {
        return Err(CalcError::Parse { text: text.to_owned() });
    }
    text.parse::<f64>()
        .map_err(|_| CalcError::Parse { text: text.to_owned() })
}

/// Round to `places` decimal digits.
///
/// Goes through decimal formatting so the result is the `f64` nearest to
/// the correctly rounded decimal, not the product of a scaled `round()`.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Render a result: integer literal when there is no fractional part,
/// otherwise the shortest plain decimal.
pub fn format_result(value: f64) -> String {
    let rounded = round_to(value, RESULT_PLACES);
    if rounded == 0.0 {
        // also folds -0
        "0".to_owned()
    } else if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        rounded.to_string()
    }
}

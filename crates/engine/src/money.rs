use crate::{EngineError, MAX_AMOUNT_CENTS, ResultEngine};

/// Parses a user-entered amount in major units into integer minor units.
///
/// All money in the engine is an `i64` count of minor units (cents); this is
/// the only place where decimal text enters. Formatting for display is left to
/// the caller.
///
/// Accepts `.` or `,` as decimal separator, surrounding whitespace and one
/// leading `$` or `€`.
///
/// Validation rules:
/// - max 2 fractional digits (rejects `12.345`)
/// - rejects signs, zero, empty and otherwise invalid strings
/// - rejects amounts above [`MAX_AMOUNT_CENTS`]
///
/// # Examples
///
/// ```rust
/// use engine::parse_amount_cents;
///
/// assert_eq!(parse_amount_cents("4.50").unwrap(), 450);
/// assert_eq!(parse_amount_cents("$ 12").unwrap(), 1200);
/// assert!(parse_amount_cents("0").is_err());
/// ```
pub fn parse_amount_cents(input: &str) -> ResultEngine<i64> {
    let invalid = || EngineError::InvalidAmount(format!("invalid amount: {input:?}"));
    let overflow = || EngineError::InvalidAmount("amount too large".to_string());

    let trimmed = input.trim();
    let rest = trimmed
        .strip_prefix('$')
        .or_else(|| trimmed.strip_prefix('€'))
        .unwrap_or(trimmed)
        .trim();
    if rest.is_empty() {
        return Err(EngineError::InvalidAmount("empty amount".to_string()));
    }

    let rest = rest.replace(',', ".");
    let (units_str, frac_str) = match rest.split_once('.') {
        Some((units, frac)) => (units, Some(frac)),
        None => (rest.as_str(), None),
    };

    if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let units: i64 = units_str.parse().map_err(|_| overflow())?;

    let cents: i64 = match frac_str {
        None | Some("") => 0,
        Some(frac) if !frac.chars().all(|c| c.is_ascii_digit()) => return Err(invalid()),
        Some(frac) if frac.len() == 1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
        Some(frac) if frac.len() == 2 => frac.parse::<i64>().map_err(|_| invalid())?,
        Some(_) => {
            return Err(EngineError::InvalidAmount("too many decimals".to_string()));
        }
    };

    let total = units
        .checked_mul(100)
        .and_then(|v| v.checked_add(cents))
        .filter(|v| *v <= MAX_AMOUNT_CENTS)
        .ok_or_else(overflow)?;
    if total == 0 {
        return Err(EngineError::InvalidAmount("amount must be > 0".to_string()));
    }
    Ok(total)
}

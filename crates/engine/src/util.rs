//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API. They centralize the
//! presence and type checks an expense goes through before it reaches the
//! database.

use crate::{EngineError, ResultEngine};

/// Reject a required field that is empty or blank.
pub(crate) fn require_text(value: &str, label: &str) -> ResultEngine<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidField(format!("{label} is required")));
    }
    Ok(())
}

/// Reject a required choice that is blank or still shows its placeholder.
pub(crate) fn require_choice(value: &str, placeholder: &str, label: &str) -> ResultEngine<()> {
    require_text(value, label)?;
    if value.trim() == placeholder {
        return Err(EngineError::InvalidField(format!("{label} must be selected")));
    }
    Ok(())
}

/// Parse a raw amount. Surrounding whitespace is ignored; `NaN` and infinities
/// are refused since SQLite cannot store them as `REAL`.
pub(crate) fn parse_amount(raw: &str) -> ResultEngine<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EngineError::InvalidAmount(format!(
            "amount must be a number, got '{trimmed}'"
        ))),
    }
}

/// Treat an empty or blank filter as no filter at all.
pub(crate) fn normalize_filter(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_decimals_and_signs() {
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount(" -3 ").unwrap(), -3.0);
        assert_eq!(parse_amount("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn parse_amount_rejects_text_and_non_finite() {
        for raw in ["abc", "12,50", "1_000", "", "NaN", "inf", "-infinity"] {
            assert!(
                matches!(parse_amount(raw), Err(EngineError::InvalidAmount(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn require_choice_rejects_placeholder() {
        let err = require_choice("Select Category", "Select Category", "category").unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidField("category must be selected".to_string())
        );
        assert!(require_choice("Food", "Select Category", "category").is_ok());
        assert!(require_choice("  ", "Select Category", "category").is_err());
    }

    #[test]
    fn blank_filter_is_no_filter() {
        assert_eq!(normalize_filter(None), None);
        assert_eq!(normalize_filter(Some("   ")), None);
        assert_eq!(normalize_filter(Some(" li ")), Some("li"));
    }
}

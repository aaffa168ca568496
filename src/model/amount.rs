use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// True if `s` is digits with at most one decimal point (`^\d*\.?\d*$`).
///
/// The empty string matches, so a field can always be cleared.
pub fn is_amount_literal(s: &str) -> bool {
    let mut seen_dot = false;
    for c in s.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}

/// Parse an amount string the way the amount field reads it.
///
/// `""` is zero, `"1."` is 1 and `".5"` is 0.5. A lone `"."`, anything
/// outside the amount grammar, and values too large for `Decimal` yield `None`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if !is_amount_literal(s) {
        return None;
    }
    if s.is_empty() {
        return Some(Decimal::ZERO);
    }

    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let normalized = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };
    Decimal::from_str(&normalized).ok()
}

/// The text held by a deposit amount field.
///
/// Only strings matching [`is_amount_literal`] are ever stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct DepositAmount(String);

impl DepositAmount {
    /// Apply a keystroke. Rejected candidates leave the amount unchanged.
    pub fn edit(&mut self, candidate: &str) -> bool {
        if is_amount_literal(candidate) {
            self.0 = candidate.to_string();
            true
        } else {
            false
        }
    }

    /// Overwrite from a quick-fill button. Uses the same acceptance rule.
    pub fn fill(&mut self, value: &str) -> bool {
        self.edit(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DepositAmount {
    fn default() -> Self {
        DepositAmount("0".to_string())
    }
}

impl fmt::Display for DepositAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_amount_literal_grammar() {
        assert!(is_amount_literal(""));
        assert!(is_amount_literal("0"));
        assert!(is_amount_literal("12.5"));
        assert!(is_amount_literal("."));
        assert!(is_amount_literal(".5"));
        assert!(is_amount_literal("5."));

        assert!(!is_amount_literal("1.2.3"));
        assert!(!is_amount_literal("1..2"));
        assert!(!is_amount_literal("-1"));
        assert!(!is_amount_literal("1e3"));
        assert!(!is_amount_literal("1,5"));
        assert!(!is_amount_literal("abc"));
    }

    #[test]
    fn test_parse_amount_edges() {
        assert_eq!(parse_amount(""), Some(Decimal::ZERO));
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("1."), Some(dec!(1)));
        assert_eq!(parse_amount(".5"), Some(dec!(0.5)));
        assert_eq!(parse_amount(" 2.89039 "), Some(dec!(2.89039)));
        assert_eq!(parse_amount("007"), Some(dec!(7)));
        assert_eq!(parse_amount("1_000"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_rejected_edit_keeps_previous_amount() {
        let mut amount = DepositAmount::default();
        assert_eq!(amount.as_str(), "0");

        assert!(amount.edit("1.5"));
        assert!(!amount.edit("1.5.1"));
        assert_eq!(amount.as_str(), "1.5");

        assert!(amount.edit(""));
        assert_eq!(amount.as_str(), "");
    }
}

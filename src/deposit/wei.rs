//! Decimal amount strings to integer base units.

use crate::error::AmountError;
use crate::model::amount::is_amount_literal;
use crate::model::AssetSymbol;

/// Decimals of the native asset's smallest unit (wei).
pub const NATIVE_DECIMALS: u8 = 18;

/// Convert `raw` to base units with `decimals` fractional digits.
///
/// Exact: digits are shifted, never multiplied as floats. Fractional digits
/// past `decimals` are dropped, rounding half-up on the first dropped digit.
/// An empty string is zero.
pub fn parse_units(raw: &str, decimals: u8) -> Result<u128, AmountError> {
    let s = raw.trim();
    if !is_amount_literal(s) || s == "." {
        return Err(AmountError::Invalid(raw.to_string()));
    }
    let overflow = || AmountError::Overflow {
        amount: raw.to_string(),
        decimals,
    };

    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    let scale = 10u128.checked_pow(u32::from(decimals)).ok_or_else(overflow)?;

    let int: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| overflow())?
    };

    let d = usize::from(decimals);
    let kept = &frac_part[..frac_part.len().min(d)];
    let round_up = frac_part.as_bytes().get(d).is_some_and(|b| *b >= b'5');

    let mut frac: u128 = 0;
    for (i, b) in kept.bytes().enumerate() {
        let place = 10u128.pow((d - i - 1) as u32);
        frac += u128::from(b - b'0') * place;
    }

    let mut value = int.checked_mul(scale).ok_or_else(overflow)?;
    value = value.checked_add(frac).ok_or_else(overflow)?;
    if round_up {
        value = value.checked_add(1).ok_or_else(overflow)?;
    }
    Ok(value)
}

/// The transaction's native `value`: the amount in wei for the native
/// asset, zero for tokens (those move through the call argument).
pub fn native_value_wei(raw: &str, symbol: AssetSymbol) -> Result<u128, AmountError> {
    if symbol.is_native() {
        parse_units(raw, NATIVE_DECIMALS)
    } else {
        Ok(0)
    }
}

/// The `amount` argument of the pool's `deposit` call.
pub fn scaled_amount(raw: &str, decimals: u8) -> Result<u128, AmountError> {
    parse_units(raw, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units_exact() {
        assert_eq!(parse_units("1", 18).unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(parse_units("1.5", 6).unwrap(), 1_500_000);
        assert_eq!(parse_units(".25", 2).unwrap(), 25);
        assert_eq!(parse_units("3.", 0).unwrap(), 3);
        assert_eq!(parse_units("", 18).unwrap(), 0);
        assert_eq!(
            parse_units("2.89039", 18).unwrap(),
            2_890_390_000_000_000_000
        );
    }

    #[test]
    fn test_parse_units_rounds_extra_digits() {
        assert_eq!(parse_units("1.2345", 2).unwrap(), 123);
        assert_eq!(parse_units("1.2355", 2).unwrap(), 124);
        assert_eq!(parse_units("0.0000005", 6).unwrap(), 1);
    }

    #[test]
    fn test_parse_units_rejects_bad_input() {
        assert!(matches!(parse_units(".", 18), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_units("1.2.3", 18), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_units("-1", 18), Err(AmountError::Invalid(_))));
        assert!(matches!(
            parse_units("340282366920938463463374607431768211456", 0),
            Err(AmountError::Overflow { .. })
        ));
        assert!(matches!(
            parse_units("1", 39),
            Err(AmountError::Overflow { .. })
        ));
    }

    #[test]
    fn test_native_value_only_for_eth() {
        assert_eq!(
            native_value_wei("0.5", AssetSymbol::Eth).unwrap(),
            500_000_000_000_000_000
        );
        assert_eq!(native_value_wei("0.5", AssetSymbol::Usdc).unwrap(), 0);
    }
}

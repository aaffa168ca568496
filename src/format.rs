//! Display formatting shared by the market table, deposit dialog and LP panel.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed-point rendering with `places` fractional digits.
///
/// Rounds half away from zero and pads with zeros, matching how the
/// dashboard's `toFixed` renders decimal inputs.
pub fn to_fixed(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded.to_string()
}

/// A raw figure with no trailing zeros (`100`, `1.19`).
pub fn plain(value: Decimal) -> String {
    value.normalize().to_string()
}

/// `$` followed by the value to 4 decimal places.
pub fn usd(value: Decimal) -> String {
    format!("${}", to_fixed(value, 4))
}

/// A rate or ratio as `<value>%`.
pub fn percent(value: Decimal) -> String {
    format!("{}%", plain(value))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_to_fixed_pads_and_rounds() {
        assert_eq!(to_fixed(dec!(200000), 4), "200000.0000");
        assert_eq!(to_fixed(dec!(2.89039), 4), "2.8904");
        assert_eq!(to_fixed(dec!(1.00005), 4), "1.0001");
        assert_eq!(to_fixed(dec!(1.00004), 4), "1.0000");
        assert_eq!(to_fixed(Decimal::ZERO, 2), "0.00");
    }

    #[test]
    fn test_plain_and_percent() {
        assert_eq!(plain(dec!(100.000)), "100");
        assert_eq!(plain(dec!(1.190)), "1.19");
        assert_eq!(percent(dec!(80)), "80%");
        assert_eq!(usd(dec!(80000)), "$80000.0000");
    }
}

//! Rounding and display helpers shared by the calculator and its front ends.

use rust_decimal::{Decimal, prelude::FromPrimitive};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly half a cent are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(10.454)), dec!(10.45));
/// assert_eq!(round_half_up(dec!(10.455)), dec!(10.46));
/// assert_eq!(round_half_up(dec!(10.456)), dec!(10.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as currency: the symbol followed by exactly two
/// decimal places.
///
/// The float is converted to its shortest decimal form before rounding, so
/// `0.125` becomes `0.13` rather than falling victim to binary
/// representation error. Amounts too large for [`Decimal`] fall back to the
/// float formatter.
///
/// # Examples
///
/// ```
/// use tip_core::format_currency;
///
/// assert_eq!(format_currency(10.0, "$"), "$10.00");
/// assert_eq!(format_currency(3.456, "€"), "€3.46");
/// ```
pub fn format_currency(
    amount: f64,
    symbol: &str,
) -> String {
    match Decimal::from_f64(amount) {
        Some(value) => format!("{symbol}{:.2}", round_half_up(value)),
        None => format!("{symbol}{amount:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(7.504)), dec!(7.50));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(7.505)), dec!(7.51));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(7.50)), dec!(7.50));
    }

    #[test]
    fn round_half_up_handles_zero() {
        assert_eq!(round_half_up(dec!(0.00)), dec!(0.00));
    }

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_pads_to_two_places() {
        assert_eq!(format_currency(10.0, "$"), "$10.00");
        assert_eq!(format_currency(7.5, "$"), "$7.50");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
    }

    #[test]
    fn format_currency_rounds_half_cent_up() {
        assert_eq!(format_currency(0.125, "$"), "$0.13");
        assert_eq!(format_currency(3.456, "$"), "$3.46");
    }

    #[test]
    fn format_currency_uses_given_symbol() {
        assert_eq!(format_currency(1.0, "£"), "£1.00");
        assert_eq!(format_currency(1.0, ""), "1.00");
    }

    #[test]
    fn format_currency_falls_back_for_huge_amounts() {
        let formatted = format_currency(1e30, "$");

        assert!(formatted.starts_with("$1000000000000000019884624838656"));
        assert!(formatted.ends_with(".00"));
    }
}

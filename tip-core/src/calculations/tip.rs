//! The tip calculation.
//!
//! `tip = bill × (percentage / 100)`. Unusable bill text counts as a zero
//! bill; validation, if any, is the caller's job (see
//! [`crate::InputValidator`]). No rounding happens here.
//!
//! # Example
//!
//! ```
//! use tip_core::{TipPercentage, calculate_tip};
//!
//! let twenty = TipPercentage::new(20).unwrap();
//!
//! assert_eq!(calculate_tip("50.00", twenty), 10.0);
//! assert_eq!(calculate_tip("abc", twenty), 0.0);
//! ```

use tracing::debug;

use crate::models::{BillAmount, TipPercentage};

/// Calculates the tip for raw bill text.
///
/// Pure and deterministic: identical inputs always give identical output.
pub fn calculate_tip(
    bill_amount_text: &str,
    tip_percentage: TipPercentage,
) -> f64 {
    let bill = BillAmount::parse(bill_amount_text).unwrap_or_else(|| {
        if !bill_amount_text.trim().is_empty() {
            debug!(input = %bill_amount_text, "unparsable bill amount treated as zero");
        }
        BillAmount::ZERO
    });
    tip_for_amount(bill, tip_percentage)
}

/// Calculates the tip for an already parsed bill.
pub fn tip_for_amount(
    bill: BillAmount,
    tip_percentage: TipPercentage,
) -> f64 {
    bill.value() * tip_percentage.as_fraction()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn pct(value: i64) -> TipPercentage {
        TipPercentage::new(value).unwrap()
    }

    fn all_percentages() -> impl Iterator<Item = TipPercentage> {
        (0..=30).map(pct)
    }

    #[test]
    fn matches_bill_times_percentage_over_hundred() {
        let bills = ["0", "1", "9.99", "12.34", "50.00", ".75", "1234567.89", "100."];

        for bill in bills {
            let parsed: f64 = bill.parse().unwrap();
            for p in all_percentages() {
                let expected = parsed * f64::from(p.value()) / 100.0;
                let actual = calculate_tip(bill, p);
                assert!(
                    (actual - expected).abs() <= TOLERANCE * expected.max(1.0),
                    "bill {bill} at {p}: expected {expected}, got {actual}"
                );
            }
        }
    }

    #[test]
    fn empty_bill_yields_zero() {
        for p in all_percentages() {
            assert_eq!(calculate_tip("", p), 0.0);
        }
    }

    #[test]
    fn unparsable_bill_yields_zero() {
        for p in all_percentages() {
            assert_eq!(calculate_tip("abc", p), 0.0);
            assert_eq!(calculate_tip("12.3.4", p), 0.0);
            assert_eq!(calculate_tip("-20", p), 0.0);
        }
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let first = calculate_tip("83.17", pct(18));
        let second = calculate_tip("83.17", pct(18));

        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn zero_percent_is_always_zero() {
        for bill in ["0", "1", "50.00", "99999.99"] {
            assert_eq!(calculate_tip(bill, TipPercentage::MIN), 0.0);
        }
    }

    #[test]
    fn thirty_percent_is_thirty_hundredths_of_bill() {
        let tip = calculate_tip("200", TipPercentage::MAX);

        assert!((tip - 60.0).abs() < TOLERANCE);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(calculate_tip("  50.00\t", pct(20)), 10.0);
    }

    #[test]
    fn fifty_at_twenty_percent_is_ten() {
        assert_eq!(calculate_tip("50.00", pct(20)), 10.0);
    }

    #[test]
    fn tip_for_amount_uses_parsed_bill() {
        let bill = BillAmount::parse("40").unwrap();

        assert_eq!(tip_for_amount(bill, TipPercentage::DEFAULT), 6.0);
    }
}

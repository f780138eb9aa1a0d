use serde::Serialize;

use crate::validation::{BillAmountError, is_decimal_text};

/// A non-negative bill total derived from user text.
///
/// Text that is empty, fails the decimal pattern, or does not fit in a
/// finite `f64` yields [`BillAmount::ZERO`] through
/// [`BillAmount::parse_or_zero`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct BillAmount(f64);

impl BillAmount {
    pub const ZERO: Self = Self(0.0);

    /// Parses bill text, returning `None` when it is not a usable amount.
    ///
    /// Surrounding whitespace is ignored. Signs, exponents and thousands
    /// separators are not part of the accepted format.
    ///
    /// # Example
    ///
    /// ```
    /// use tip_core::BillAmount;
    ///
    /// assert_eq!(BillAmount::parse(" 12.50 ").map(BillAmount::value), Some(12.5));
    /// assert_eq!(BillAmount::parse(".5").map(BillAmount::value), Some(0.5));
    /// assert_eq!(BillAmount::parse("-3"), None);
    /// assert_eq!(BillAmount::parse("1e3"), None);
    /// assert_eq!(BillAmount::parse(""), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() || !is_decimal_text(trimmed) {
            return None;
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self)
    }

    /// Parses bill text, substituting zero for anything unusable.
    pub fn parse_or_zero(text: &str) -> Self {
        Self::parse(text).unwrap_or(Self::ZERO)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// The bill-amount text field: the current text plus its error flag.
///
/// Only [`crate::InputValidator::apply`] mutates a field, so the text and
/// flag always reflect the most recent validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillAmountField {
    pub(crate) text: String,
    pub(crate) error: Option<BillAmountError>,
}

impl BillAmountField {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn error(&self) -> Option<&BillAmountError> {
        self.error.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Numeric value of the current text, zero when unusable.
    pub fn amount(&self) -> BillAmount {
        BillAmount::parse_or_zero(&self.text)
    }

    /// Empties the field and clears its error flag.
    pub fn clear(&mut self) {
        self.text.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_plain_decimals() {
        assert_eq!(BillAmount::parse("50.00"), Some(BillAmount(50.0)));
        assert_eq!(BillAmount::parse("50"), Some(BillAmount(50.0)));
        assert_eq!(BillAmount::parse("50."), Some(BillAmount(50.0)));
    }

    #[test]
    fn parse_rejects_lone_decimal_point() {
        assert_eq!(BillAmount::parse("."), None);
    }

    #[test]
    fn parse_rejects_interior_whitespace_and_letters() {
        assert_eq!(BillAmount::parse("1 000"), None);
        assert_eq!(BillAmount::parse("12a"), None);
        assert_eq!(BillAmount::parse("12.3.4"), None);
        assert_eq!(BillAmount::parse("NaN"), None);
        assert_eq!(BillAmount::parse("inf"), None);
    }

    #[test]
    fn parse_rejects_values_too_large_for_f64() {
        let huge = "9".repeat(400);

        assert_eq!(BillAmount::parse(&huge), None);
        assert_eq!(BillAmount::parse_or_zero(&huge), BillAmount::ZERO);
    }

    #[test]
    fn field_amount_falls_back_to_zero() {
        let field = BillAmountField {
            text: "abc".to_string(),
            error: None,
        };

        assert_eq!(field.amount(), BillAmount::ZERO);
    }

    #[test]
    fn clear_resets_text_and_flag() {
        let mut field = BillAmountField {
            text: "12".to_string(),
            error: Some(BillAmountError::Empty),
        };

        field.clear();

        assert_eq!(field, BillAmountField::default());
    }
}

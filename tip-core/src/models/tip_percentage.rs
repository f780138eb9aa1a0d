use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a percentage falls outside the slider range.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("tip percentage must be between {min} and {max}, got {value}")]
pub struct TipPercentageError {
    value: i64,
    min: u8,
    max: u8,
}

/// Whole-number tip percentage in the closed range `[0, 30]`.
///
/// The only way to obtain a value outside the default is through
/// [`TipPercentage::new`] (checked) or [`TipPercentage::from_slider`]
/// (clamped), so every instance is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct TipPercentage(u8);

impl TipPercentage {
    /// Lowest selectable percentage.
    pub const MIN: Self = Self(0);

    /// Highest selectable percentage.
    pub const MAX: Self = Self(30);

    /// Percentage selected when a session starts and after every reset.
    pub const DEFAULT: Self = Self(15);

    /// Creates a percentage, rejecting values outside `[0, 30]`.
    ///
    /// # Example
    ///
    /// ```
    /// use tip_core::TipPercentage;
    ///
    /// assert_eq!(TipPercentage::new(20).unwrap().value(), 20);
    /// assert!(TipPercentage::new(31).is_err());
    /// assert!(TipPercentage::new(-1).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, TipPercentageError> {
        if value < i64::from(Self::MIN.0) || value > i64::from(Self::MAX.0) {
            return Err(TipPercentageError {
                value,
                min: Self::MIN.0,
                max: Self::MAX.0,
            });
        }
        Ok(Self(value as u8))
    }

    /// Converts a slider position into a percentage.
    ///
    /// The slider reports a float in `[0.0, 30.0]`; the percentage is its
    /// integer part. Positions outside the track are clamped and `NaN`
    /// maps to the minimum.
    ///
    /// # Example
    ///
    /// ```
    /// use tip_core::TipPercentage;
    ///
    /// assert_eq!(TipPercentage::from_slider(17.9).value(), 17);
    /// assert_eq!(TipPercentage::from_slider(45.0).value(), 30);
    /// assert_eq!(TipPercentage::from_slider(-2.0).value(), 0);
    /// ```
    pub fn from_slider(position: f32) -> Self {
        if position.is_nan() {
            return Self::MIN;
        }
        // `as` saturates, so infinities land on the bounds below.
        let whole = position.trunc() as i64;
        Self(whole.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8)
    }

    /// The percentage as a whole number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The percentage as a multiplier, e.g. `0.15` for 15%.
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for TipPercentage {
    type Error = TipPercentageError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TipPercentage> for u8 {
    fn from(percentage: TipPercentage) -> Self {
        percentage.0
    }
}

impl fmt::Display for TipPercentage {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_accepts_bounds() {
        assert_eq!(TipPercentage::new(0).unwrap(), TipPercentage::MIN);
        assert_eq!(TipPercentage::new(30).unwrap(), TipPercentage::MAX);
    }

    #[test]
    fn new_rejects_out_of_range() {
        let err = TipPercentage::new(31).unwrap_err();

        assert_eq!(
            err.to_string(),
            "tip percentage must be between 0 and 30, got 31"
        );
        assert!(TipPercentage::new(-5).is_err());
    }

    #[test]
    fn default_is_fifteen() {
        assert_eq!(TipPercentage::default().value(), 15);
    }

    #[test]
    fn from_slider_truncates_toward_zero() {
        assert_eq!(TipPercentage::from_slider(0.99).value(), 0);
        assert_eq!(TipPercentage::from_slider(29.999).value(), 29);
        assert_eq!(TipPercentage::from_slider(30.0).value(), 30);
    }

    #[test]
    fn from_slider_clamps_and_handles_non_finite() {
        assert_eq!(TipPercentage::from_slider(f32::INFINITY), TipPercentage::MAX);
        assert_eq!(TipPercentage::from_slider(f32::NEG_INFINITY), TipPercentage::MIN);
        assert_eq!(TipPercentage::from_slider(f32::NAN), TipPercentage::MIN);
    }

    #[test]
    fn as_fraction_divides_by_hundred() {
        assert_eq!(TipPercentage::new(20).unwrap().as_fraction(), 0.2);
        assert_eq!(TipPercentage::MIN.as_fraction(), 0.0);
    }

    #[test]
    fn display_appends_percent_sign() {
        assert_eq!(TipPercentage::DEFAULT.to_string(), "15%");
    }
}

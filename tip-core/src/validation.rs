//! Bill-amount input validation.
//!
//! Every keystroke in the bill field produces a new candidate text. The
//! [`InputValidator`] decides, according to its [`ValidationPolicy`],
//! whether that text replaces the field contents and whether the field is
//! flagged as being in error.
//!
//! | Policy    | Matches pattern | Empty             | Anything else              |
//! |-----------|-----------------|-------------------|----------------------------|
//! | `lenient` | accepted        | accepted          | accepted (value 0.0)       |
//! | `strict`  | accepted        | accepted, flagged | rejected, previous kept    |
//!
//! The pattern is `^[0-9]*\.?[0-9]*$`, tested against the text with
//! surrounding whitespace removed.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::BillAmountField;

static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("decimal pattern is valid"));

/// Returns `true` if `text` is digits, an optional single decimal point,
/// and optional trailing digits. The empty string matches.
pub fn is_decimal_text(text: &str) -> bool {
    DECIMAL_PATTERN.is_match(text)
}

/// Why a bill-amount text was flagged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BillAmountError {
    /// The field is empty. Only raised under the strict policy.
    #[error("bill amount is required")]
    Empty,

    /// The text is not a plain non-negative decimal number.
    #[error("invalid bill amount '{input}'")]
    Malformed { input: String },
}

/// How malformed bill-amount text is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject malformed text, keep the previous text and flag the field.
    #[default]
    Strict,
    /// Accept any text; malformed text counts as a zero bill.
    Lenient,
}

impl ValidationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a policy name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown validation policy '{0}' (expected 'strict' or 'lenient')")]
pub struct ParsePolicyError(String);

impl FromStr for ValidationPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Result of validating one candidate text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The text replaces the field contents; the field is not flagged.
    Accepted,
    /// The text replaces the field contents, but the field is flagged.
    Flagged(BillAmountError),
    /// The text is discarded; the previous contents stay and the field is
    /// flagged.
    Rejected(BillAmountError),
}

impl ValidationOutcome {
    /// Whether the candidate text becomes the new field contents.
    pub fn keeps_input(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    pub fn error(&self) -> Option<&BillAmountError> {
        match self {
            Self::Accepted => None,
            Self::Flagged(e) | Self::Rejected(e) => Some(e),
        }
    }
}

/// Applies a [`ValidationPolicy`] to candidate bill-amount texts.
///
/// # Example
///
/// ```
/// use tip_core::{BillAmountField, InputValidator, ValidationOutcome, ValidationPolicy};
///
/// let validator = InputValidator::new(ValidationPolicy::Strict);
/// let mut field = BillAmountField::default();
///
/// assert_eq!(validator.apply(&mut field, "12.34"), ValidationOutcome::Accepted);
/// assert!(!validator.apply(&mut field, "12.3.4").keeps_input());
/// assert_eq!(field.text(), "12.34");
/// assert!(field.is_error());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputValidator {
    policy: ValidationPolicy,
}

impl InputValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Classifies `text` without touching any state.
    pub fn validate(
        &self,
        text: &str,
    ) -> ValidationOutcome {
        let trimmed = text.trim();
        match self.policy {
            ValidationPolicy::Lenient => ValidationOutcome::Accepted,
            ValidationPolicy::Strict if trimmed.is_empty() => {
                ValidationOutcome::Flagged(BillAmountError::Empty)
            }
            ValidationPolicy::Strict if is_decimal_text(trimmed) => ValidationOutcome::Accepted,
            ValidationPolicy::Strict => ValidationOutcome::Rejected(BillAmountError::Malformed {
                input: text.to_string(),
            }),
        }
    }

    /// Validates `text` and updates `field` accordingly.
    ///
    /// Accepted and flagged texts replace the field contents. Rejected
    /// texts leave the contents untouched. The error flag always reflects
    /// this outcome.
    pub fn apply(
        &self,
        field: &mut BillAmountField,
        text: &str,
    ) -> ValidationOutcome {
        let outcome = self.validate(text);

        if outcome.keeps_input() {
            field.text = text.to_string();
            debug!(input = %text, policy = %self.policy, "bill amount updated");
        } else {
            warn!(input = %text, kept = %field.text, "bill amount rejected");
        }
        field.error = outcome.error().cloned();

        outcome
    }
}

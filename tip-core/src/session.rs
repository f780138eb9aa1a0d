//! The calculator session: all state for one interactive use.
//!
//! A session moves between two states:
//!
//! ```text
//!            calculate
//!   Editing ───────────▶ ResultShown
//!      ▲                     │
//!      └─────────────────────┘
//!        reset (clears bill, percentage back to 15)
//! ```
//!
//! The bill text and percentage may be edited in either state. The tip is
//! never stored; [`TipSession::tip_amount`] recomputes it on every read, so
//! a result on screen always reflects the current inputs.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{
    calculations::{format_currency, tip_for_amount},
    models::{BillAmountField, TipPercentage},
    validation::{InputValidator, ValidationOutcome, ValidationPolicy},
};

/// Which half of the screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Editing,
    ResultShown,
}

impl fmt::Display for SessionState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Editing => f.write_str("editing"),
            Self::ResultShown => f.write_str("result shown"),
        }
    }
}

/// The action button offered in a given state. Exactly one is offered at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Calculate,
    Reset,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Calculate => "Calculate Tip",
            Self::Reset => "Reset",
        }
    }
}

/// Plain-data view of a session, for assertions and serialisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub bill_amount: String,
    pub tip_percentage: u8,
    pub result_visible: bool,
    pub input_error: bool,
    pub tip_amount: f64,
}

/// State owned by one calculator session.
#[derive(Debug, Clone, Default)]
pub struct TipSession {
    validator: InputValidator,
    bill: BillAmountField,
    percentage: TipPercentage,
    state: SessionState,
}

impl TipSession {
    /// Starts a session in the `Editing` state with an empty bill and the
    /// default percentage.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            validator: InputValidator::new(policy),
            ..Default::default()
        }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.validator.policy()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn result_visible(&self) -> bool {
        self.state == SessionState::ResultShown
    }

    pub fn bill(&self) -> &BillAmountField {
        &self.bill
    }

    pub fn percentage(&self) -> TipPercentage {
        self.percentage
    }

    /// The action button currently offered.
    pub fn available_action(&self) -> Action {
        match self.state {
            SessionState::Editing => Action::Calculate,
            SessionState::ResultShown => Action::Reset,
        }
    }

    /// Replaces the bill text, subject to the session's validation policy.
    pub fn edit_bill(
        &mut self,
        text: &str,
    ) -> ValidationOutcome {
        self.validator.apply(&mut self.bill, text)
    }

    /// Sets the percentage directly.
    pub fn set_percentage(
        &mut self,
        percentage: TipPercentage,
    ) {
        debug!(%percentage, "tip percentage set");
        self.percentage = percentage;
    }

    /// Moves the slider to `position` and returns the resulting percentage.
    pub fn slide(
        &mut self,
        position: f32,
    ) -> TipPercentage {
        self.set_percentage(TipPercentage::from_slider(position));
        self.percentage
    }

    /// The tip for the current inputs, recomputed on every call.
    pub fn tip_amount(&self) -> f64 {
        tip_for_amount(self.bill.amount(), self.percentage)
    }

    /// Shows the result and returns the tip.
    ///
    /// Not gated on the bill field's error flag: a flagged or empty field
    /// simply calculates against a zero bill. Calling this while the result
    /// is already shown leaves the state unchanged.
    pub fn calculate(&mut self) -> f64 {
        if self.state == SessionState::ResultShown {
            debug!("calculate requested while result already shown");
        }
        self.transition(SessionState::ResultShown);
        self.tip_amount()
    }

    /// Hides the result, empties the bill and restores the default
    /// percentage.
    pub fn reset(&mut self) {
        self.bill.clear();
        self.percentage = TipPercentage::DEFAULT;
        self.transition(SessionState::Editing);
    }

    /// The formatted tip while the result is shown, `None` otherwise.
    pub fn display_tip(
        &self,
        currency_symbol: &str,
    ) -> Option<String> {
        self.result_visible()
            .then(|| format_currency(self.tip_amount(), currency_symbol))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            bill_amount: self.bill.text().to_string(),
            tip_percentage: self.percentage.value(),
            result_visible: self.result_visible(),
            input_error: self.bill.is_error(),
            tip_amount: self.tip_amount(),
        }
    }

    fn transition(
        &mut self,
        to: SessionState,
    ) {
        if self.state != to {
            debug!(from = %self.state, %to, "session state changed");
            self.state = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pct(value: i64) -> TipPercentage {
        TipPercentage::new(value).unwrap()
    }

    fn reset_snapshot() -> SessionSnapshot {
        SessionSnapshot {
            bill_amount: String::new(),
            tip_percentage: 15,
            result_visible: false,
            input_error: false,
            tip_amount: 0.0,
        }
    }

    #[test]
    fn new_session_starts_editing_with_defaults() {
        let session = TipSession::new(ValidationPolicy::Strict);

        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.available_action(), Action::Calculate);
        assert_eq!(session.snapshot(), reset_snapshot());
    }

    #[test]
    fn calculate_shows_result_and_offers_reset() {
        let mut session = TipSession::default();
        session.edit_bill("50.00");
        session.set_percentage(pct(20));

        let tip = session.calculate();

        assert_eq!(tip, 10.0);
        assert_eq!(session.state(), SessionState::ResultShown);
        assert_eq!(session.available_action(), Action::Reset);
        assert_eq!(session.display_tip("$").as_deref(), Some("$10.00"));
    }

    #[test]
    fn display_tip_hidden_while_editing() {
        let mut session = TipSession::default();
        session.edit_bill("50");

        assert_eq!(session.display_tip("$"), None);
    }

    #[test]
    fn calculate_is_not_gated_by_error_flag() {
        let mut session = TipSession::new(ValidationPolicy::Strict);
        session.edit_bill("");
        assert!(session.bill().is_error());

        let tip = session.calculate();

        assert_eq!(tip, 0.0);
        assert!(session.result_visible());
        assert_eq!(session.display_tip("$").as_deref(), Some("$0.00"));
    }

    #[test]
    fn calculate_twice_stays_in_result_shown() {
        let mut session = TipSession::default();
        session.calculate();
        session.calculate();

        assert_eq!(session.state(), SessionState::ResultShown);
    }

    #[test]
    fn reset_after_edits_restores_defaults() {
        let mut session = TipSession::new(ValidationPolicy::Strict);
        session.edit_bill("12");
        session.edit_bill("12.5");
        session.edit_bill("12.5x");
        session.slide(27.4);
        session.calculate();
        session.edit_bill("99");

        session.reset();

        assert_eq!(session.snapshot(), reset_snapshot());
        assert_eq!(session.available_action(), Action::Calculate);
    }

    #[test]
    fn reset_while_editing_still_clears_inputs() {
        let mut session = TipSession::new(ValidationPolicy::Lenient);
        session.edit_bill("abc");
        session.set_percentage(TipPercentage::MAX);

        session.reset();

        assert_eq!(session.snapshot(), reset_snapshot());
    }

    #[test]
    fn displayed_tip_follows_edits_after_calculate() {
        let mut session = TipSession::default();
        session.edit_bill("100");
        session.calculate();
        assert_eq!(session.display_tip("$").as_deref(), Some("$15.00"));

        session.slide(10.0);
        assert_eq!(session.display_tip("$").as_deref(), Some("$10.00"));

        session.edit_bill("40");
        assert_eq!(session.display_tip("$").as_deref(), Some("$4.00"));
    }

    #[test]
    fn strict_rejection_keeps_previous_bill_for_calculation() {
        let mut session = TipSession::new(ValidationPolicy::Strict);
        session.edit_bill("12.34");

        let outcome = session.edit_bill("12.3.4");

        assert!(!outcome.keeps_input());
        assert_eq!(session.bill().text(), "12.34");
        assert!(session.snapshot().input_error);
        assert!((session.tip_amount() - 12.34 * 0.15).abs() < 1e-9);
    }

    #[test]
    fn lenient_malformed_bill_counts_as_zero() {
        let mut session = TipSession::new(ValidationPolicy::Lenient);
        session.edit_bill("12a");

        assert_eq!(session.bill().text(), "12a");
        assert!(!session.bill().is_error());
        assert_eq!(session.calculate(), 0.0);
    }

    #[test]
    fn slide_truncates_position() {
        let mut session = TipSession::default();

        assert_eq!(session.slide(22.8), pct(22));
        assert_eq!(session.percentage(), pct(22));
    }
}

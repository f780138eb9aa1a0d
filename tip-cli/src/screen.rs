//! Text rendering of the calculator screen.

use std::fmt::Write;

use tip_core::{TipPercentage, TipSession};

pub const TITLE: &str = "Tip Calculator";
pub const INVALID_INPUT: &str = "Invalid input";

/// Renders the whole screen for the current session state.
///
/// ```text
/// Tip Calculator
///
/// Bill Amount: [50.00]
/// 0 |--------------------o----------| 30
/// Tip Percentage: 20%
///
/// Tip Amount: $10.00
/// [ Reset ]
/// ```
pub fn render(
    session: &TipSession,
    currency_symbol: &str,
) -> String {
    let mut out = String::new();
    let bill = session.bill();

    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Bill Amount: [{}]", bill.text());
    if bill.is_error() {
        let _ = writeln!(out, "  {INVALID_INPUT}");
    }
    let _ = writeln!(out, "{}", slider_bar(session.percentage()));
    let _ = writeln!(out, "{}", percentage_label(session.percentage()));
    let _ = writeln!(out);
    if let Some(tip) = session.display_tip(currency_symbol) {
        let _ = writeln!(out, "Tip Amount: {tip}");
    }
    let _ = writeln!(out, "[ {} ]", session.available_action().label());

    out
}

pub fn percentage_label(percentage: TipPercentage) -> String {
    format!("Tip Percentage: {percentage}")
}

/// Draws the slider track with one position per whole percentage.
pub fn slider_bar(percentage: TipPercentage) -> String {
    let track: String = (TipPercentage::MIN.value()..=TipPercentage::MAX.value())
        .map(|step| if step == percentage.value() { 'o' } else { '-' })
        .collect();
    format!(
        "{} |{}| {}",
        TipPercentage::MIN.value(),
        track,
        TipPercentage::MAX.value()
    )
}

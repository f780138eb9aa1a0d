//! Tip calculation and currency formatting.
//!
//! Everything here is pure: no state, no I/O. Rounding only happens in
//! [`common::format_currency`], at display time.

pub mod common;
pub mod tip;

pub use common::{format_currency, round_half_up};
pub use tip::{calculate_tip, tip_for_amount};

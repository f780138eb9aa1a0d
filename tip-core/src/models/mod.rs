mod bill_amount;
mod tip_percentage;

pub use bill_amount::{BillAmount, BillAmountField};
pub use tip_percentage::{TipPercentage, TipPercentageError};

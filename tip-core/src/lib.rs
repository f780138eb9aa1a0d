pub mod calculations;
pub mod models;
pub mod session;
pub mod validation;

pub use calculations::{calculate_tip, format_currency, tip_for_amount};
pub use models::*;
pub use session::{Action, SessionSnapshot, SessionState, TipSession};
pub use validation::{
    BillAmountError, InputValidator, ParsePolicyError, ValidationOutcome, ValidationPolicy,
    is_decimal_text,
};

pub mod calculations;
pub mod calculator;
pub mod format;
pub mod input;
pub mod models;

pub use calculations::{ContributionCalculator, calculate_contributions};
pub use calculator::EarningsCalculator;
pub use format::{CURRENCY_CODE, format_currency, format_currency_f64};
pub use input::{MAX_EARNINGS, is_acceptable_earnings_input, parse_earnings};
pub use models::*;

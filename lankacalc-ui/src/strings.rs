//! User-facing text shared by the window and the plain-text report.

pub const WINDOW_TITLE: &str = "LankaCalc - EPF/ETF Calculator";
pub const CARD_TITLE: &str = "LankaCalc V01";
pub const CARD_DESCRIPTION: &str = "EPF & ETF Contribution Calculator for Sri Lanka";

pub const EARNINGS_LABEL: &str = "Total Monthly Earnings (LKR)";
pub const EARNINGS_PLACEHOLDER: &str = "e.g., 50000";
pub const EARNINGS_HELP: &str = "Total earnings include your basic salary plus any fixed \
    allowances. Overtime payments and bonuses are typically excluded for EPF/ETF calculation \
    purposes, but consult official guidelines for specifics.";

pub const EARNINGS_TOO_LARGE: &str = "Earnings exceed the largest supported amount; \
    contributions are shown as zero.";

pub const BREAKDOWN_HEADING: &str = "Contribution Breakdown";
pub const SUMMARY_HEADING: &str = "Salary Summary";

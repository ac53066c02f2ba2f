//! Contribution calculation modules for Sri Lankan EPF/ETF payroll.
//!
//! This module provides the arithmetic that turns a monthly earnings figure
//! into employee and employer contributions, along with the shared rounding
//! helpers used by both the calculations and the display layer.

pub mod common;
pub mod contributions;

pub use contributions::{ContributionCalculator, calculate_contributions};

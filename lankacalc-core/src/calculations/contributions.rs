//! EPF/ETF contribution calculations.
//!
//! Derives the five payroll amounts from one month's total earnings:
//!
//! | Amount        | Derivation                          |
//! |---------------|-------------------------------------|
//! | Employee EPF  | Earnings × 8%                       |
//! | Employer EPF  | Earnings × 12%                      |
//! | Employer ETF  | Earnings × 3%                       |
//! | Total EPF     | Employee EPF + Employer EPF (20%)   |
//! | Net salary    | Earnings − Employee EPF (92%)       |
//!
//! Every rate-based amount is rounded to cents before it is combined, so the
//! totals hold exactly for the values a user sees on screen.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use lankacalc_core::ContributionCalculator;
//!
//! let calculator = ContributionCalculator::statutory();
//! let result = calculator.calculate(Some(dec!(50000)));
//!
//! assert_eq!(result.employee_epf, dec!(4000.00));
//! assert_eq!(result.total_epf, dec!(10000.00));
//! assert_eq!(result.net_salary, dec!(46000.00));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{ContributionRates, ContributionSet, RatesError, calculations::common::round_half_up};

/// Computes [`ContributionSet`]s from earnings using a fixed set of rates.
#[derive(Debug, Clone, Default)]
pub struct ContributionCalculator {
    rates: ContributionRates,
}

impl ContributionCalculator {
    /// Creates a calculator for the given rates.
    ///
    /// # Errors
    ///
    /// Returns [`RatesError`] if any rate lies outside `[0, 1]`.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use lankacalc_core::{ContributionCalculator, ContributionRates, RatesError};
    ///
    /// let rates = ContributionRates {
    ///     employer_etf: dec!(3),
    ///     ..ContributionRates::statutory()
    /// };
    /// let result = ContributionCalculator::new(rates);
    ///
    /// assert_eq!(result.unwrap_err(), RatesError::InvalidEmployerEtfRate(dec!(3)));
    /// ```
    pub fn new(rates: ContributionRates) -> Result<Self, RatesError> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Creates a calculator using [`ContributionRates::statutory`].
    pub fn statutory() -> Self {
        Self {
            rates: ContributionRates::statutory(),
        }
    }

    /// The rates this calculator applies.
    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }

    /// Derives all five amounts from `earnings`.
    ///
    /// Absent or negative earnings produce [`ContributionSet::zero`]. So does
    /// an amount too large for the arithmetic to stay in range.
    ///
    /// # Example: absent earnings
    ///
    /// ```
    /// use lankacalc_core::{ContributionCalculator, ContributionSet};
    ///
    /// let result = ContributionCalculator::statutory().calculate(None);
    /// assert_eq!(result, ContributionSet::zero());
    /// ```
    pub fn calculate(
        &self,
        earnings: Option<Decimal>,
    ) -> ContributionSet {
        let Some(earnings) = earnings else {
            return ContributionSet::zero();
        };
        if earnings < Decimal::ZERO {
            debug!(earnings = %earnings, "negative earnings; contributions reset to zero");
            return ContributionSet::zero();
        }

        match self.try_calculate(earnings) {
            Some(set) => set,
            None => {
                warn!(earnings = %earnings, "earnings out of range; contributions reset to zero");
                ContributionSet::zero()
            }
        }
    }

    fn try_calculate(
        &self,
        earnings: Decimal,
    ) -> Option<ContributionSet> {
        let employee_epf = self.apply_rate(earnings, self.rates.employee_epf)?;
        let employer_epf = self.apply_rate(earnings, self.rates.employer_epf)?;
        let employer_etf = self.apply_rate(earnings, self.rates.employer_etf)?;
        let total_epf = self.total_epf(employee_epf, employer_epf)?;
        let net_salary = self.net_salary(earnings, employee_epf)?;

        Some(ContributionSet {
            employee_epf,
            employer_epf,
            employer_etf,
            total_epf,
            net_salary,
        })
    }

    /// Earnings × rate, rounded to cents.
    fn apply_rate(
        &self,
        earnings: Decimal,
        rate: Decimal,
    ) -> Option<Decimal> {
        earnings.checked_mul(rate).map(round_half_up)
    }

    /// Employee EPF + employer EPF. Both inputs are already rounded.
    fn total_epf(
        &self,
        employee_epf: Decimal,
        employer_epf: Decimal,
    ) -> Option<Decimal> {
        employee_epf.checked_add(employer_epf)
    }

    /// Rounded earnings − employee EPF.
    ///
    /// The employee share never exceeds the rounded earnings, so the result
    /// is nonnegative for any nonnegative input.
    fn net_salary(
        &self,
        earnings: Decimal,
        employee_epf: Decimal,
    ) -> Option<Decimal> {
        round_half_up(earnings).checked_sub(employee_epf)
    }
}

/// Derives contributions for `earnings` at the statutory rates.
pub fn calculate_contributions(earnings: Decimal) -> ContributionSet {
    ContributionCalculator::statutory().calculate(Some(earnings))
}

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_currency;

/// The five amounts derived from one monthly earnings figure.
///
/// A set is always produced whole by
/// [`ContributionCalculator`](crate::ContributionCalculator); there is no way
/// to update a single field in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionSet {
    /// Employee's EPF contribution (8% of earnings).
    pub employee_epf: Decimal,
    /// Employer's EPF contribution (12% of earnings).
    pub employer_epf: Decimal,
    /// Employer's ETF contribution (3% of earnings).
    pub employer_etf: Decimal,
    /// `employee_epf + employer_epf`.
    pub total_epf: Decimal,
    /// Earnings minus `employee_epf`.
    pub net_salary: Decimal,
}

impl ContributionSet {
    /// The result used whenever there is no usable earnings value.
    pub const fn zero() -> Self {
        Self {
            employee_epf: Decimal::ZERO,
            employer_epf: Decimal::ZERO,
            employer_etf: Decimal::ZERO,
            total_epf: Decimal::ZERO,
            net_salary: Decimal::ZERO,
        }
    }

    /// Returns `true` when every amount is zero.
    pub fn is_zero(&self) -> bool {
        self.employee_epf.is_zero()
            && self.employer_epf.is_zero()
            && self.employer_etf.is_zero()
            && self.total_epf.is_zero()
            && self.net_salary.is_zero()
    }

    /// Formats all five amounts as currency strings.
    pub fn formatted(&self) -> FormattedContributions {
        FormattedContributions {
            employee_epf: format_currency(self.employee_epf),
            employer_epf: format_currency(self.employer_epf),
            employer_etf: format_currency(self.employer_etf),
            total_epf: format_currency(self.total_epf),
            net_salary: format_currency(self.net_salary),
        }
    }
}

impl Default for ContributionSet {
    fn default() -> Self {
        Self::zero()
    }
}

/// Display-ready counterpart of [`ContributionSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedContributions {
    pub employee_epf: String,
    pub employer_epf: String,
    pub employer_etf: String,
    pub total_epf: String,
    pub net_salary: String,
}

impl fmt::Display for FormattedContributions {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Employee EPF: {}", self.employee_epf)?;
        writeln!(f, "Employer EPF: {}", self.employer_epf)?;
        writeln!(f, "Employer ETF: {}", self.employer_etf)?;
        writeln!(f, "Total EPF:    {}", self.total_epf)?;
        write!(f, "Net salary:   {}", self.net_salary)
    }
}

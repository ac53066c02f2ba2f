use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a set of contribution rates is not usable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatesError {
    #[error("employee EPF rate must be between 0 and 1, got {0}")]
    InvalidEmployeeEpfRate(Decimal),

    #[error("employer EPF rate must be between 0 and 1, got {0}")]
    InvalidEmployerEpfRate(Decimal),

    #[error("employer ETF rate must be between 0 and 1, got {0}")]
    InvalidEmployerEtfRate(Decimal),
}

/// Percentage rates applied to total monthly earnings.
///
/// Rates are stored as fractions (`0.08` is 8%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Employee's own EPF contribution, deducted from take-home pay.
    pub employee_epf: Decimal,

    /// Employer's EPF contribution, paid on top of earnings.
    pub employer_epf: Decimal,

    /// Employer's ETF contribution, paid on top of earnings.
    pub employer_etf: Decimal,
}

impl ContributionRates {
    /// The statutory Sri Lankan rates: EPF 8% + 12%, ETF 3%.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use lankacalc_core::ContributionRates;
    ///
    /// let rates = ContributionRates::statutory();
    /// assert_eq!(rates.employee_epf, dec!(0.08));
    /// assert_eq!(rates.total_epf(), dec!(0.20));
    /// ```
    pub fn statutory() -> Self {
        Self {
            employee_epf: Decimal::new(8, 2),
            employer_epf: Decimal::new(12, 2),
            employer_etf: Decimal::new(3, 2),
        }
    }

    /// Combined EPF rate (employee + employer).
    pub fn total_epf(&self) -> Decimal {
        self.employee_epf + self.employer_epf
    }

    /// Checks every rate lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), RatesError> {
        if !is_fraction(self.employee_epf) {
            return Err(RatesError::InvalidEmployeeEpfRate(self.employee_epf));
        }
        if !is_fraction(self.employer_epf) {
            return Err(RatesError::InvalidEmployerEpfRate(self.employer_epf));
        }
        if !is_fraction(self.employer_etf) {
            return Err(RatesError::InvalidEmployerEtfRate(self.employer_etf));
        }
        Ok(())
    }

    /// Renders a rate as a percentage label, e.g. `0.08` as `"8%"`.
    pub fn percent_label(rate: Decimal) -> String {
        format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
    }
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self::statutory()
    }
}

fn is_fraction(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= Decimal::ONE
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn statutory_rates_match_published_percentages() {
        let rates = ContributionRates::statutory();

        assert_eq!(rates.employee_epf, dec!(0.08));
        assert_eq!(rates.employer_epf, dec!(0.12));
        assert_eq!(rates.employer_etf, dec!(0.03));
    }

    #[test]
    fn default_is_statutory() {
        assert_eq!(ContributionRates::default(), ContributionRates::statutory());
    }

    #[test]
    fn validate_accepts_statutory_rates() {
        assert_eq!(ContributionRates::statutory().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_employee_rate() {
        let rates = ContributionRates {
            employee_epf: dec!(-0.08),
            ..ContributionRates::statutory()
        };

        assert_eq!(
            rates.validate(),
            Err(RatesError::InvalidEmployeeEpfRate(dec!(-0.08)))
        );
    }

    #[test]
    fn validate_rejects_employer_rate_above_one() {
        let rates = ContributionRates {
            employer_epf: dec!(1.2),
            ..ContributionRates::statutory()
        };

        assert_eq!(
            rates.validate(),
            Err(RatesError::InvalidEmployerEpfRate(dec!(1.2)))
        );
    }

    #[test]
    fn validate_rejects_etf_rate_above_one() {
        let rates = ContributionRates {
            employer_etf: dec!(3),
            ..ContributionRates::statutory()
        };

        assert_eq!(
            rates.validate(),
            Err(RatesError::InvalidEmployerEtfRate(dec!(3)))
        );
    }

    #[test]
    fn validate_accepts_boundary_rates() {
        let rates = ContributionRates {
            employee_epf: dec!(0),
            employer_epf: dec!(1),
            employer_etf: dec!(0),
        };

        assert_eq!(rates.validate(), Ok(()));
    }

    #[test]
    fn percent_label_drops_trailing_zeros() {
        assert_eq!(ContributionRates::percent_label(dec!(0.08)), "8%");
        assert_eq!(ContributionRates::percent_label(dec!(0.20)), "20%");
        assert_eq!(ContributionRates::percent_label(dec!(0.025)), "2.5%");
    }
}

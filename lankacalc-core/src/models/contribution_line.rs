use serde::{Deserialize, Serialize};

use crate::{ContributionRates, ContributionSet, format::format_currency};

/// One labelled row of the calculator card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLine {
    pub label: &'static str,
    /// Formatted currency amount, e.g. `"LKR 4000.00"`.
    pub value: String,
    /// Short explanation of how the amount is derived.
    pub details: String,
}

impl ContributionLine {
    fn new(
        label: &'static str,
        value: String,
        details: String,
    ) -> Self {
        Self {
            label,
            value,
            details,
        }
    }

    /// Rows for the individual contributions: employee EPF, employer EPF and
    /// employer ETF.
    pub fn breakdown(
        set: &ContributionSet,
        rates: &ContributionRates,
    ) -> Vec<Self> {
        vec![
            Self::new(
                "Employee EPF",
                format_currency(set.employee_epf),
                of_total_earnings(rates.employee_epf),
            ),
            Self::new(
                "Employer EPF",
                format_currency(set.employer_epf),
                of_total_earnings(rates.employer_epf),
            ),
            Self::new(
                "Employer ETF",
                format_currency(set.employer_etf),
                of_total_earnings(rates.employer_etf),
            ),
        ]
    }

    /// Rows for the totals: combined EPF and take-home pay.
    pub fn summary(
        set: &ContributionSet,
        rates: &ContributionRates,
    ) -> Vec<Self> {
        vec![
            Self::new(
                "Total EPF Contribution",
                format_currency(set.total_epf),
                format!(
                    "Employee ({}) + Employer ({}) = {}",
                    ContributionRates::percent_label(rates.employee_epf),
                    ContributionRates::percent_label(rates.employer_epf),
                    ContributionRates::percent_label(rates.total_epf()),
                ),
            ),
            Self::new(
                "Net Salary (Take-Home)",
                format_currency(set.net_salary),
                "Total Earnings - Employee EPF".to_string(),
            ),
        ]
    }
}

fn of_total_earnings(rate: rust_decimal::Decimal) -> String {
    format!("{} of Total Earnings", ContributionRates::percent_label(rate))
}

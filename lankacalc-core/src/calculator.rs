//! Input state for the earnings form.
//!
//! [`EarningsCalculator`] owns the text the user is editing and the
//! contributions derived from it. The view layer calls [`EarningsCalculator::update`]
//! after every edit and renders whatever the calculator holds afterwards.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    ContributionCalculator, ContributionLine, ContributionRates, ContributionSet,
    FormattedContributions,
    input::{exceeds_max_earnings, is_acceptable_earnings_input, parse_earnings},
};

/// Raw earnings text plus the contributions derived from it.
///
/// The raw text always satisfies [`is_acceptable_earnings_input`], and the
/// contributions always correspond to the current raw text.
///
/// ```
/// use lankacalc_core::EarningsCalculator;
///
/// let mut calculator = EarningsCalculator::new();
/// calculator.update("50000");
/// calculator.update("50000x"); // rejected, nothing changes
///
/// assert_eq!(calculator.raw_input(), "50000");
/// assert_eq!(calculator.formatted().net_salary, "LKR 46000.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EarningsCalculator {
    raw_input: String,
    earnings: Option<Decimal>,
    contributions: ContributionSet,
    calculator: ContributionCalculator,
}

impl EarningsCalculator {
    /// An empty form at the statutory rates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers `candidate` as the new earnings text.
    ///
    /// Text rejected by [`is_acceptable_earnings_input`] is discarded and the
    /// previous state is kept. Accepted text replaces the raw input and the
    /// contributions are recomputed in full.
    pub fn update(
        &mut self,
        candidate: &str,
    ) -> &ContributionSet {
        if !is_acceptable_earnings_input(candidate) {
            debug!(candidate, "earnings edit rejected");
            return &self.contributions;
        }

        self.raw_input.clear();
        self.raw_input.push_str(candidate);
        self.earnings = parse_earnings(candidate);
        self.contributions = self.calculator.calculate(self.earnings);
        debug!(
            raw = %self.raw_input,
            net_salary = %self.contributions.net_salary,
            "contributions recalculated"
        );
        &self.contributions
    }

    /// Returns `true` if [`update`](Self::update) would accept `candidate`.
    pub fn accepts(
        &self,
        candidate: &str,
    ) -> bool {
        is_acceptable_earnings_input(candidate)
    }

    /// Resets to an empty input and all-zero contributions.
    pub fn clear(&mut self) {
        self.update("");
    }

    /// The last accepted earnings text, exactly as typed.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Parsed earnings, `None` when the raw text is not a usable amount.
    pub fn earnings(&self) -> Option<Decimal> {
        self.earnings
    }

    /// Returns `true` when the raw text is a number wider than
    /// [`MAX_EARNINGS`](crate::input::MAX_EARNINGS), which is why the
    /// contributions read zero.
    pub fn exceeds_max_earnings(&self) -> bool {
        self.earnings.is_none() && exceeds_max_earnings(&self.raw_input)
    }

    /// Contributions derived from [`raw_input`](Self::raw_input).
    pub fn contributions(&self) -> &ContributionSet {
        &self.contributions
    }

    /// Rates used for the derivation.
    pub fn rates(&self) -> &ContributionRates {
        self.calculator.rates()
    }

    /// Current contributions as `"LKR 0.00"` strings.
    pub fn formatted(&self) -> FormattedContributions {
        self.contributions.formatted()
    }

    /// Card rows for the individual contributions.
    pub fn breakdown(&self) -> Vec<ContributionLine> {
        ContributionLine::breakdown(&self.contributions, self.rates())
    }

    /// Card rows for total EPF and take-home pay.
    pub fn summary(&self) -> Vec<ContributionLine> {
        ContributionLine::summary(&self.contributions, self.rates())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn calculator_with(raw: &str) -> EarningsCalculator {
        let mut calculator = EarningsCalculator::new();
        calculator.update(raw);
        calculator
    }

    #[test]
    fn new_calculator_is_empty_and_zero() {
        let calculator = EarningsCalculator::new();

        assert_eq!(calculator.raw_input(), "");
        assert_eq!(calculator.earnings(), None);
        assert!(calculator.contributions().is_zero());
    }

    #[test]
    fn update_accepts_numeric_text() {
        let calculator = calculator_with("50000");

        assert_eq!(calculator.raw_input(), "50000");
        assert_eq!(calculator.earnings(), Some(dec!(50000)));
        assert_eq!(calculator.contributions().employer_etf, dec!(1500.00));
    }

    #[test]
    fn update_rejects_invalid_text_and_keeps_state() {
        for rejected in ["12a", "-5", "5..5"] {
            let mut calculator = calculator_with("50000");
            let before = *calculator.contributions();

            calculator.update(rejected);

            assert_eq!(calculator.raw_input(), "50000", "after {rejected:?}");
            assert_eq!(calculator.contributions(), &before, "after {rejected:?}");
        }
    }

    #[test]
    fn update_with_empty_text_resets_to_zero() {
        let mut calculator = calculator_with("50000");

        calculator.update("");

        assert_eq!(calculator.raw_input(), "");
        assert!(calculator.contributions().is_zero());
    }

    #[test]
    fn update_with_lone_point_is_accepted_but_zero() {
        let calculator = calculator_with(".");

        assert_eq!(calculator.raw_input(), ".");
        assert_eq!(calculator.earnings(), None);
        assert!(calculator.contributions().is_zero());
    }

    #[test]
    fn update_is_idempotent() {
        let mut calculator = EarningsCalculator::new();

        let first = *calculator.update("1234.56");
        let second = *calculator.update("1234.56");

        assert_eq!(first, second);
    }

    #[test]
    fn update_follows_keystrokes() {
        let mut calculator = EarningsCalculator::new();

        for partial in ["5", "50", "500", "5000", "50000"] {
            calculator.update(partial);
        }

        assert_eq!(calculator.formatted().employee_epf, "LKR 4000.00");
    }

    #[test]
    fn clear_resets_input_and_contributions() {
        let mut calculator = calculator_with("75000");

        calculator.clear();

        assert_eq!(calculator.raw_input(), "");
        assert!(calculator.contributions().is_zero());
    }

    #[test]
    fn accepts_mirrors_input_filter() {
        let calculator = EarningsCalculator::new();

        assert!(calculator.accepts("1.5"));
        assert!(!calculator.accepts("1.5.5"));
    }

    #[test]
    fn update_formats_very_large_earnings_with_two_decimals() {
        for raw in ["1000000000000000000000000000", "79228162514264337593543950335"] {
            let calculator = calculator_with(raw);
            let formatted = calculator.formatted();

            assert!(!calculator.contributions().is_zero(), "for {raw:?}");
            for value in [
                &formatted.employee_epf,
                &formatted.employer_epf,
                &formatted.employer_etf,
                &formatted.total_epf,
                &formatted.net_salary,
            ] {
                assert!(value.starts_with("LKR "), "{value:?} for {raw:?}");
                let (_, fraction) = value.rsplit_once('.').unwrap();
                assert_eq!(fraction.len(), 2, "{value:?} for {raw:?}");
                assert!(fraction.bytes().all(|b| b.is_ascii_digit()), "{value:?}");
            }
        }
    }

    #[test]
    fn update_beyond_max_earnings_keeps_text_and_reports_zero() {
        let calculator = calculator_with("100000000000000000000000000000");

        assert_eq!(calculator.raw_input(), "100000000000000000000000000000");
        assert_eq!(calculator.earnings(), None);
        assert!(calculator.exceeds_max_earnings());
        assert_eq!(calculator.contributions(), &ContributionSet::zero());
        assert_eq!(calculator.formatted().net_salary, "LKR 0.00");
    }

    #[test]
    fn exceeds_max_earnings_is_false_for_ordinary_input() {
        assert!(!calculator_with("50000").exceeds_max_earnings());
        assert!(!calculator_with(".").exceeds_max_earnings());
        assert!(!EarningsCalculator::new().exceeds_max_earnings());
    }

    #[test]
    fn breakdown_and_summary_reflect_current_values() {
        let calculator = calculator_with("50000");

        let breakdown = calculator.breakdown();
        let summary = calculator.summary();

        assert_eq!(breakdown[1].value, "LKR 6000.00");
        assert_eq!(summary[0].value, "LKR 10000.00");
        assert_eq!(summary[1].value, "LKR 46000.00");
    }
}

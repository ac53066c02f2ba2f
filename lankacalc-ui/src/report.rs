//! Plain-text rendering of the calculator card for headless use.

use std::fmt;

use lankacalc_core::{ContributionLine, EarningsCalculator, format_currency};
use rust_decimal::Decimal;
use tracing::warn;

use crate::strings::{
    BREAKDOWN_HEADING, CARD_DESCRIPTION, CARD_TITLE, EARNINGS_LABEL, EARNINGS_TOO_LARGE,
    SUMMARY_HEADING,
};

/// Borrowed view of a calculator that renders as the card's text content.
pub struct Report<'a> {
    calculator: &'a EarningsCalculator,
}

impl<'a> Report<'a> {
    pub fn new(calculator: &'a EarningsCalculator) -> Self {
        Self { calculator }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let earnings = self.calculator.earnings().unwrap_or(Decimal::ZERO);

        writeln!(f, "{CARD_TITLE}: {CARD_DESCRIPTION}")?;
        writeln!(f, "{EARNINGS_LABEL}: {}", format_currency(earnings))?;
        if self.calculator.exceeds_max_earnings() {
            writeln!(f, "{EARNINGS_TOO_LARGE}")?;
        }
        writeln!(f)?;
        write_section(f, BREAKDOWN_HEADING, &self.calculator.breakdown())?;
        writeln!(f)?;
        write_section(f, SUMMARY_HEADING, &self.calculator.summary())
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    lines: &[ContributionLine],
) -> fmt::Result {
    writeln!(f, "{heading}")?;
    for line in lines {
        writeln!(
            f,
            "  {:<24}{:>16}  ({})",
            line.label, line.value, line.details
        )?;
    }
    Ok(())
}

/// Renders the report for a calculator's current state.
pub fn render_report(calculator: &EarningsCalculator) -> String {
    Report::new(calculator).to_string()
}

/// Feeds `raw` through a fresh calculator and renders the result.
///
/// Text the input filter would reject leaves the calculator empty, so the
/// report shows zero earnings.
pub fn render_report_for(raw: &str) -> String {
    let mut calculator = EarningsCalculator::new();
    if !calculator.accepts(raw) {
        warn!(input = raw, "earnings rejected by input filter; reporting zero");
    }
    calculator.update(raw);
    render_report(&calculator)
}

mod contribution_line;
mod contribution_rates;
mod contribution_set;

pub use contribution_line::ContributionLine;
pub use contribution_rates::{ContributionRates, RatesError};
pub use contribution_set::{ContributionSet, FormattedContributions};

//! Integration tests for the parts of the shell that run without a window:
//! loading the on-disk configuration fixture and rendering headless reports.

use std::path::{Path, PathBuf};

use lankacalc_core::EarningsCalculator;
use lankacalc_ui::{config::AppConfig, report};
use pretty_assertions::assert_eq;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("lankacalc.toml")
}

#[test]
fn test_load_fixture_config() {
    let config = AppConfig::load(&fixture_path()).expect("fixture config should load");

    assert_eq!(config.log_level, "warn,lankacalc_core=debug");
    assert!(!config.log_stdout);
    assert_eq!(config.log_file, None);
    assert_eq!(config.window.width, 600.0);
    assert_eq!(config.window.height, 880.0);
}

#[test]
fn test_fixture_config_with_cli_overrides() {
    let config = AppConfig::load(&fixture_path())
        .unwrap()
        .with_overrides(Some("debug".to_string()), None);

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.window.width, 600.0);
}

#[test]
fn test_report_for_empty_earnings_is_all_zero() {
    let text = report::render_report_for("");

    let zero_rows = text.matches("LKR 0.00  (").count();
    assert_eq!(zero_rows, 5);
}

#[test]
fn test_report_tracks_calculator_edits() {
    let mut calculator = EarningsCalculator::new();
    calculator.update("250000");
    calculator.update("250000.5.");

    let text = report::render_report(&calculator);

    assert!(text.contains("Total Monthly Earnings (LKR): LKR 250000.00"));
    assert!(text.contains("LKR 20000.00  (8% of Total Earnings)"));
    assert!(text.contains("LKR 230000.00  (Total Earnings - Employee EPF)"));
}

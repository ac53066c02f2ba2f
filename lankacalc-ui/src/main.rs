use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use lankacalc_ui::{components::WindowPreferences, config::AppConfig, gui, logging, report};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// EPF & ETF contribution calculator for Sri Lanka.
///
/// Opens the calculator window, or with `--earnings` prints the contribution
/// breakdown for one monthly earnings figure and exits.
#[derive(Debug, Parser)]
#[command(name = "LankaCalc", version, about)]
struct Cli {
    /// Total monthly earnings in LKR (e.g. `50000`). Prints the result
    /// instead of opening a window.
    #[arg(long)]
    earnings: Option<String>,

    /// Path to the TOML configuration file. A missing file is not an error.
    #[arg(long, default_value = "lankacalc.toml")]
    config: PathBuf,

    /// Log level or EnvFilter directive; overrides the configuration file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file; overrides the configuration file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load configuration: {}", cli.config.display()))?
        .with_overrides(cli.log_level, cli.log_file);

    logging::init_logging(&config)?;
    debug!(?config, "configuration loaded");

    if let Some(earnings) = cli.earnings {
        print!("{}", report::render_report_for(&earnings));
        return Ok(());
    }

    info!("starting calculator window");
    gui::run(WindowPreferences::from(config.window));

    Ok(())
}

use std::{io, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tip_core::{TipPercentage, ValidationPolicy};
use tracing::{debug, info};

use tip_cli::{AppConfig, ConfigOverrides, Shell, logging, quote};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator.
///
/// Computes a tip from a bill amount and a percentage between 0 and 30.
/// Runs interactively by default; `calc` prints a single result.
#[derive(Debug, Parser)]
#[command(name = "tip-calculator", version)]
struct Cli {
    /// Path to a TOML config file. Defaults to `tip-calculator.toml` in the
    /// working directory, if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bill validation policy: `strict` rejects malformed text, `lenient`
    /// treats it as zero.
    #[arg(long, global = true)]
    policy: Option<ValidationPolicy>,

    /// Currency symbol shown before amounts.
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Log filter directive, e.g. `debug` or `tip_core=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Start the interactive calculator (the default).
    Interactive,

    /// Calculate one tip and exit.
    Calc {
        /// Bill amount, e.g. `50.00`.
        #[arg(long, allow_hyphen_values = true)]
        bill: String,

        /// Tip percentage, 0 to 30.
        #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(i64).range(0..=30))]
        percent: i64,
    },
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            policy: self.policy,
            currency_symbol: self.currency.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.overrides());

    logging::init_logging(&config.log_level);
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration loaded");

    match cli.mode.unwrap_or(Mode::Interactive) {
        Mode::Interactive => {
            let mut shell = Shell::new(config.policy, config.currency_symbol);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell
                .run(stdin.lock(), &mut stdout)
                .context("calculator session failed")?;
        }
        Mode::Calc { bill, percent } => {
            let percentage = TipPercentage::new(percent)?;
            let line = quote(&bill, percentage, config.policy, &config.currency_symbol)
                .with_context(|| format!("cannot calculate a tip for '{bill}'"))?;
            info!(%bill, %percentage, "one-shot calculation");
            println!("{line}");
        }
    }

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use datecalc::constants::{ABOUT_APPROXIMATION, ABOUT_MODES};

/// Shift dates and measure the span between them.
#[derive(Parser)]
#[command(
    name = "datecalc",
    version,
    about = "Shift dates and measure the span between them",
    after_long_help = long_help_text()
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Count only Monday through Friday.
    #[arg(long, global = true, conflicts_with = "calendar")]
    pub business: bool,

    /// Count every calendar day, overriding `business_mode` from the config.
    #[arg(long, global = true)]
    pub calendar: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Shift a base date by years, months and days.
    Add(AddArgs),
    /// Measure the span between two dates.
    Compare(CompareArgs),
    /// Write a default configuration file.
    InitConfig(InitConfigArgs),
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Base date (YYYY-MM-DD, "YYYY Mon DD [Day]" or "today").
    #[arg(default_value = "today")]
    pub base: String,

    /// Years to add; negative subtracts. Ignored in business mode.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub years: i64,

    /// Months to add; negative subtracts. Ignored in business mode.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub months: i64,

    /// Days to add; negative subtracts. Counts business days in business mode.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub days: i64,
}

/// Arguments for the `compare` subcommand.
#[derive(clap::Args)]
pub struct CompareArgs {
    /// First date.
    #[arg(default_value = "today")]
    pub first: String,

    /// Second date.
    #[arg(default_value = "today")]
    pub second: String,
}

/// Arguments for the `init-config` subcommand.
#[derive(clap::Args)]
pub struct InitConfigArgs {
    /// Where to write the file; defaults to the XDG config location.
    pub path: Option<PathBuf>,
}

fn long_help_text() -> String {
    format!("{ABOUT_MODES}\n\n{ABOUT_APPROXIMATION}")
}

//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "energy-advisor",
    version,
    about = "Household energy usage, cost and savings advisor"
)]
pub struct Cli {
    /// Load selections and tariffs from a TOML config file
    #[arg(long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Use a built-in preset (smart, classic)
    #[arg(long)]
    pub preset: Option<String>,

    /// Appliance catalog CSV (overrides the config's catalog.path)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Export the usage table to CSV
    #[arg(long)]
    pub csv_out: Option<PathBuf>,

    /// Print the appliance catalog and exit
    #[arg(long)]
    pub list_appliances: bool,

    /// Show the report in an interactive terminal view
    #[cfg(feature = "tui")]
    #[arg(long)]
    pub tui: bool,

    /// Start the REST API server after printing the report
    #[cfg(feature = "api")]
    #[arg(long)]
    pub serve: bool,

    /// API server port
    #[cfg(feature = "api")]
    #[arg(long, default_value_t = 3000)]
    pub port: u16,
}

impl Cli {
    /// Preset to use when neither `--config` nor `--preset` is given.
    pub const DEFAULT_PRESET: &str = "smart";
}

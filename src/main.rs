//! Energy advisor entry point: CLI wiring and config-driven estimation.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use energy_advisor::advisor::Advisor;
use energy_advisor::catalog::ApplianceCatalog;
use energy_advisor::cli::Cli;
use energy_advisor::config::AdvisorConfig;
use energy_advisor::io::export::export_csv;

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> AdvisorConfig {
    // --config takes priority, then --preset, then the default preset
    let loaded = if let Some(ref path) = cli.config {
        AdvisorConfig::from_toml_file(path)
    } else {
        AdvisorConfig::from_preset(cli.preset.as_deref().unwrap_or(Cli::DEFAULT_PRESET))
    };

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::error!("{e}");
        process::exit(1);
    });

    if let Some(ref path) = cli.catalog {
        config.catalog.path = Some(path.clone());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            tracing::error!("{e}");
        }
        process::exit(1);
    }

    tracing::debug!(%config, "configuration loaded");
    config
}

fn load_catalog(config: &AdvisorConfig) -> ApplianceCatalog {
    match config.catalog.path {
        Some(ref path) => ApplianceCatalog::from_csv_path(path).unwrap_or_else(|e| {
            tracing::error!("{e}");
            process::exit(1);
        }),
        None => ApplianceCatalog::builtin(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli);
    let catalog = load_catalog(&config);

    if cli.list_appliances {
        for spec in catalog.iter() {
            println!("{:<24} {:>8.0} W", spec.name, spec.rated_power_watts);
        }
        return;
    }

    let advisor = Advisor::new(catalog, config.settings());
    let report = advisor.estimate(&config.request()).unwrap_or_else(|e| {
        tracing::error!("{e}");
        process::exit(1);
    });

    println!("{report}");

    if let Some(ref path) = cli.csv_out {
        if let Err(e) = export_csv(&report.usage, path) {
            tracing::error!("failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Usage table written to {}", path.display());
    }

    #[cfg(feature = "tui")]
    if cli.tui {
        if let Err(e) = energy_advisor::tui::run(report.clone()) {
            tracing::error!("TUI crashed: {e}");
            process::exit(1);
        }
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(energy_advisor::api::AppState { advisor });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            tracing::error!("failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(energy_advisor::api::serve(state, addr)) {
            tracing::error!("API server failed: {e}");
            process::exit(1);
        }
    }
}

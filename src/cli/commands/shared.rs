//! Shared components for CLI commands

use crate::cli::args::CommonArgs;
use crate::{AppConfig, Result};
use colored::*;
use tracing::debug;

/// Set up structured logging
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // RUST_LOG wins over the verbosity flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "campus_energy={log_level},tower_http={log_level}"
        ))
    });

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the effective configuration header shared by the reporting commands
pub fn print_config_summary(config: &AppConfig) {
    println!(
        "  {} {}",
        "CSV:".bright_cyan(),
        config.csv_path.display().to_string().bright_white()
    );
}

/// Format a watt-hour value, dropping the fraction for whole numbers
pub fn format_wh(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0} Wh")
    } else {
        format!("{value:.2} Wh")
    }
}

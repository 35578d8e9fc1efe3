//! Inspect command: timestamp coverage report for the energy CSV

use super::shared::print_config_summary;
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::diagnostics::CoverageReport;
use crate::parser::load_energy_csv;
use crate::service::current_hour;
use anyhow::Context;
use colored::*;

pub async fn run_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let config = args.apply(
        args.common
            .load_config()
            .context("Failed to load configuration")?,
    );
    config.validate()?;

    let table = load_energy_csv(&config.csv_path)
        .await
        .with_context(|| format!("Error reading CSV {}", config.csv_path.display()))?;
    let report = CoverageReport::build(&table, current_hour(), config.sample_size);

    if args.output_format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
        return Ok(());
    }

    println!("{}", "Energy CSV coverage".bright_green().bold());
    print_config_summary(&config);
    println!(
        "  {} {} ({} unparseable)",
        "Records:".bright_cyan(),
        report.total_records.to_string().bright_white(),
        report.unparseable_records
    );

    println!(
        "\n{}",
        format!(
            "First {} raw timestamps and their normalized forms:",
            report.samples.len()
        )
        .bright_yellow()
    );
    for sample in &report.samples {
        println!("  {} raw: {}", sample.row, sample.raw);
        match sample.normalized {
            Some(ts) => println!("     normalized: {}", ts.to_string().bright_white()),
            None => println!("     normalized: {}", "unparseable".bright_red()),
        }
    }

    println!();
    println!("  {} {}", "Hours present in CSV:".bright_cyan(), report.hours_list());
    println!(
        "  {} {}",
        "Current server hour:".bright_cyan(),
        report.current_hour
    );
    println!(
        "  {} {}",
        "Matching rows for current hour:".bright_cyan(),
        report.matching_records
    );
    if let Some(first) = &report.first_match {
        println!("  {} {}", "First matching timestamp:".bright_cyan(), first);
    }

    Ok(())
}

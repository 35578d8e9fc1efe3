//! Query command: print the readings for one hour

use super::shared::{format_wh, print_config_summary};
use crate::cli::args::{OutputFormat, QueryArgs};
use crate::service::{EnergyService, ReadingOrigin, current_hour};
use anyhow::Context;
use colored::*;

pub async fn run_query(args: &QueryArgs) -> anyhow::Result<()> {
    let config = args
        .common
        .load_config()
        .context("Failed to load configuration")?;
    config.validate()?;

    let service = EnergyService::with_csv(&config.csv_path);
    let (aggregate, origin) = service
        .read_with_origin(args.hour.as_deref(), current_hour())
        .await;

    if args.output_format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&aggregate).context("Failed to serialize readings")?
        );
        return Ok(());
    }

    println!("{}", "Energy readings".bright_green().bold());
    print_config_summary(&config);

    match origin {
        ReadingOrigin::Csv { hour } | ReadingOrigin::Empty { hour } => {
            println!("  {} {:02}:00", "Hour:".bright_cyan(), hour);
        }
        ReadingOrigin::Override => {
            println!("  {} manual override", "Source:".bright_cyan());
        }
    }

    if aggregate.is_empty() {
        println!("\n{}", "No energy data for this hour.".bright_yellow());
        return Ok(());
    }

    println!();
    for (source, value) in aggregate.iter() {
        println!("  {:<24} {}", source, format_wh(value).bright_white());
    }
    println!(
        "\n  {:<24} {}",
        "Total energy".bright_cyan(),
        format_wh(aggregate.total()).bright_white().bold()
    );

    Ok(())
}

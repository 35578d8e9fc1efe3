//! Command implementations for the campus energy CLI
//!
//! Each command is implemented in its own module; shared logging setup
//! lives in [`shared`].

pub mod inspect;
pub mod query;
pub mod serve;
pub mod shared;

use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `serve`: HTTP server for the booking front end
/// - `query`: one-off readings for an hour
/// - `inspect`: timestamp coverage report for the CSV
pub async fn run(args: Args) -> anyhow::Result<()> {
    let Some(command) = args.command else {
        return Ok(());
    };

    shared::setup_logging(command.common())?;
    command.common().validate()?;

    match command {
        Commands::Serve(serve_args) => serve::run_serve(&serve_args).await,
        Commands::Query(query_args) => query::run_query(&query_args).await,
        Commands::Inspect(inspect_args) => inspect::run_inspect(&inspect_args).await,
    }
}

//! Command execution for the birdstats CLI

use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::args::Args;
use crate::constants::LOG_TARGET;
use crate::ebird::read_records;
use crate::report::Report;
use crate::stats::Aggregator;

/// Run the tool: read the export, aggregate it and print the report
pub fn run(args: Args) -> anyhow::Result<()> {
    setup_logging(&args)?;

    let aggregator = summarise(&args.csv_file)
        .with_context(|| format!("failed to summarise {}", args.csv_file.display()))?;
    let report = Report::new(&aggregator)
        .with_context(|| format!("failed to summarise {}", args.csv_file.display()))?;

    print!("{}", report.render());
    Ok(())
}

/// Read an export and fold every record into an [`Aggregator`]
pub fn summarise(path: &Path) -> crate::Result<Aggregator> {
    let records = read_records(path)?;

    let mut aggregator = Aggregator::new();
    aggregator.extend(records)?;

    info!(
        "Aggregated {} submissions covering {} species",
        aggregator.submissions().len(),
        aggregator.species().len()
    );
    Ok(aggregator)
}

/// Set up structured logging on stderr based on CLI arguments
fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_new(format!("{}={}", LOG_TARGET, log_level))
        .context("invalid log filter")?;

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()?;
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
            .try_init()?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

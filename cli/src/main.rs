mod logging;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use sales_core::{
    load_dataset, open_source, try_load_dataset, Action, Config, DashboardSnapshot, DashboardState,
    Dataset, LoadError, SalesSource, View,
};

#[derive(Parser)]
#[command(name = "sales")]
#[command(about = "Sales analysis dashboard over a weekly sales JSON document", long_about = None)]
struct Cli {
    /// Sales document: a file path or an http(s) URL (overrides the config)
    #[arg(long, global = true)]
    source: Option<String>,

    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Tui,
    /// Print yearly totals and growth rates
    Yearly,
    /// Print monthly totals for a year (default: latest year)
    Monthly {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Print weekly sales grouped by month for a year (default: latest year)
    Weekly {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Load the data and report what was found
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Tui));

    let (mut config, config_err) = match Config::load_default(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(source) = cli.source {
        config.data.source = source;
    }

    logging::init(&config.logging, interactive)?;
    if let Some(err) = config_err {
        tracing::warn!(error = %err, "Using default configuration");
    }

    let source = open_source(&config.data.source, config.data.http_timeout());
    if let Err(err) = &source {
        tracing::error!(source = %config.data.source, error = %err, "Failed to open sales source");
    }

    match cli.command {
        Some(Commands::Check) => {
            let source = source.map_err(|err| anyhow!("{}: {}", config.data.source, err))?;
            check(source.as_ref())
        }
        Some(Commands::Yearly) => print_report(dataset_or_empty(&source), View::Yearly, None),
        Some(Commands::Monthly { year }) => {
            print_report(dataset_or_empty(&source), View::Monthly, year)
        }
        Some(Commands::Weekly { year }) => {
            print_report(dataset_or_empty(&source), View::Weekly, year)
        }
        Some(Commands::Tui) | None => tui::run(dataset_or_empty(&source)),
    }
}

/// Loads from an opened source; a source that failed to open gives an empty dataset.
fn dataset_or_empty(source: &Result<Box<dyn SalesSource>, LoadError>) -> Dataset {
    match source {
        Ok(source) => load_dataset(source.as_ref()),
        Err(_) => Dataset::default(),
    }
}

fn check(source: &dyn SalesSource) -> Result<()> {
    match try_load_dataset(source) {
        Ok(dataset) => {
            println!("Source:  {}", source.describe());
            println!("Records: {}", dataset.records.len());
            println!(
                "Years:   {}",
                dataset.years.iter().map(|y| y.to_string()).collect::<Vec<_>>().join(", ")
            );
            Ok(())
        }
        Err(err) => Err(anyhow!("{}: {}", source.describe(), err)),
    }
}

fn print_report(dataset: Dataset, view: View, year: Option<i32>) -> Result<()> {
    let mut state = DashboardState::loaded(dataset.years.clone()).reduce(Action::SetView(view));
    if let Some(year) = year {
        state = state.reduce(Action::SelectYear(year));
    }
    let snapshot = DashboardSnapshot::build(&dataset, &state);
    println!("{}", report::render(&snapshot));
    Ok(())
}

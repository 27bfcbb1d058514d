use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{Confirm, Select, Text};
use tracing::{debug, info};
use wxreport_core::{
    Config, DailySummary, Dataset, Summary, TemperatureUnit, load_data_from_csv,
    report::{NO_DAILY_DATA, NO_SUMMARY_DATA, render_daily_summary, render_summary},
    skip_header,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxreport", version, about = "Summarise daily weather CSV files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Overall summary: date range, extremes and rainfall totals.
    Summary(ReportArgs),

    /// One block per day, in file order.
    Daily(ReportArgs),

    /// Interactively set defaults (header row, temperature unit, data file).
    Configure,

    /// Print the location of the config file.
    ConfigPath,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// CSV file with rows of date, min_temp, max_temp, rainfall.
    /// Falls back to the configured default file.
    pub file: Option<PathBuf>,

    /// Skip the first row of the file.
    #[arg(long)]
    pub header: bool,

    /// Temperatures in the file are in Fahrenheit.
    #[arg(long)]
    pub fahrenheit: bool,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl ReportArgs {
    /// Read and parse the data file, applying CLI flags over the config.
    fn dataset(&self, config: &Config) -> anyhow::Result<Dataset> {
        let path = config.data_file(self.file.clone())?;
        let unit = if self.fahrenheit {
            TemperatureUnit::Fahrenheit
        } else {
            config.input_unit
        };

        let mut rows = load_data_from_csv(&path)?;
        if self.header || config.has_header {
            rows = skip_header(rows);
        }
        debug!(path = %path.display(), rows = rows.len(), %unit, "building dataset");

        Dataset::from_rows_in(&rows, unit)
            .with_context(|| format!("Invalid weather data in {}", path.display()))
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Summary(args) => {
                let dataset = args.dataset(&Config::load()?)?;
                if args.json {
                    match Summary::from_dataset(&dataset)? {
                        Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
                        None => println!("{NO_SUMMARY_DATA}"),
                    }
                } else {
                    println!("{}", render_summary(&dataset)?);
                }
            }
            Command::Daily(args) => {
                let dataset = args.dataset(&Config::load()?)?;
                if args.json {
                    if dataset.is_empty() {
                        println!("{NO_DAILY_DATA}");
                    } else {
                        let days = DailySummary::from_dataset(&dataset)?;
                        println!("{}", serde_json::to_string_pretty(&days)?);
                    }
                } else {
                    println!("{}", render_daily_summary(&dataset)?);
                }
            }
            Command::Configure => configure()?,
            Command::ConfigPath => println!("{}", Config::config_file_path()?.display()),
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    config.has_header = Confirm::new("Do your data files start with a header row?")
        .with_default(config.has_header)
        .prompt()?;

    let units = TemperatureUnit::all().to_vec();
    let starting = units
        .iter()
        .position(|u| *u == config.input_unit)
        .unwrap_or_default();
    config.input_unit = Select::new("Temperature unit used in the files:", units)
        .with_starting_cursor(starting)
        .prompt()?;

    let current = config
        .default_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let file = Text::new("Default data file (leave empty for none):")
        .with_initial_value(&current)
        .prompt()?;
    let file = file.trim();
    config.default_file = (!file.is_empty()).then(|| PathBuf::from(file));

    config.save()?;
    info!(path = %Config::config_file_path()?.display(), "saved configuration");
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{
    error::Result,
    format::{convert_date, format_temperature},
    model::Dataset,
    stats::{calculate_mean, find_max, find_min},
};

pub const NO_SUMMARY_DATA: &str = "No data available for summary.";
pub const NO_DAILY_DATA: &str = "No data available for daily summary.";

/// A temperature extreme and the (formatted) day it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme {
    pub value: f64,
    pub date: String,
}

/// Overall figures for a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub start_date: String,
    pub end_date: String,
    pub lowest: Extreme,
    pub highest: Extreme,
    pub total_rainfall: f64,
    pub average_rainfall: f64,
}

impl Summary {
    /// Returns `None` for an empty dataset.
    pub fn from_dataset(dataset: &Dataset) -> Result<Option<Self>> {
        let dates = dataset.dates();
        let rainfall = dataset.rainfall();

        // Lexicographic order on the raw ISO strings.
        let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
            return Ok(None);
        };
        let (Some((low, low_index)), Some((high, high_index)), Some(average_rainfall)) = (
            find_min(&dataset.min_temps()),
            find_max(&dataset.max_temps()),
            calculate_mean(&rainfall),
        ) else {
            return Ok(None);
        };

        let summary = Self {
            start_date: convert_date(first)?,
            end_date: convert_date(last)?,
            lowest: Extreme {
                value: low,
                date: convert_date(dates[low_index])?,
            },
            highest: Extreme {
                value: high,
                date: convert_date(dates[high_index])?,
            },
            total_rainfall: rainfall.iter().sum(),
            average_rainfall,
        };

        debug!(days = dataset.len(), ?summary, "computed weather summary");
        Ok(Some(summary))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n    Weather summary for {} to {}:\n\n    \
             - Lowest temperature: {} on {}\n    \
             - Highest temperature: {} on {}\n    \
             - Total rainfall: {:.2} mm\n    \
             - Average daily rainfall: {:.2} mm\n        ",
            self.start_date,
            self.end_date,
            format_temperature(self.lowest.value),
            self.lowest.date,
            format_temperature(self.highest.value),
            self.highest.date,
            self.total_rainfall,
            self.average_rainfall,
        )
    }
}

/// One day's figures, with the date already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub rainfall: f64,
}

impl DailySummary {
    pub fn from_dataset(dataset: &Dataset) -> Result<Vec<Self>> {
        dataset
            .records()
            .iter()
            .map(|record| {
                Ok(Self {
                    date: convert_date(&record.date)?,
                    min_temp: record.min_temp,
                    max_temp: record.max_temp,
                    rainfall: record.rainfall,
                })
            })
            .collect()
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n        --- {} ---\n        \
             Minimum temperature: {}\n        \
             Maximum temperature: {}\n        \
             Rainfall: {:.2} mm\n        ",
            self.date,
            format_temperature(self.min_temp),
            format_temperature(self.max_temp),
            self.rainfall,
        )
    }
}

pub fn render_summary(dataset: &Dataset) -> Result<String> {
    Ok(match Summary::from_dataset(dataset)? {
        Some(summary) => summary.to_string(),
        None => NO_SUMMARY_DATA.to_string(),
    })
}

pub fn render_daily_summary(dataset: &Dataset) -> Result<String> {
    if dataset.is_empty() {
        return Ok(NO_DAILY_DATA.to_string());
    }

    let blocks: Vec<String> = DailySummary::from_dataset(dataset)?
        .iter()
        .map(DailySummary::to_string)
        .collect();

    Ok(blocks.join("\n"))
}

/// Overall summary of raw `[date, min_temp, max_temp, rainfall]` rows.
pub fn generate_summary<R, S>(rows: &[R]) -> Result<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    render_summary(&Dataset::from_rows(rows)?)
}

/// Per-day summary of raw rows, in input order.
pub fn generate_daily_summary<R, S>(rows: &[R]) -> Result<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    render_daily_summary(&Dataset::from_rows(rows)?)
}

//! Core library for the `wxreport` CLI.
//!
//! This crate defines:
//! - Loading raw rows from comma-delimited weather files
//! - Typed daily records and the statistics computed over them
//! - Human-readable rendering of overall and per-day summaries
//! - Configuration handling for the CLI
//!
//! It is used by `wxreport-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod loader;
pub mod model;
pub mod report;
pub mod stats;

pub use config::Config;
pub use convert::{TemperatureUnit, convert_f_to_c};
pub use error::{ReportError, Result};
pub use format::{convert_date, format_temperature, parse_temperature};
pub use loader::{load_data_from_csv, skip_header};
pub use model::{Dataset, WeatherRecord};
pub use report::{DailySummary, Summary, generate_daily_summary, generate_summary};
pub use stats::{calculate_mean, find_max, find_min};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn csv_file_to_summary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2021-07-06,10.0,25.0,2.0").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "2021-07-07,5.0,30.0,0.0").unwrap();

        let rows = load_data_from_csv(file.path()).unwrap();
        let summary = generate_summary(&rows).unwrap();

        assert!(summary.contains("Weather summary for Tuesday 06 July 2021 to Wednesday 07 July 2021"));
        assert!(summary.contains("- Highest temperature: 30.0°C on Wednesday 07 July 2021"));
        assert!(summary.contains("- Total rainfall: 2.00 mm"));
        assert!(summary.contains("- Average daily rainfall: 1.00 mm"));
    }
}

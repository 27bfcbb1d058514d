use std::path::PathBuf;

use thiserror::Error;

use crate::model::Column;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Expected a numeric value, got '{value}'")]
    InvalidType { value: String },

    #[error("Invalid ISO format date string: '{value}'")]
    InvalidDateFormat { value: String },

    #[error("Row {row} has {found} fields, expected 4 (date, min_temp, max_temp, rainfall)")]
    MalformedRow { row: usize, found: usize },

    #[error("Row {row}: bad {column} field")]
    InvalidField {
        row: usize,
        column: Column,
        #[source]
        source: Box<ReportError>,
    },

    #[error("Failed to read data file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode CSV data in '{0}'")]
    Csv(PathBuf, #[source] csv::Error),
}

impl ReportError {
    /// The innermost error, skipping row/column context.
    pub fn root(&self) -> &ReportError {
        match self {
            ReportError::InvalidField { source, .. } => source.root(),
            other => other,
        }
    }
}

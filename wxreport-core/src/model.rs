use crate::{
    convert::TemperatureUnit,
    error::{ReportError, Result},
    format::{parse_iso_date, parse_temperature},
};

/// Position of each field in a source row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    MinTemp,
    MaxTemp,
    Rainfall,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::MinTemp => "min_temp",
            Column::MaxTemp => "max_temp",
            Column::Rainfall => "rainfall",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of observations. Temperatures are always in Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    /// ISO-8601 date exactly as it appeared in the source.
    pub date: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub rainfall: f64,
}

impl WeatherRecord {
    /// Parses the `index`-th raw row, converting temperatures from `unit`.
    pub fn from_row<S: AsRef<str>>(index: usize, row: &[S], unit: TemperatureUnit) -> Result<Self> {
        let [date, min_temp, max_temp, rainfall] = row else {
            return Err(ReportError::MalformedRow {
                row: index,
                found: row.len(),
            });
        };

        let date = date.as_ref();
        parse_iso_date(date).map_err(|e| field_error(index, Column::Date, e))?;

        let number = |field: &S, column: Column| {
            parse_temperature(field.as_ref()).map_err(|e| field_error(index, column, e))
        };

        Ok(Self {
            date: date.to_string(),
            min_temp: unit.to_celsius(number(min_temp, Column::MinTemp)?),
            max_temp: unit.to_celsius(number(max_temp, Column::MaxTemp)?),
            rainfall: number(rainfall, Column::Rainfall)?,
        })
    }
}

fn field_error(row: usize, column: Column, source: ReportError) -> ReportError {
    ReportError::InvalidField {
        row,
        column,
        source: Box::new(source),
    }
}

/// Records in file order, built once per report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<WeatherRecord>,
}

impl Dataset {
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Self::from_rows_in(rows, TemperatureUnit::Celsius)
    }

    /// Parses every row; the first bad one aborts the whole build.
    pub fn from_rows_in<R, S>(rows: &[R], unit: TemperatureUnit) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let records = rows
            .iter()
            .enumerate()
            .map(|(index, row)| WeatherRecord::from_row(index, row.as_ref(), unit))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn dates(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.date.as_str()).collect()
    }

    pub fn min_temps(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.min_temp).collect()
    }

    pub fn max_temps(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.max_temp).collect()
    }

    pub fn rainfall(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.rainfall).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_into_records() {
        let rows = [
            ["2021-07-06", "10.0", "25.0", "2.0"],
            ["2021-07-07", "5.0", "30.0", "0.0"],
        ];

        let dataset = Dataset::from_rows(&rows).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dates(), vec!["2021-07-06", "2021-07-07"]);
        assert_eq!(dataset.min_temps(), vec![10.0, 5.0]);
        assert_eq!(dataset.max_temps(), vec![25.0, 30.0]);
        assert_eq!(dataset.rainfall(), vec![2.0, 0.0]);
    }

    #[test]
    fn accepts_loaded_string_rows() {
        let rows = vec![vec![
            "2021-07-06".to_string(),
            " 10 ".to_string(),
            "25".to_string(),
            "0.5".to_string(),
        ]];

        let dataset = Dataset::from_rows(&rows).unwrap();

        assert_eq!(
            dataset.records()[0],
            WeatherRecord {
                date: "2021-07-06".into(),
                min_temp: 10.0,
                max_temp: 25.0,
                rainfall: 0.5,
            }
        );
    }

    #[test]
    fn converts_fahrenheit_temperatures_only() {
        let rows = [["2021-07-06", "32", "212", "3.5"]];

        let dataset = Dataset::from_rows_in(&rows, TemperatureUnit::Fahrenheit).unwrap();

        assert_eq!(dataset.min_temps(), vec![0.0]);
        assert_eq!(dataset.max_temps(), vec![100.0]);
        assert_eq!(dataset.rainfall(), vec![3.5]);
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let rows: Vec<Vec<&str>> = vec![
            vec!["2021-07-06", "10.0", "25.0", "2.0"],
            vec!["2021-07-07", "5.0", "30.0"],
        ];

        let err = Dataset::from_rows(&rows).unwrap_err();

        assert!(matches!(err, ReportError::MalformedRow { row: 1, found: 3 }));
    }

    #[test]
    fn non_numeric_field_reports_position() {
        let rows = [["2021-07-06", "10.0", "hot", "2.0"]];

        let err = Dataset::from_rows(&rows).unwrap_err();

        assert!(matches!(
            err,
            ReportError::InvalidField {
                row: 0,
                column: Column::MaxTemp,
                ..
            }
        ));
        assert!(matches!(err.root(), ReportError::InvalidType { value } if value == "hot"));
    }

    #[test]
    fn bad_date_reports_invalid_date_format() {
        let rows = [["07/06/2021", "10.0", "25.0", "2.0"]];

        let err = Dataset::from_rows(&rows).unwrap_err();

        assert!(matches!(err.root(), ReportError::InvalidDateFormat { .. }));
    }
}

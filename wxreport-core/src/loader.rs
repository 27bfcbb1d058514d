use std::{fs::File, path::Path};

use tracing::debug;

use crate::error::{ReportError, Result};

/// Reads a comma-delimited file into raw string rows.
///
/// Blank lines are dropped, everything else is kept verbatim and in file
/// order. No header row is assumed; see [`skip_header`].
pub fn load_data_from_csv(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ReportError::Io(path.to_path_buf(), e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ReportError::Csv(path.to_path_buf(), e))?;
        // A bare line terminator decodes as one empty field.
        if record.is_empty() || (record.len() == 1 && record[0].is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_owned).collect());
    }

    debug!(path = %path.display(), rows = rows.len(), "loaded weather rows");
    Ok(rows)
}

/// Drops the first row, for files that carry a header line.
pub fn skip_header(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    if !rows.is_empty() {
        rows.remove(0);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn skips_blank_lines_and_keeps_order() {
        let file = write_csv(
            "2021-07-06,10.0,25.0,2.0\n\n2021-07-07,5.0,30.0,0.0\n\n\n2021-07-08,7.5,21.0,1.2\n",
        );

        let rows = load_data_from_csv(file.path()).unwrap();

        assert_eq!(
            rows,
            vec![
                vec!["2021-07-06", "10.0", "25.0", "2.0"],
                vec!["2021-07-07", "5.0", "30.0", "0.0"],
                vec!["2021-07-08", "7.5", "21.0", "1.2"],
            ]
        );
    }

    #[test]
    fn preserves_field_count_per_row() {
        let file = write_csv("a,b\n\n1,2,3,4,5\nonly\n");

        let rows = load_data_from_csv(file.path()).unwrap();

        let counts: Vec<usize> = rows.iter().map(Vec::len).collect();
        assert_eq!(counts, vec![2, 5, 1]);
    }

    #[test]
    fn does_not_skip_header_itself() {
        let file = write_csv("date,min,max,rain\n2021-07-06,10.0,25.0,2.0\n");

        let rows = load_data_from_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "date");

        let rows = skip_header(rows);
        assert_eq!(rows, vec![vec!["2021-07-06", "10.0", "25.0", "2.0"]]);
    }

    #[test]
    fn empty_file_gives_no_rows() {
        let file = write_csv("");
        assert!(load_data_from_csv(file.path()).unwrap().is_empty());
        assert!(skip_header(Vec::new()).is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = load_data_from_csv(&path).unwrap_err();

        assert!(matches!(err, ReportError::Io(ref p, _) if p == &path));
        assert!(err.to_string().contains("Failed to read data file"));
    }
}

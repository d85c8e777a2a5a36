//! Incremental CSV sink - appends records to CSV files one row at a time.
//!
//! Every call opens the target in append mode, writes a header only when no
//! non-empty file is present yet, writes the row(s), flushes and closes the
//! handle before returning. Calling it repeatedly, within one process or across
//! several runs, never duplicates the header.
//!
//! Records describe themselves through [`CsvRecord`]; turning their values into
//! text happens in one place, [`FieldValue::normalize`].

use crate::errors::{Error, Result};
use chrono::NaiveDateTime;
use std::{
    fs::{self, OpenOptions},
    io,
    path::Path,
};
use tracing::{debug, instrument};

/// ISO-8601 layout used for every timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A single column value prior to normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Whole number, written as plain decimal text
    Integer(i64),
    /// Floating point number, written with two decimal places
    Decimal(f64),
    /// Free text
    Text(&'a str),
    /// Enum label
    Label(&'a str),
    /// Naive local timestamp, written as ISO-8601
    Timestamp(NaiveDateTime),
}

impl FieldValue<'_> {
    /// Converts the value to the text stored in the CSV cell.
    #[must_use]
    pub fn normalize(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Decimal(value) => format!("{value:.2}"),
            Self::Text(value) | Self::Label(value) => (*value).to_string(),
            Self::Timestamp(value) => value.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// A record that can be written as one CSV row.
pub trait CsvRecord {
    /// Default file name for this record type.
    const FILE_NAME: &'static str;

    /// Column names in declaration order.
    const COLUMNS: &'static [&'static str];

    /// Column values, in the same order as [`CsvRecord::COLUMNS`].
    fn values(&self) -> Vec<FieldValue<'_>>;

    /// Ordered column → normalized value mapping.
    fn to_row(&self) -> Vec<(&'static str, String)> {
        Self::COLUMNS
            .iter()
            .copied()
            .zip(self.values().iter().map(FieldValue::normalize))
            .collect()
    }
}

/// Returns true when `path` does not hold a non-empty file yet.
///
/// # Errors
/// Returns an error if the metadata query fails for a reason other than the
/// file not existing.
pub fn needs_header(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.len() == 0),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(Error::Io(e)),
    }
}

/// Appends one record to `path`, writing the header first if the file is new or empty.
///
/// # Errors
/// Returns an error if the file cannot be opened or written.
pub fn append<T: CsvRecord>(record: &T, path: &Path) -> Result<()> {
    append_all(std::slice::from_ref(record), path)
}

/// Appends every record to `path` in order, writing the header at most once.
///
/// Produces the same file contents as calling [`append`] once per record.
///
/// # Errors
/// Returns an error if the file cannot be opened or written.
#[instrument(skip(records), fields(rows = records.len()))]
pub fn append_all<T: CsvRecord>(records: &[T], path: &Path) -> Result<()> {
    let write_header = needs_header(path)?;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if write_header {
        debug!("Writing header to {:?}", path);
        writer.write_record(T::COLUMNS)?;
    }

    for record in records {
        writer.write_record(record.to_row().iter().map(|(_, value)| value))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{fixed_now, temp_output_dir};
    use std::fs;

    struct Sample {
        id: i64,
        nome: String,
        preco: f64,
        quando: NaiveDateTime,
    }

    impl CsvRecord for Sample {
        const FILE_NAME: &'static str = "sample.csv";
        const COLUMNS: &'static [&'static str] = &["id", "nome", "preco", "quando"];

        fn values(&self) -> Vec<FieldValue<'_>> {
            vec![
                FieldValue::Integer(self.id),
                FieldValue::Text(&self.nome),
                FieldValue::Decimal(self.preco),
                FieldValue::Timestamp(self.quando),
            ]
        }
    }

    fn sample(id: i64) -> Sample {
        Sample {
            id,
            nome: format!("item, {id}"),
            preco: 12.5,
            quando: fixed_now(),
        }
    }

    fn lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_normalize_policy() {
        assert_eq!(FieldValue::Integer(-7).normalize(), "-7");
        assert_eq!(FieldValue::Decimal(12.5).normalize(), "12.50");
        assert_eq!(FieldValue::Decimal(3.07).normalize(), "3.07");
        assert_eq!(FieldValue::Decimal(100.0).normalize(), "100.00");
        assert_eq!(FieldValue::Decimal(1.0).normalize(), "1.00");
        assert_eq!(FieldValue::Label("farmacia central").normalize(), "farmacia central");
        assert_eq!(
            FieldValue::Timestamp(fixed_now()).normalize(),
            "2024-03-15T10:30:00.000000"
        );
    }

    #[test]
    fn test_to_row_keeps_declaration_order() {
        let row = sample(1).to_row();
        let columns: Vec<&str> = row.iter().map(|(column, _)| *column).collect();
        assert_eq!(columns, Sample::COLUMNS);
        assert_eq!(row[1].1, "item, 1");
    }

    #[test]
    fn test_written_row_matches_to_row() -> Result<()> {
        let dir = temp_output_dir();
        let path = dir.path().join(Sample::FILE_NAME);
        let record = sample(9);
        append(&record, &path)?;

        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?.clone();
        let row = reader.records().next().unwrap()?;
        let written: Vec<(&str, &str)> = headers.iter().zip(row.iter()).collect();
        let expected = record.to_row();
        let expected: Vec<(&str, &str)> = expected
            .iter()
            .map(|(column, value)| (*column, value.as_str()))
            .collect();
        assert_eq!(written, expected);
        Ok(())
    }

    #[test]
    fn test_append_writes_header_once() -> Result<()> {
        let dir = temp_output_dir();
        let path = dir.path().join(Sample::FILE_NAME);

        for id in 1..=5 {
            append(&sample(id), &path)?;
        }

        let lines = lines(&path);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "id,nome,preco,quando");
        assert_eq!(lines.iter().filter(|l| l.starts_with("id,")).count(), 1);
        assert_eq!(lines[1], "1,\"item, 1\",12.50,2024-03-15T10:30:00.000000");
        Ok(())
    }

    #[test]
    fn test_batched_append_matches_sequential() -> Result<()> {
        let dir = temp_output_dir();
        let sequential = dir.path().join("sequential.csv");
        let batched = dir.path().join("batched.csv");
        let records: Vec<Sample> = (1..=4).map(sample).collect();

        for record in &records {
            append(record, &sequential)?;
        }
        append_all(&records, &batched)?;

        assert_eq!(
            fs::read_to_string(&sequential)?,
            fs::read_to_string(&batched)?
        );
        Ok(())
    }

    #[test]
    fn test_existing_empty_file_gets_header() -> Result<()> {
        let dir = temp_output_dir();
        let path = dir.path().join(Sample::FILE_NAME);
        fs::write(&path, "")?;
        assert!(needs_header(&path)?);

        append(&sample(1), &path)?;

        let lines = lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "id,nome,preco,quando");
        Ok(())
    }

    #[test]
    fn test_existing_rows_are_preserved() -> Result<()> {
        let dir = temp_output_dir();
        let path = dir.path().join(Sample::FILE_NAME);

        append_all(&[sample(1), sample(2)], &path)?;
        let before = fs::read_to_string(&path)?;
        append(&sample(3), &path)?;
        let after = fs::read_to_string(&path)?;

        assert!(after.starts_with(&before));
        assert_eq!(lines(&path).len(), 4);
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let dir = temp_output_dir();
        let path = dir.path().join("missing").join(Sample::FILE_NAME);

        let result = append(&sample(1), &path);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

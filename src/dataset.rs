// Dataset loading: one-time CSV read at startup into an immutable Dataset.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Record;

// Columns the dashboard requires; header names must match exactly.
pub const REQUIRED_COLUMNS: [&str; 3] = ["drive-wheels", "body-style", "price"];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset file {path:?} is not valid UTF-8")]
    Encoding { path: PathBuf },
    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: &'static str },
    #[error("dataset is malformed")]
    Malformed {
        #[source]
        source: csv::Error,
    },
}

impl DatasetError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        DatasetError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Text encoding of the dataset file. The shipped dataset is ISO-8859-1, the
/// encoding the original export was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetEncoding {
    Utf8,
    Latin1,
}

impl DatasetEncoding {
    pub fn from_name(name: &str) -> Option<DatasetEncoding> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(DatasetEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Some(DatasetEncoding::Latin1),
            _ => None,
        }
    }
}

/// The loaded automobile records. Read-only for the lifetime of the process;
/// shared across requests behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load the dataset from `path`, decoding with `encoding`.
///
/// Fails with `DatasetError` if the file is missing or unreadable, if any of
/// [`REQUIRED_COLUMNS`] is absent from the header, or if a row cannot be
/// parsed (e.g. a non-numeric price).
pub fn load(path: &Path, encoding: DatasetEncoding) -> Result<Dataset, DatasetError> {
    let bytes = fs::read(path).map_err(|e| DatasetError::io(path, e))?;

    let text = match encoding {
        DatasetEncoding::Utf8 => String::from_utf8(bytes).map_err(|_| DatasetError::Encoding {
            path: path.to_path_buf(),
        })?,
        // Latin-1 bytes map 1:1 onto Unicode scalar values, so decoding is a
        // direct widening of each byte.
        DatasetEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
    };

    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Malformed { source })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn { column });
        }
    }

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: Record = result.map_err(|source| DatasetError::Malformed { source })?;
        records.push(record);
    }

    Ok(Dataset { records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(content: &[u8]) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(content).unwrap();
        tmp
    }

    #[test]
    fn loads_records_and_ignores_extra_columns() {
        let tmp = write_fixture(
            b"make,drive-wheels,body-style,horsepower,price\n\
              alfa-romero,rwd,convertible,111,13495.0\n\
              audi,fwd,sedan,102,13950.0\n",
        );
        let dataset = load(tmp.path(), DatasetEncoding::Utf8).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].drive_wheels, "rwd");
        assert_eq!(dataset.records()[0].body_style, "convertible");
        assert_eq!(dataset.records()[0].price, 13495.0);
        assert_eq!(dataset.records()[1].drive_wheels, "fwd");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load(Path::new("no/such/file.csv"), DatasetEncoding::Latin1);
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn missing_required_column_is_reported_by_name() {
        let tmp = write_fixture(b"drive-wheels,price\nrwd,13495.0\n");
        let result = load(tmp.path(), DatasetEncoding::Utf8);
        match result {
            Err(DatasetError::MissingColumn { column }) => assert_eq!(column, "body-style"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_price_is_malformed() {
        let tmp = write_fixture(b"drive-wheels,body-style,price\nrwd,sedan,?\n");
        let result = load(tmp.path(), DatasetEncoding::Utf8);
        assert!(matches!(result, Err(DatasetError::Malformed { .. })));
    }

    #[test]
    fn latin1_bytes_decode() {
        // "coup\xe9" is latin-1 for "coupé"
        let tmp = write_fixture(b"drive-wheels,body-style,price\nrwd,coup\xe9,15000.0\n");
        let dataset = load(tmp.path(), DatasetEncoding::Latin1).unwrap();
        assert_eq!(dataset.records()[0].body_style, "coupé");

        // The same bytes are rejected as UTF-8
        let result = load(tmp.path(), DatasetEncoding::Utf8);
        assert!(matches!(result, Err(DatasetError::Encoding { .. })));
    }

    #[test]
    fn encoding_names_parse() {
        assert_eq!(
            DatasetEncoding::from_name("ISO-8859-1"),
            Some(DatasetEncoding::Latin1)
        );
        assert_eq!(
            DatasetEncoding::from_name("utf-8"),
            Some(DatasetEncoding::Utf8)
        );
        assert_eq!(DatasetEncoding::from_name("ebcdic"), None);
    }
}

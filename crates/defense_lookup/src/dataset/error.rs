//! Error types for loading the defense dataset.

use thiserror::Error;

/// Errors that can occur while loading the dataset.
///
/// The value is kept by a failed [`DataStore`](super::DataStore) for the rest
/// of the process lifetime, hence `Clone` and string payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source could not be opened or read
    #[error("Could not read dataset {source_name}: {message}")]
    Io { source_name: String, message: String },

    /// The source is not well-formed CSV
    #[error("Malformed dataset at line {line}: {message}")]
    Csv { line: u64, message: String },

    /// A cell or header is not valid UTF-8
    #[error("Dataset is not valid UTF-8 at line {line}")]
    Encoding { line: u64 },

    /// A required column is missing from the header row
    #[error("Dataset is missing required column (expected one of: {})", .expected.join(", "))]
    MissingColumn { expected: Vec<String> },

    /// The source has no header row at all
    #[error("Dataset is empty")]
    Empty,
}

impl LoadError {
    /// Builds an I/O error tagged with the source description.
    pub fn io(source_name: impl Into<String>, err: &std::io::Error) -> Self {
        LoadError::Io {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.kind() {
            csv::ErrorKind::Utf8 { .. } => LoadError::Encoding { line },
            csv::ErrorKind::Io(io) => LoadError::Io {
                source_name: "csv reader".to_string(),
                message: io.to_string(),
            },
            _ => LoadError::Csv {
                line,
                message: err.to_string(),
            },
        }
    }
}

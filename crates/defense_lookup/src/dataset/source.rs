//! Sources the dataset can be read from.

use super::error::LoadError;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::PathBuf;

/// Supplies the raw CSV bytes of the defense table.
pub trait DataSource {
    /// Human readable description used in error messages.
    fn describe(&self) -> String;

    /// Opens a fresh reader over the source.
    fn open(&self) -> Result<Box<dyn Read + '_>, LoadError>;
}

/// A CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for CsvFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Box<dyn Read + '_>, LoadError> {
        let file = File::open(&self.path).map_err(|e| LoadError::io(self.describe(), &e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// CSV text held in memory, for fixtures and embedded tables.
#[derive(Debug, Clone)]
pub struct InlineCsv {
    text: String,
}

impl InlineCsv {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DataSource for InlineCsv {
    fn describe(&self) -> String {
        "inline csv".to_string()
    }

    fn open(&self) -> Result<Box<dyn Read + '_>, LoadError> {
        Ok(Box::new(Cursor::new(self.text.as_bytes())))
    }
}

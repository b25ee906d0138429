//! Loading and holding the defense table.
//!
//! The table is read once, when a [`DataStore`] is opened, and is never
//! refreshed or mutated afterwards. A failed load is kept as well, so every
//! later lookup can report that no data is available.

mod error;
mod source;
mod types;

pub use error::LoadError;
pub use source::{CsvFile, DataSource, InlineCsv};
pub use types::*;

use crate::config::ColumnConfig;
use csv::StringRecord;
use std::collections::HashMap;
use std::io::Read;

/// Column positions resolved from the header row.
struct ColumnIndex {
    identity: usize,
    date: usize,
    name: Option<usize>,
    option: Option<usize>,
    time: Option<usize>,
    link: Option<usize>,
}

/// Finds the first accepted label present in the header row.
///
/// Labels are tried in priority order; header cells are compared after
/// trimming, since exported sheets tend to carry stray spaces.
fn resolve_column(headers: &StringRecord, labels: &[String]) -> Option<(usize, String)> {
    labels.iter().find_map(|label| {
        let wanted = label.trim();
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == wanted)
            .map(|idx| (idx, wanted.to_string()))
    })
}

fn required_column(
    headers: &StringRecord,
    labels: &[String],
) -> Result<(usize, String), LoadError> {
    resolve_column(headers, labels).ok_or_else(|| LoadError::MissingColumn {
        expected: labels.to_vec(),
    })
}

fn cell(row: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The loaded, read-only defense table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    records: Vec<ThesisRecord>,
    columns: ResolvedColumns,
}

impl Table {
    /// Parses a table from comma-delimited UTF-8 text with a header row.
    ///
    /// # Arguments
    /// * `reader` - The raw CSV bytes
    /// * `columns` - Accepted header labels per column
    ///
    /// # Returns
    /// * `Ok(Table)` - Every data row, in file order
    /// * `Err(LoadError)` - If the text is malformed or a required column is missing
    pub fn from_reader<R: Read>(reader: R, columns: &ColumnConfig) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(LoadError::Empty);
        }

        let (identity, identity_label) = required_column(&headers, &columns.identity)?;
        let (date, date_label) = required_column(&headers, &columns.date)?;
        let name = resolve_column(&headers, &columns.name);
        let option = resolve_column(&headers, &columns.option);
        let time = resolve_column(&headers, &columns.time);
        let link = resolve_column(&headers, &columns.link);

        let resolved = ResolvedColumns {
            identity: identity_label,
            date: date_label,
            name: name.as_ref().map(|(_, l)| l.clone()),
            option: option.as_ref().map(|(_, l)| l.clone()),
            time: time.as_ref().map(|(_, l)| l.clone()),
            link: link.as_ref().map(|(_, l)| l.clone()),
        };
        let index = ColumnIndex {
            identity,
            date,
            name: name.map(|(i, _)| i),
            option: option.map(|(i, _)| i),
            time: time.map(|(i, _)| i),
            link: link.map(|(i, _)| i),
        };

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            // Short rows are padded with blanks; rows wider than the header are malformed
            if row.len() > headers.len() {
                return Err(LoadError::Csv {
                    line,
                    message: format!(
                        "expected at most {} fields, found {}",
                        headers.len(),
                        row.len()
                    ),
                });
            }

            records.push(ThesisRecord {
                identity: cell(&row, Some(index.identity)).unwrap_or_default(),
                name: cell(&row, index.name),
                option: cell(&row, index.option),
                defense_date: row.get(index.date).and_then(parse_defense_date),
                time: cell(&row, index.time),
                link: cell(&row, index.link),
                line,
            });
        }

        Ok(Self {
            records,
            columns: resolved,
        })
    }

    /// Builds a table directly from records.
    pub fn from_records(records: Vec<ThesisRecord>) -> Self {
        Self {
            records,
            columns: ResolvedColumns::default(),
        }
    }

    /// Returns the first row whose identity equals `identity` after trimming.
    pub fn find_first(&self, identity: &str) -> Option<&ThesisRecord> {
        let wanted = identity.trim();
        self.records.iter().find(|r| r.identity.trim() == wanted)
    }

    /// Lists identity numbers carried by more than one row, in order of first appearance.
    pub fn duplicates(&self) -> Vec<DuplicateIdentity> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<DuplicateIdentity> = Vec::new();

        for record in &self.records {
            let identity = record.identity.trim();
            if identity.is_empty() {
                continue;
            }
            match positions.get(identity) {
                Some(&idx) => groups[idx].lines.push(record.line),
                None => {
                    positions.insert(identity, groups.len());
                    groups.push(DuplicateIdentity {
                        identity: identity.to_string(),
                        lines: vec![record.line],
                    });
                }
            }
        }

        groups.retain(|g| g.lines.len() > 1);
        groups
    }

    pub fn records(&self) -> &[ThesisRecord] {
        &self.records
    }

    /// Header labels picked for each column.
    pub fn columns(&self) -> &ResolvedColumns {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Outcome of the one-time load.
#[derive(Debug)]
enum StoreState {
    Loaded(Table),
    Failed(LoadError),
}

/// Owns the defense table for the lifetime of the process.
///
/// Construct it once at startup with [`DataStore::open`] and hand it to the
/// lookup service. There is no reload: a store that failed to load stays
/// unavailable.
#[derive(Debug)]
pub struct DataStore {
    state: StoreState,
}

impl DataStore {
    /// Reads and parses the table from `source`.
    pub fn load(source: &dyn DataSource, columns: &ColumnConfig) -> Result<Table, LoadError> {
        let reader = source.open()?;
        Table::from_reader(reader, columns)
    }

    /// Loads the table once and keeps the outcome, success or failure.
    pub fn open(source: &dyn DataSource, columns: &ColumnConfig) -> Self {
        match Self::load(source, columns) {
            Ok(table) => Self::from_table(table),
            Err(e) => Self::unavailable(e),
        }
    }

    /// A store holding an already-built table.
    pub fn from_table(table: Table) -> Self {
        Self {
            state: StoreState::Loaded(table),
        }
    }

    /// A store whose load failed.
    pub fn unavailable(error: LoadError) -> Self {
        Self {
            state: StoreState::Failed(error),
        }
    }

    /// Returns the table, or the error that prevented loading it.
    pub fn table(&self) -> Result<&Table, &LoadError> {
        match &self.state {
            StoreState::Loaded(table) => Ok(table),
            StoreState::Failed(e) => Err(e),
        }
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.table().err()
    }

    pub fn is_available(&self) -> bool {
        self.table().is_ok()
    }
}

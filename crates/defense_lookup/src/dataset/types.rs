/// Types for rows of the defense dataset
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One row of the defense table.
///
/// Cells that are empty or whitespace-only are stored as `None`. The identity
/// number is kept as text exactly as written, minus surrounding whitespace,
/// so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThesisRecord {
    pub identity: String,
    pub name: Option<String>,
    pub option: Option<String>,
    /// `None` when the cell is blank or not a recognized date
    pub defense_date: Option<NaiveDate>,
    pub time: Option<String>,
    pub link: Option<String>,
    /// 1-based line of the row in the source
    pub line: u64,
}

/// An identity number that appears on more than one row.
///
/// Lookups still succeed for these, returning the first row; this is a
/// data-quality report only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateIdentity {
    pub identity: String,
    /// Source lines of every row carrying the identity, in file order
    pub lines: Vec<u64>,
}

/// Header labels actually picked for each column when the table was loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedColumns {
    pub identity: String,
    pub date: String,
    pub name: Option<String>,
    pub option: Option<String>,
    pub time: Option<String>,
    pub link: Option<String>,
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parses a defense-date cell, returning `None` for anything unrecognized.
///
/// Day-first is assumed for slash and dash separated dates, matching how the
/// dates are displayed back to users.
pub fn parse_defense_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

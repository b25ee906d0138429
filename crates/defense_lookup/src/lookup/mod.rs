//! Answers "when is this person's defense?" against the loaded table.

mod error;
mod types;

pub use error::LookupError;
pub use types::*;

use crate::dataset::DataStore;
use chrono::{Local, NaiveDate};

/// Checks that `raw` is a usable identity number and returns it trimmed.
///
/// Only ASCII digits are accepted; anything else, or an empty string after
/// trimming, is rejected before any data is touched.
pub fn validate_identity(raw: &str) -> Result<&str, LookupError> {
    let identity = raw.trim();
    if identity.is_empty() || !identity.chars().all(|c| c.is_ascii_digit()) {
        return Err(LookupError::InvalidInput);
    }
    Ok(identity)
}

/// Looks up defense details by identity number.
pub struct LookupService {
    store: DataStore,
}

impl LookupService {
    /// Creates a service over an already opened store.
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Finds the defense for `raw`, judging "today" by the local calendar date.
    pub fn find_by_identity(&self, raw: &str) -> Result<DefenseRecord, LookupError> {
        self.find_by_identity_on(raw, Local::now().date_naive())
    }

    /// Finds the defense for `raw`, with `today` as the current date.
    ///
    /// # Arguments
    /// * `raw` - Identity number as typed by the user
    /// * `today` - Date the "is today" flag is compared against
    ///
    /// # Returns
    /// * `Ok(DefenseRecord)` - Details from the first matching row
    /// * `Err(LookupError)` - Invalid input, no data loaded, or no match
    pub fn find_by_identity_on(
        &self,
        raw: &str,
        today: NaiveDate,
    ) -> Result<DefenseRecord, LookupError> {
        let identity = validate_identity(raw)?;

        let table = self
            .store
            .table()
            .map_err(|e| LookupError::DataUnavailable {
                reason: e.to_string(),
            })?;

        let record = table
            .find_first(identity)
            .ok_or_else(|| LookupError::NotFound {
                identity: identity.to_string(),
            })?;

        Ok(DefenseRecord::from_record(record, today))
    }
}

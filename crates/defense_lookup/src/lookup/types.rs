/// Types for lookup results
use crate::dataset::ThesisRecord;
use chrono::NaiveDate;
use serde::Serialize;

pub const NAME_PLACEHOLDER: &str = "not available";
pub const OPTION_PLACEHOLDER: &str = "not specified";
pub const DATE_PLACEHOLDER: &str = "not scheduled";
pub const TIME_PLACEHOLDER: &str = "not specified";
pub const LINK_PLACEHOLDER: &str = "#";

/// Display format for defense dates (`DD/MM/YYYY`)
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Defense details for one person, built fresh for every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefenseRecord {
    pub name: String,
    pub option: String,
    /// `DD/MM/YYYY`, or [`DATE_PLACEHOLDER`] when no date is set
    pub date: String,
    pub time: String,
    pub link: String,
    pub is_today: bool,
    pub schedule: DefenseSchedule,
}

/// Which panel the result should be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseSchedule {
    /// The defense is today: show date, time and the meeting link
    Today,
    /// A date is set but it isn't today
    Scheduled,
    /// No usable date in the dataset
    NotScheduled,
}

impl DefenseRecord {
    /// Derives the displayed fields from a row, using placeholders for missing cells.
    pub fn from_record(record: &ThesisRecord, today: NaiveDate) -> Self {
        let is_today = record.defense_date == Some(today);
        let schedule = match record.defense_date {
            Some(_) if is_today => DefenseSchedule::Today,
            Some(_) => DefenseSchedule::Scheduled,
            None => DefenseSchedule::NotScheduled,
        };

        Self {
            name: or_placeholder(&record.name, NAME_PLACEHOLDER),
            option: or_placeholder(&record.option, OPTION_PLACEHOLDER),
            date: record
                .defense_date
                .map(|d| d.format(DATE_DISPLAY_FORMAT).to_string())
                .unwrap_or_else(|| DATE_PLACEHOLDER.to_string()),
            time: or_placeholder(&record.time, TIME_PLACEHOLDER),
            link: or_placeholder(&record.link, LINK_PLACEHOLDER),
            is_today,
            schedule,
        }
    }

    /// True when the link points at a real meeting rather than the placeholder.
    pub fn has_link(&self) -> bool {
        self.link != LINK_PLACEHOLDER
    }
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    value.clone().unwrap_or_else(|| placeholder.to_string())
}

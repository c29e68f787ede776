//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Formats the local calendar date the way the agency writes it
    /// (`dd/mm/yyyy`). Proposal dates are stored in this form and never
    /// parsed back.
    pub fn to_locale_date(&self) -> String {
        self.0.with_timezone(&Local).format("%d/%m/%Y").to_string()
    }

    /// Same as [`Self::to_locale_date`] but in UTC, for deterministic output.
    pub fn to_utc_date(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

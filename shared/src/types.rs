//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Date range for report filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

impl DateRange {
    pub fn new(start: chrono::NaiveDate, end: chrono::NaiveDate) -> Self {
        Self { start, end }
    }

    /// Check whether a UTC timestamp falls inside the range (inclusive)
    pub fn contains(&self, timestamp: chrono::DateTime<chrono::Utc>) -> bool {
        let date = timestamp.date_naive();
        date >= self.start && date <= self.end
    }
}

//! Water quality models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{is_safe_ammonia, is_safe_dissolved_oxygen, is_safe_nitrite, is_safe_ph};

/// A water quality sample taken from a pond
///
/// Every chemistry field is optional: `None` means the parameter was not
/// measured, which is different from a reading of zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaterQualityReading {
    pub id: Uuid,
    /// The pond this sample was taken from. Not checked against the pond
    /// collection; an orphaned reading is kept as-is.
    pub pond_id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Temperature in °C
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<Decimal>,
    /// Dissolved oxygen in mg/L
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dissolved_oxygen: Option<Decimal>,
    /// Ammonia in ppm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ammonia: Option<Decimal>,
    /// Nitrite in ppm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nitrite: Option<Decimal>,
    /// Nitrate in ppm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nitrate: Option<Decimal>,
    /// Turbidity in NTU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbidity: Option<Decimal>,
}

impl WaterQualityReading {
    /// Check whether every measured parameter is inside its safe range.
    /// Unmeasured parameters do not raise an alert.
    pub fn is_within_safe_ranges(&self) -> bool {
        self.ph.map_or(true, is_safe_ph)
            && self.dissolved_oxygen.map_or(true, is_safe_dissolved_oxygen)
            && self.ammonia.map_or(true, is_safe_ammonia)
            && self.nitrite.map_or(true, is_safe_nitrite)
    }
}

//! Growth sampling models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A growth sample for a pond's stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthReading {
    pub id: Uuid,
    pub pond_id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Average specimen weight in grams
    pub average_weight: Decimal,
    /// Average specimen length in centimeters
    pub average_length: Decimal,
    /// Estimated total biomass in kilograms
    pub total_biomass: Decimal,
}

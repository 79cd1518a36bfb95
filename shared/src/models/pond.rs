//! Pond models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered pond on the farm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pond {
    pub id: Uuid,
    pub name: String,
    /// Free-form dimensions as the operator entered them, e.g. "10x10x1"
    pub dimensions: String,
    /// Stocking capacity; no unit is enforced
    pub capacity: Decimal,
    /// Operational status, free-form ("Activo", "Mantenimiento", ...)
    pub status: String,
}

impl Pond {
    /// Conventional status value for a pond that is currently stocked
    pub const STATUS_ACTIVE: &'static str = "Activo";

    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(Self::STATUS_ACTIVE)
    }
}

//! Inventory models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stocked supply item (feed, medicine, equipment, fish)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    /// Category as shown in the app, e.g. "Alimento", "Medicamento"
    pub category: String,
    pub quantity: Decimal,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<Decimal>,
}

impl InventoryItem {
    /// An item is low on stock when its quantity has reached the
    /// configured threshold. Items without a threshold never alert.
    pub fn is_low_stock(&self) -> bool {
        match self.low_stock_threshold {
            Some(threshold) => self.quantity <= threshold,
            None => false,
        }
    }
}

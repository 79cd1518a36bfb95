//! Collection descriptors: which key each entity lives under, and how a
//! draft becomes a stored record
//!
//! Per-collection behavior (identifier assignment, default timestamps,
//! the `completed` flag on new tasks) is declared here once instead of
//! being repeated in six hand-written save functions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{
    GrowthReading, InventoryItem, Pond, Task, Transaction, TransactionType, WaterQualityReading,
};

/// A record persisted in one of the store's collections.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Storage key of the collection holding this record type.
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;
}

/// A record as submitted by a caller, before the store has assigned its
/// identifier and filled in collection defaults.
pub trait Draft: Send {
    type Record: Record;

    /// Materialize the full record. `now` is the time of the write and
    /// becomes the timestamp wherever the caller left it out.
    fn into_record(self, id: Uuid, now: DateTime<Utc>) -> Self::Record;
}

impl Record for Pond {
    const COLLECTION: &'static str = "ponds";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for InventoryItem {
    const COLLECTION: &'static str = "inventory";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for WaterQualityReading {
    const COLLECTION: &'static str = "waterReadings";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for GrowthReading {
    const COLLECTION: &'static str = "growthReadings";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Transaction {
    const COLLECTION: &'static str = "transactions";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Task {
    const COLLECTION: &'static str = "tasks";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Input for registering a pond
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePondInput {
    pub name: String,
    pub dimensions: String,
    pub capacity: Decimal,
    pub status: String,
}

impl Draft for CreatePondInput {
    type Record = Pond;

    fn into_record(self, id: Uuid, _now: DateTime<Utc>) -> Pond {
        Pond {
            id,
            name: self.name,
            dimensions: self.dimensions,
            capacity: self.capacity,
            status: self.status,
        }
    }
}

/// Input for logging a water quality sample
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWaterQualityReadingInput {
    pub pond_id: Uuid,
    /// Sample time; defaults to the time of the write when omitted
    pub timestamp: Option<DateTime<Utc>>,
    pub temperature: Option<Decimal>,
    pub ph: Option<Decimal>,
    pub dissolved_oxygen: Option<Decimal>,
    pub ammonia: Option<Decimal>,
    pub nitrite: Option<Decimal>,
    pub nitrate: Option<Decimal>,
    pub turbidity: Option<Decimal>,
}

impl Draft for CreateWaterQualityReadingInput {
    type Record = WaterQualityReading;

    fn into_record(self, id: Uuid, now: DateTime<Utc>) -> WaterQualityReading {
        WaterQualityReading {
            id,
            pond_id: self.pond_id,
            timestamp: self.timestamp.unwrap_or(now),
            temperature: self.temperature,
            ph: self.ph,
            dissolved_oxygen: self.dissolved_oxygen,
            ammonia: self.ammonia,
            nitrite: self.nitrite,
            nitrate: self.nitrate,
            turbidity: self.turbidity,
        }
    }
}

/// Input for logging a growth sample
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGrowthReadingInput {
    pub pond_id: Uuid,
    pub timestamp: Option<DateTime<Utc>>,
    pub average_weight: Decimal,
    pub average_length: Decimal,
    pub total_biomass: Decimal,
}

impl Draft for CreateGrowthReadingInput {
    type Record = GrowthReading;

    fn into_record(self, id: Uuid, now: DateTime<Utc>) -> GrowthReading {
        GrowthReading {
            id,
            pond_id: self.pond_id,
            timestamp: self.timestamp.unwrap_or(now),
            average_weight: self.average_weight,
            average_length: self.average_length,
            total_biomass: self.total_biomass,
        }
    }
}

/// Input for adding an inventory item
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryItemInput {
    pub name: String,
    pub category: String,
    pub quantity: Decimal,
    pub unit: String,
    pub low_stock_threshold: Option<Decimal>,
}

impl Draft for CreateInventoryItemInput {
    type Record = InventoryItem;

    fn into_record(self, id: Uuid, _now: DateTime<Utc>) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            low_stock_threshold: self.low_stock_threshold,
        }
    }
}

/// Input for recording a financial transaction
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionInput {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Draft for CreateTransactionInput {
    type Record = Transaction;

    fn into_record(self, id: Uuid, now: DateTime<Utc>) -> Transaction {
        Transaction {
            id,
            transaction_type: self.transaction_type,
            amount: self.amount,
            description: self.description,
            timestamp: self.timestamp.unwrap_or(now),
        }
    }
}

/// Input for scheduling a task. New tasks always start incomplete.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: String,
    #[serde(rename = "dueDate")]
    pub due_date: DateTime<Utc>,
}

impl Draft for CreateTaskInput {
    type Record = Task;

    fn into_record(self, id: Uuid, _now: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            completed: false,
        }
    }
}

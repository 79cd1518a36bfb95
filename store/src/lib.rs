//! MyFish record store
//!
//! Local persistence core for a small aquaculture operation: ponds,
//! water-quality and growth samples, inventory, finances, and tasks,
//! each kept as a JSON array under a fixed key in an injected key-value
//! backend. There is no server, sync, or multi-user concern; the UI
//! layer consumes this crate directly.

pub mod config;
pub mod error;
pub mod record;
pub mod reports;
pub mod storage;
pub mod store;
pub mod telemetry;

pub use config::{Config, StorageConfig};
pub use error::{AppError, AppResult};
pub use record::{
    CreateGrowthReadingInput, CreateInventoryItemInput, CreatePondInput, CreateTaskInput,
    CreateTransactionInput, CreateWaterQualityReadingInput, Draft, Record,
};
pub use reports::{DashboardSummary, FinancialSummary, Reports, WaterQualityAlert};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::RecordStore;

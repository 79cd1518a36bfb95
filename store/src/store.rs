//! The record store: collection-oriented persistence over a key-value
//! substrate
//!
//! Every mutation is a read-modify-write of one collection, serialized
//! through a per-collection lock so concurrent appends cannot drop each
//! other's records. Reads fail open: a missing, unreadable, or corrupt
//! collection lists as empty, and the failure is only logged.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;

use shared::validation::{
    validate_capacity, validate_concentration, validate_non_negative_quantity, validate_ph,
    validate_positive_amount, validate_temperature_celsius,
};
use shared::{GrowthReading, InventoryItem, Pond, Task, Transaction, WaterQualityReading};

use crate::error::{AppError, AppResult};
use crate::record::{
    CreateGrowthReadingInput, CreateInventoryItemInput, CreatePondInput, CreateTaskInput,
    CreateTransactionInput, CreateWaterQualityReadingInput, Draft, Record,
};
use crate::storage::KeyValueStorage;

/// Collection-oriented record store over an injected key-value backend.
///
/// Clones share the per-collection locks, so any number of handles may
/// be passed around within one process.
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    storage: S,
    locks: Arc<StdMutex<HashMap<&'static str, Arc<AsyncMutex<()>>>>>,
}

impl<S: KeyValueStorage> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            locks: Arc::new(StdMutex::new(HashMap::new())),
        }
    }

    fn collection_lock(&self, collection: &'static str) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(collection).or_default().clone()
    }

    /// Strict read of a collection. Absent key is an empty collection;
    /// anything else unreadable is an error.
    async fn load<T: Record>(&self) -> AppResult<Vec<T>> {
        match self.storage.get(T::COLLECTION).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn persist<T: Record>(&self, records: &[T]) -> AppResult<()> {
        let raw = serde_json::to_string(records)?;
        self.storage.set(T::COLLECTION, &raw).await
    }

    // ========================================================================
    // Generic Operations
    // ========================================================================

    /// List every record in a collection.
    ///
    /// Fails open: a storage failure or corrupt payload yields an empty
    /// list and an error log, never an error. Callers cannot distinguish
    /// "empty" from "unreadable".
    pub async fn list<T: Record>(&self) -> Vec<T> {
        match self.load::<T>().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    collection = T::COLLECTION,
                    error = %e,
                    "failed to read collection, returning empty"
                );
                Vec::new()
            }
        }
    }

    /// Append a draft to its collection, assigning a fresh identifier
    /// and filling collection defaults. Returns the stored record.
    ///
    /// Unlike [`list`](Self::list), the internal read is strict: a
    /// corrupt collection is an error here, so a bad payload is never
    /// silently replaced by a one-element array.
    pub async fn append<D: Draft>(&self, draft: D) -> AppResult<D::Record> {
        let collection = <D::Record as Record>::COLLECTION;
        let lock = self.collection_lock(collection);
        let _guard = lock.lock().await;

        let mut records = self.load::<D::Record>().await?;
        let record = draft.into_record(Uuid::new_v4(), Utc::now());
        records.push(record.clone());
        self.persist(&records).await?;

        tracing::debug!(collection, id = %record.id(), "appended record");
        Ok(record)
    }

    /// Overwrite a collection with the given records, preserving their
    /// order. Used for bulk mutations where the caller already holds the
    /// full up-to-date collection.
    pub async fn replace_all<T: Record>(&self, records: &[T]) -> AppResult<()> {
        let lock = self.collection_lock(T::COLLECTION);
        let _guard = lock.lock().await;

        self.persist(records).await
    }

    /// Replace the single record matching `id` with the result of
    /// `mutate`, leaving every other record untouched. Returns the
    /// updated record, or `NotFound` when no record matches.
    pub async fn update_one<T, F>(&self, id: Uuid, mutate: F) -> AppResult<T>
    where
        T: Record,
        F: FnOnce(T) -> T + Send,
    {
        let lock = self.collection_lock(T::COLLECTION);
        let _guard = lock.lock().await;

        let mut records = self.load::<T>().await?;
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("record {} in {}", id, T::COLLECTION)))?;

        let updated = mutate(records[position].clone());
        records[position] = updated.clone();
        self.persist(&records).await?;

        Ok(updated)
    }

    // ========================================================================
    // Ponds
    // ========================================================================

    /// Get all registered ponds
    pub async fn ponds(&self) -> Vec<Pond> {
        self.list().await
    }

    /// Register a new pond
    pub async fn save_pond(&self, input: CreatePondInput) -> AppResult<Pond> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation(
                "name",
                "Pond name cannot be empty",
                "El nombre del estanque no puede estar vacío",
            ));
        }
        if input.dimensions.trim().is_empty() {
            return Err(AppError::validation(
                "dimensions",
                "Pond dimensions cannot be empty",
                "Las dimensiones del estanque no pueden estar vacías",
            ));
        }
        if let Err(message) = validate_capacity(input.capacity) {
            return Err(AppError::validation(
                "capacity",
                message,
                "La capacidad debe ser un número positivo",
            ));
        }

        self.append(input).await
    }

    // ========================================================================
    // Water Quality Readings
    // ========================================================================

    /// Get all water quality readings across every pond
    pub async fn water_quality_readings(&self) -> Vec<WaterQualityReading> {
        self.list().await
    }

    /// Get the readings sampled from one pond
    pub async fn water_quality_readings_for_pond(&self, pond_id: Uuid) -> Vec<WaterQualityReading> {
        let readings = self.water_quality_readings().await;
        readings
            .into_iter()
            .filter(|reading| reading.pond_id == pond_id)
            .collect()
    }

    /// Log a water quality sample. The pond reference is not checked
    /// against the pond collection; an orphaned reading is accepted.
    pub async fn save_water_quality_reading(
        &self,
        input: CreateWaterQualityReadingInput,
    ) -> AppResult<WaterQualityReading> {
        if let Some(temperature) = input.temperature {
            if let Err(message) = validate_temperature_celsius(temperature) {
                return Err(AppError::validation(
                    "temperature",
                    message,
                    "La temperatura debe estar entre -5 y 45 °C",
                ));
            }
        }
        if let Some(ph) = input.ph {
            if let Err(message) = validate_ph(ph) {
                return Err(AppError::validation(
                    "ph",
                    message,
                    "El pH debe estar entre 0 y 14",
                ));
            }
        }
        let concentrations = [
            ("dissolved_oxygen", input.dissolved_oxygen),
            ("ammonia", input.ammonia),
            ("nitrite", input.nitrite),
            ("nitrate", input.nitrate),
            ("turbidity", input.turbidity),
        ];
        for (field, value) in concentrations {
            if let Some(value) = value {
                if let Err(message) = validate_concentration(value) {
                    return Err(AppError::validation(
                        field,
                        message,
                        "El valor no puede ser negativo",
                    ));
                }
            }
        }

        self.append(input).await
    }

    // ========================================================================
    // Growth Readings
    // ========================================================================

    /// Get all growth readings across every pond
    pub async fn growth_readings(&self) -> Vec<GrowthReading> {
        self.list().await
    }

    /// Get the growth samples taken from one pond
    pub async fn growth_readings_for_pond(&self, pond_id: Uuid) -> Vec<GrowthReading> {
        let readings = self.growth_readings().await;
        readings
            .into_iter()
            .filter(|reading| reading.pond_id == pond_id)
            .collect()
    }

    /// Log a growth sample
    pub async fn save_growth_reading(
        &self,
        input: CreateGrowthReadingInput,
    ) -> AppResult<GrowthReading> {
        let measurements = [
            ("average_weight", input.average_weight),
            ("average_length", input.average_length),
            ("total_biomass", input.total_biomass),
        ];
        for (field, value) in measurements {
            if value < Decimal::ZERO {
                return Err(AppError::validation(
                    field,
                    "Growth measurements cannot be negative",
                    "Las medidas de crecimiento no pueden ser negativas",
                ));
            }
        }

        self.append(input).await
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    /// Get all inventory items
    pub async fn inventory_items(&self) -> Vec<InventoryItem> {
        self.list().await
    }

    /// Get the inventory items in one category
    pub async fn inventory_items_in_category(&self, category: &str) -> Vec<InventoryItem> {
        let items = self.inventory_items().await;
        items
            .into_iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Add a new inventory item
    pub async fn save_inventory_item(
        &self,
        input: CreateInventoryItemInput,
    ) -> AppResult<InventoryItem> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation(
                "name",
                "Item name cannot be empty",
                "El nombre del artículo no puede estar vacío",
            ));
        }
        if input.unit.trim().is_empty() {
            return Err(AppError::validation(
                "unit",
                "Unit cannot be empty",
                "La unidad no puede estar vacía",
            ));
        }
        if let Err(message) = validate_non_negative_quantity(input.quantity) {
            return Err(AppError::validation(
                "quantity",
                message,
                "La cantidad no puede ser negativa",
            ));
        }
        if let Some(threshold) = input.low_stock_threshold {
            if let Err(message) = validate_non_negative_quantity(threshold) {
                return Err(AppError::validation(
                    "low_stock_threshold",
                    message,
                    "El umbral de inventario bajo no puede ser negativo",
                ));
            }
        }

        self.append(input).await
    }

    /// Overwrite the whole inventory collection. The caller is expected
    /// to hold the full up-to-date list.
    pub async fn save_all_inventory_items(&self, items: &[InventoryItem]) -> AppResult<()> {
        self.replace_all(items).await
    }

    /// Restock (positive delta) or consume (negative delta) one item.
    /// Rejected when the adjustment would drive the quantity below zero.
    pub async fn adjust_inventory_quantity(
        &self,
        id: Uuid,
        delta: Decimal,
    ) -> AppResult<InventoryItem> {
        let lock = self.collection_lock(InventoryItem::COLLECTION);
        let _guard = lock.lock().await;

        let mut items = self.load::<InventoryItem>().await?;
        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("inventory item {}", id)))?;

        let new_quantity = items[position].quantity + delta;
        if new_quantity < Decimal::ZERO {
            return Err(AppError::InsufficientStock(format!(
                "item '{}' holds {} {}, cannot remove {}",
                items[position].name,
                items[position].quantity,
                items[position].unit,
                -delta,
            )));
        }

        items[position].quantity = new_quantity;
        let updated = items[position].clone();
        self.persist(&items).await?;

        Ok(updated)
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Get all financial transactions
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.list().await
    }

    /// Record an income or expense entry
    pub async fn save_transaction(&self, input: CreateTransactionInput) -> AppResult<Transaction> {
        if let Err(message) = validate_positive_amount(input.amount) {
            return Err(AppError::validation(
                "amount",
                message,
                "El monto debe ser positivo",
            ));
        }
        if input.description.trim().is_empty() {
            return Err(AppError::validation(
                "description",
                "Description cannot be empty",
                "La descripción no puede estar vacía",
            ));
        }

        self.append(input).await
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    /// Get all scheduled tasks
    pub async fn tasks(&self) -> Vec<Task> {
        self.list().await
    }

    /// Schedule a new task; it starts incomplete
    pub async fn save_task(&self, input: CreateTaskInput) -> AppResult<Task> {
        if input.title.trim().is_empty() {
            return Err(AppError::validation(
                "title",
                "Task title cannot be empty",
                "El título de la tarea no puede estar vacío",
            ));
        }

        self.append(input).await
    }

    /// Mark a task completed or pending, leaving its other fields alone
    pub async fn update_task_completion(&self, id: Uuid, completed: bool) -> AppResult<Task> {
        self.update_one(id, |mut task: Task| {
            task.completed = completed;
            task
        })
        .await
    }
}

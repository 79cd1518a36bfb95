//! Derived summaries for the dashboard and listing screens
//!
//! Collections are unordered on disk; this layer imposes presentation
//! order and computes the aggregates the screens display. Everything
//! here is read-only and inherits the store's fail-open read semantics:
//! an unreadable collection simply contributes nothing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use shared::{
    DateRange, GrowthReading, InventoryItem, Task, Transaction, TransactionType,
    WaterQualityReading,
};

use crate::storage::KeyValueStorage;
use crate::store::RecordStore;

/// Report queries over a record store
#[derive(Debug, Clone)]
pub struct Reports<S> {
    store: RecordStore<S>,
}

/// Income/expense totals over a period
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_balance: Decimal,
}

/// A pond whose most recent water sample breaches a safe range
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WaterQualityAlert {
    pub pond_id: Uuid,
    pub pond_name: String,
    pub reading: WaterQualityReading,
}

/// The dashboard cards
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub registered_ponds: usize,
    pub water_quality_ok: bool,
    /// Water quality alerts plus low-stock items
    pub active_alerts: usize,
    pub pending_tasks: usize,
}

impl<S: KeyValueStorage> Reports<S> {
    pub fn new(store: RecordStore<S>) -> Self {
        Self { store }
    }

    // ========================================================================
    // Financials
    // ========================================================================

    /// Sum income and expenses, optionally restricted to a date range
    pub async fn financial_summary(&self, range: Option<DateRange>) -> FinancialSummary {
        let transactions = self.store.transactions().await;

        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        for transaction in transactions {
            if let Some(range) = range {
                if !range.contains(transaction.timestamp) {
                    continue;
                }
            }
            match transaction.transaction_type {
                TransactionType::Income => total_income += transaction.amount,
                TransactionType::Expense => total_expenses += transaction.amount,
            }
        }

        FinancialSummary {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
        }
    }

    /// All transactions, newest first
    pub async fn transactions_recent_first(&self) -> Vec<Transaction> {
        let mut transactions = self.store.transactions().await;
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    /// All tasks ordered by due date, soonest first
    pub async fn tasks_by_due_date(&self) -> Vec<Task> {
        let mut tasks = self.store.tasks().await;
        tasks.sort_by_key(|task| task.due_date);
        tasks
    }

    /// Count of tasks not yet completed
    pub async fn pending_task_count(&self) -> usize {
        let tasks = self.store.tasks().await;
        tasks.iter().filter(|task| !task.completed).count()
    }

    /// Incomplete tasks whose due date has passed, soonest first
    pub async fn overdue_tasks(&self, now: DateTime<Utc>) -> Vec<Task> {
        let mut tasks = self.store.tasks().await;
        tasks.retain(|task| task.is_overdue(now));
        tasks.sort_by_key(|task| task.due_date);
        tasks
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    /// Items at or below their low-stock threshold
    pub async fn low_stock_items(&self) -> Vec<InventoryItem> {
        let items = self.store.inventory_items().await;
        items.into_iter().filter(InventoryItem::is_low_stock).collect()
    }

    // ========================================================================
    // Water Quality
    // ========================================================================

    /// The most recent water sample for a pond, if any
    pub async fn latest_water_reading(&self, pond_id: Uuid) -> Option<WaterQualityReading> {
        let readings = self.store.water_quality_readings_for_pond(pond_id).await;
        readings
            .into_iter()
            .max_by_key(|reading| reading.timestamp)
    }

    /// Ponds whose latest sample breaches a safe range. Ponds without
    /// readings do not alert.
    pub async fn water_quality_alerts(&self) -> Vec<WaterQualityAlert> {
        let ponds = self.store.ponds().await;
        let readings = self.store.water_quality_readings().await;

        let mut alerts = Vec::new();
        for pond in ponds {
            let latest = readings
                .iter()
                .filter(|reading| reading.pond_id == pond.id)
                .max_by_key(|reading| reading.timestamp);
            if let Some(reading) = latest {
                if !reading.is_within_safe_ranges() {
                    alerts.push(WaterQualityAlert {
                        pond_id: pond.id,
                        pond_name: pond.name.clone(),
                        reading: reading.clone(),
                    });
                }
            }
        }
        alerts
    }

    // ========================================================================
    // Growth
    // ========================================================================

    /// A pond's growth samples in chronological order
    pub async fn growth_history(&self, pond_id: Uuid) -> Vec<GrowthReading> {
        let mut readings = self.store.growth_readings_for_pond(pond_id).await;
        readings.sort_by_key(|reading| reading.timestamp);
        readings
    }

    // ========================================================================
    // Dashboard
    // ========================================================================

    /// The aggregate counts shown on the dashboard
    pub async fn dashboard_summary(&self) -> DashboardSummary {
        let ponds = self.store.ponds().await;
        let water_alerts = self.water_quality_alerts().await;
        let low_stock = self.low_stock_items().await;
        let pending_tasks = self.pending_task_count().await;

        DashboardSummary {
            registered_ponds: ponds.len(),
            water_quality_ok: water_alerts.is_empty(),
            active_alerts: water_alerts.len() + low_stock.len(),
            pending_tasks,
        }
    }
}

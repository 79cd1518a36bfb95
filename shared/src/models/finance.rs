//! Financial models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or expense entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Always positive; the sign is implied by the type
    pub amount: Decimal,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Transaction direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Transaction {
    /// Amount with its sign applied: positive for income, negative for
    /// expenses
    pub fn signed_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_serializes_lowercase_under_its_original_name() {
        let transaction = Transaction {
            id: Uuid::nil(),
            transaction_type: TransactionType::Expense,
            amount: Decimal::from(50),
            description: "Alimento".to_string(),
            timestamp: Utc::now(),
        };

        let value = serde_json::to_value(&transaction).unwrap();
        assert_eq!(value["type"], "expense");
        assert!(value.get("transaction_type").is_none());
    }

    #[test]
    fn test_signed_amount() {
        let mut transaction = Transaction {
            id: Uuid::nil(),
            transaction_type: TransactionType::Income,
            amount: Decimal::from(100),
            description: "Venta".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(transaction.signed_amount(), Decimal::from(100));

        transaction.transaction_type = TransactionType::Expense;
        assert_eq!(transaction.signed_amount(), Decimal::from(-100));
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference number stamped on movements created by onboarding seeding.
pub const AUTO_GENERATED_REFERENCE: &str = "AUTO_GENERATED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Incoming,
    Outgoing,
}

/// Append-only stock movement row in `stock_transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockTransaction {
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_value: f64,
    pub reference_number: String,
    pub notes: Option<String>,
    pub user_id: Uuid,
    pub created_by: Uuid,
    pub branch_id: Uuid,
}

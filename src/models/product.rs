use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
    Discontinued,
}

/// Row written when a product is created.
#[derive(Debug, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category_id: Uuid,
    pub branch_id: Uuid,
    pub user_id: Uuid,
    pub quantity_in_stock: i32,
    pub minimum_stock_level: i32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub unit_price: f64,
    pub status: ProductStatus,
}

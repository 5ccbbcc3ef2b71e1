//! Record store used by every service.
//!
//! Records are JSON objects keyed by column name. Tables form a closed set so
//! table names never come from user input; column names are checked with
//! [`column`] before they reach SQL.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Customers,
    Categories,
    Products,
    StockTransactions,
    Features,
    FeatureVotes,
    Modules,
    CompanyTypes,
    Profiles,
    BranchUsers,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Customers => "customers",
            Table::Categories => "categories",
            Table::Products => "products",
            Table::StockTransactions => "stock_transactions",
            Table::Features => "features",
            Table::FeatureVotes => "feature_votes",
            Table::Modules => "modules",
            Table::CompanyTypes => "company_types",
            Table::Profiles => "profiles",
            Table::BranchUsers => "branch_users",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Conflict(String),

    #[error("invalid column name: {0}")]
    InvalidColumn(String),

    #[error("record decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("expected a JSON object for {0}")]
    NotAnObject(Table),

    #[error("{0}")]
    Rejected(String),
}

/// Equality conditions joined with AND.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.conditions.push((column.to_string(), value.into()));
        self
    }

    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct OrderBy {
    pub column: String,
    pub ascending: bool,
}

impl OrderBy {
    pub fn asc(column: &str) -> Self {
        Self { column: column.to_string(), ascending: true }
    }

    pub fn desc(column: &str) -> Self {
        Self { column: column.to_string(), ascending: false }
    }
}

#[async_trait]
pub trait DataStore: Send + Sync {
    /// First record matching `filter`, if any.
    async fn find(&self, table: Table, filter: &Filter) -> Result<Option<Record>, StoreError>;

    /// Inserts `record` and returns the stored row, including generated columns.
    async fn insert(&self, table: Table, record: Record) -> Result<Record, StoreError>;

    async fn list(
        &self,
        table: Table,
        filter: &Filter,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Record>, StoreError>;

    /// Applies `patch` to the row with the given id; `None` when no row matched.
    async fn update(&self, table: Table, id: Uuid, patch: Record) -> Result<Option<Record>, StoreError>;

    /// Inserts, or overwrites the row that has the same `conflict_column` value.
    async fn upsert(
        &self,
        table: Table,
        record: Record,
        conflict_column: &str,
    ) -> Result<Record, StoreError>;

    /// Returns whether a row was deleted.
    async fn delete(&self, table: Table, id: Uuid) -> Result<bool, StoreError>;
}

/// Validates a column name for use as an SQL identifier.
pub fn column(name: &str) -> Result<&str, StoreError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(name)
    } else {
        Err(StoreError::InvalidColumn(name.to_string()))
    }
}

pub fn to_record<T: Serialize>(table: Table, value: &T) -> Result<Record, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject(table)),
    }
}

pub fn from_record<T: DeserializeOwned>(record: Record) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(record))?)
}

/// Reads the `id` column of a stored record.
pub fn record_id(record: &Record) -> Option<Uuid> {
    record
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_are_checked() {
        assert!(column("user_id").is_ok());
        assert!(column("_hidden").is_ok());
        assert!(column("quantity_in_stock2").is_ok());
        assert!(column("").is_err());
        assert!(column("1abc").is_err());
        assert!(column("name; DROP TABLE products").is_err());
        assert!(column("Name").is_err());
    }

    #[test]
    fn record_id_parses_uuid_strings() {
        let id = Uuid::new_v4();
        let mut rec = Record::new();
        rec.insert("id".into(), Value::String(id.to_string()));
        assert_eq!(record_id(&rec), Some(id));

        rec.insert("id".into(), Value::from(42));
        assert_eq!(record_id(&rec), None);
    }
}

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{column, DataStore, Filter, OrderBy, Record, StoreError, Table};

/// In-process store backed by a map of tables.
///
/// Mirrors the column defaults of the hosted schema: a missing `id` gets a
/// fresh UUID and a missing `created_at` gets the insertion time.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<Table, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held in `table`.
    pub async fn count(&self, table: Table) -> usize {
        self.tables.read().await.get(&table).map_or(0, Vec::len)
    }
}

fn matches(record: &Record, filter: &Filter) -> bool {
    filter.conditions().iter().all(|(col, expected)| {
        let actual = record.get(col).unwrap_or(&Value::Null);
        actual == expected
    })
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn with_defaults(mut record: Record) -> Record {
    if !matches!(record.get("id"), Some(Value::String(_))) {
        record.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
    }
    let now = Value::String(Utc::now().to_rfc3339());
    record.entry("created_at").or_insert_with(|| now.clone());
    record.entry("updated_at").or_insert(now);
    record
}

fn check_columns(record: &Record) -> Result<(), StoreError> {
    record.keys().try_for_each(|k| column(k).map(|_| ()))
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn find(&self, table: Table, filter: &Filter) -> Result<Option<Record>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(&table)
            .and_then(|rows| rows.iter().find(|r| matches(r, filter)))
            .cloned())
    }

    async fn insert(&self, table: Table, record: Record) -> Result<Record, StoreError> {
        check_columns(&record)?;
        let record = with_defaults(record);
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table).or_default();
        if rows.iter().any(|r| r.get("id") == record.get("id")) {
            return Err(StoreError::Conflict(format!("duplicate id in {table}")));
        }
        rows.push(record.clone());
        Ok(record)
    }

    async fn list(
        &self,
        table: Table,
        filter: &Filter,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Record>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Record> = tables
            .get(&table)
            .map(|rows| rows.iter().filter(|r| matches(r, filter)).cloned().collect())
            .unwrap_or_default();

        if let Some(order) = order {
            let col = column(&order.column)?;
            rows.sort_by(|a, b| {
                let ord = compare_values(
                    a.get(col).unwrap_or(&Value::Null),
                    b.get(col).unwrap_or(&Value::Null),
                );
                if order.ascending { ord } else { ord.reverse() }
            });
        }
        Ok(rows)
    }

    async fn update(&self, table: Table, id: Uuid, patch: Record) -> Result<Option<Record>, StoreError> {
        check_columns(&patch)?;
        let id = Value::String(id.to_string());
        let mut tables = self.tables.write().await;
        let Some(row) = tables
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|r| r.get("id") == Some(&id)))
        else {
            return Ok(None);
        };
        for (k, v) in patch {
            if k != "id" {
                row.insert(k, v);
            }
        }
        row.insert("updated_at".into(), Value::String(Utc::now().to_rfc3339()));
        Ok(Some(row.clone()))
    }

    async fn upsert(
        &self,
        table: Table,
        record: Record,
        conflict_column: &str,
    ) -> Result<Record, StoreError> {
        check_columns(&record)?;
        let col = column(conflict_column)?;
        let key = record.get(col).cloned().unwrap_or(Value::Null);
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table).or_default();
        if let Some(row) = rows.iter_mut().find(|r| r.get(col) == Some(&key)) {
            for (k, v) in record {
                if k != "id" {
                    row.insert(k, v);
                }
            }
            row.insert("updated_at".into(), Value::String(Utc::now().to_rfc3339()));
            return Ok(row.clone());
        }
        let record = with_defaults(record);
        rows.push(record.clone());
        Ok(record)
    }

    async fn delete(&self, table: Table, id: Uuid) -> Result<bool, StoreError> {
        let id = Value::String(id.to_string());
        let mut tables = self.tables.write().await;
        let Some(rows) = tables.get_mut(&table) else {
            return Ok(false);
        };
        let before = rows.len();
        rows.retain(|r| r.get("id") != Some(&id));
        Ok(rows.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> Record {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn insert_fills_id_and_find_matches_all_conditions() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4().to_string();
        let saved = store
            .insert(Table::Categories, rec(json!({ "name": "Tools", "user_id": owner })))
            .await
            .unwrap();
        assert!(saved.get("id").and_then(Value::as_str).is_some());
        assert!(saved.contains_key("created_at"));

        let hit = store
            .find(Table::Categories, &Filter::new().eq("name", "Tools").eq("user_id", owner.clone()))
            .await
            .unwrap();
        assert!(hit.is_some());

        let miss = store
            .find(Table::Categories, &Filter::new().eq("name", "Tools").eq("user_id", "someone-else"))
            .await
            .unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn list_orders_and_filters() {
        let store = MemoryStore::new();
        for (name, votes) in [("b", 2), ("a", 5), ("c", 1)] {
            store
                .insert(Table::Features, rec(json!({ "title": name, "votes": votes, "kind": "x" })))
                .await
                .unwrap();
        }
        store
            .insert(Table::Features, rec(json!({ "title": "z", "votes": 9, "kind": "y" })))
            .await
            .unwrap();

        let rows = store
            .list(Table::Features, &Filter::new().eq("kind", "x"), Some(&OrderBy::desc("votes")))
            .await
            .unwrap();
        let titles: Vec<_> = rows.iter().map(|r| r["title"].as_str().unwrap()).collect();
        assert_eq!(titles, ["a", "b", "c"]);

        let rows = store
            .list(Table::Features, &Filter::new(), Some(&OrderBy::asc("title")))
            .await
            .unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["title"], "a");
    }

    #[tokio::test]
    async fn update_and_delete_by_id() {
        let store = MemoryStore::new();
        let saved = store
            .insert(Table::Modules, rec(json!({ "title": "POS", "price_monthly": 10.0 })))
            .await
            .unwrap();
        let id = super::super::record_id(&saved).unwrap();

        let updated = store
            .update(Table::Modules, id, rec(json!({ "price_monthly": 12.5 })))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated["price_monthly"], 12.5);
        assert_eq!(updated["title"], "POS");

        assert!(store.update(Table::Modules, Uuid::new_v4(), Record::new()).await.unwrap().is_none());
        assert!(store.delete(Table::Modules, id).await.unwrap());
        assert!(!store.delete(Table::Modules, id).await.unwrap());
        assert_eq!(store.count(Table::Modules).await, 0);
    }

    #[tokio::test]
    async fn upsert_overwrites_on_conflict_column() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4().to_string();
        store
            .upsert(Table::CompanyTypes, rec(json!({ "user_id": user, "type": "retail" })), "user_id")
            .await
            .unwrap();
        let second = store
            .upsert(Table::CompanyTypes, rec(json!({ "user_id": user, "type": "grocery" })), "user_id")
            .await
            .unwrap();
        assert_eq!(second["type"], "grocery");
        assert_eq!(store.count(Table::CompanyTypes).await, 1);
    }

    #[tokio::test]
    async fn rejects_bad_column_names() {
        let store = MemoryStore::new();
        let err = store
            .insert(Table::Products, rec(json!({ "name\"; --": "x" })))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidColumn(_)));
    }
}

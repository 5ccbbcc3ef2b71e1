#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use stockflow_backend::store::{
    DataStore, Filter, MemoryStore, OrderBy, Record, StoreError, Table,
};

/// In-memory store that rejects chosen writes.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    failing_inserts: Vec<(Table, Option<String>)>,
    failing_upserts: Vec<Table>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects inserts into `table`, or only those whose name matches.
    pub fn fail_insert(mut self, table: Table, name: Option<&str>) -> Self {
        self.failing_inserts.push((table, name.map(str::to_string)));
        self
    }

    pub fn fail_upsert(mut self, table: Table) -> Self {
        self.failing_upserts.push(table);
        self
    }

    fn rejects_insert(&self, table: Table, record: &Record) -> bool {
        let name = record
            .get("name")
            .or_else(|| record.get("product_name"))
            .and_then(Value::as_str);
        self.failing_inserts.iter().any(|(t, wanted)| {
            *t == table && wanted.as_deref().map_or(true, |w| Some(w) == name)
        })
    }
}

#[async_trait]
impl DataStore for FlakyStore {
    async fn find(&self, table: Table, filter: &Filter) -> Result<Option<Record>, StoreError> {
        self.inner.find(table, filter).await
    }

    async fn insert(&self, table: Table, record: Record) -> Result<Record, StoreError> {
        if self.rejects_insert(table, &record) {
            return Err(StoreError::Rejected(format!("insert into {table} refused")));
        }
        self.inner.insert(table, record).await
    }

    async fn list(
        &self,
        table: Table,
        filter: &Filter,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Record>, StoreError> {
        self.inner.list(table, filter, order).await
    }

    async fn update(&self, table: Table, id: Uuid, patch: Record) -> Result<Option<Record>, StoreError> {
        self.inner.update(table, id, patch).await
    }

    async fn upsert(
        &self,
        table: Table,
        record: Record,
        conflict_column: &str,
    ) -> Result<Record, StoreError> {
        if self.failing_upserts.contains(&table) {
            return Err(StoreError::Rejected(format!("upsert into {table} refused")));
        }
        self.inner.upsert(table, record, conflict_column).await
    }

    async fn delete(&self, table: Table, id: Uuid) -> Result<bool, StoreError> {
        self.inner.delete(table, id).await
    }
}

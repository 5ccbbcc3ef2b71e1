use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Error as SqlxError, PgPool, Postgres, QueryBuilder};
use tracing::{error, instrument};
use uuid::Uuid;

use super::{column, DataStore, Filter, OrderBy, Record, StoreError, Table};

/// Store backed by the hosted PostgreSQL schema.
///
/// Rows travel as `jsonb`: reads use `to_jsonb(row)`, writes go through
/// `jsonb_populate_record` so each column keeps its declared type and
/// omitted columns fall back to their defaults.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_db_error(err: SqlxError, table: Table) -> StoreError {
    match err {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            StoreError::Conflict(format!("Record already exists in {table}"))
        }
        other => {
            error!(?other, %table, "Query failed");
            other.into()
        }
    }
}

fn into_record(table: Table, value: Value) -> Result<Record, StoreError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject(table)),
    }
}

/// Filter value bound with the type of the column it is compared to, so
/// the column is never cast and its indexes stay usable.
#[derive(Debug, Clone, PartialEq)]
enum FilterValue {
    Uuid(Uuid),
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn is_id_column(col: &str) -> bool {
    col == "id" || col.ends_with("_id")
}

fn filter_value(col: &str, value: &Value) -> FilterValue {
    match value {
        Value::String(s) if is_id_column(col) => match Uuid::parse_str(s) {
            Ok(id) => FilterValue::Uuid(id),
            Err(_) => FilterValue::Text(s.clone()),
        },
        Value::String(s) => FilterValue::Text(s.clone()),
        Value::Bool(b) => FilterValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FilterValue::Int(i),
            None => FilterValue::Float(n.as_f64().unwrap_or_default()),
        },
        other => FilterValue::Text(other.to_string()),
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &Filter) -> Result<(), StoreError> {
    for (i, (col, value)) in filter.conditions().iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        qb.push("t.").push(column(col)?);
        if value.is_null() {
            qb.push(" IS NULL");
            continue;
        }
        qb.push(" = ");
        match filter_value(col, value) {
            FilterValue::Uuid(v) => qb.push_bind(v),
            FilterValue::Bool(v) => qb.push_bind(v),
            FilterValue::Int(v) => qb.push_bind(v),
            FilterValue::Float(v) => qb.push_bind(v),
            FilterValue::Text(v) => qb.push_bind(v),
        };
    }
    Ok(())
}

fn column_list(record: &Record) -> Result<Vec<&str>, StoreError> {
    record.keys().map(|k| column(k)).collect()
}

#[async_trait]
impl DataStore for PgStore {
    #[instrument(skip(self, filter))]
    async fn find(&self, table: Table, filter: &Filter) -> Result<Option<Record>, StoreError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT to_jsonb(t) FROM {table} t"));
        push_filter(&mut qb, filter)?;
        qb.push(" LIMIT 1");

        let row = qb
            .build_query_as::<(Value,)>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, table))?;
        row.map(|(v,)| into_record(table, v)).transpose()
    }

    #[instrument(skip(self, record))]
    async fn insert(&self, table: Table, record: Record) -> Result<Record, StoreError> {
        let cols = column_list(&record)?.join(", ");
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "INSERT INTO {table} ({cols}) SELECT {cols} FROM jsonb_populate_record(NULL::{table}, "
        ));
        qb.push_bind(Value::Object(record.clone()));
        qb.push(format!(") RETURNING to_jsonb({table}.*)"));

        let (value,) = qb
            .build_query_as::<(Value,)>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, table))?;
        into_record(table, value)
    }

    #[instrument(skip(self, filter, order))]
    async fn list(
        &self,
        table: Table,
        filter: &Filter,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Record>, StoreError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT to_jsonb(t) FROM {table} t"));
        push_filter(&mut qb, filter)?;
        if let Some(order) = order {
            qb.push(" ORDER BY t.")
                .push(column(&order.column)?)
                .push(if order.ascending { " ASC" } else { " DESC" });
        }

        let rows = qb
            .build_query_as::<(Value,)>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, table))?;
        rows.into_iter().map(|(v,)| into_record(table, v)).collect()
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, table: Table, id: Uuid, patch: Record) -> Result<Option<Record>, StoreError> {
        let cols: Vec<&str> = column_list(&patch)?.into_iter().filter(|c| *c != "id").collect();
        if cols.is_empty() {
            return self.find(table, &Filter::new().eq("id", id.to_string())).await;
        }
        let assignments = cols
            .iter()
            .map(|c| format!("{c} = r.{c}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "UPDATE {table} AS t SET {assignments} FROM jsonb_populate_record(NULL::{table}, "
        ));
        qb.push_bind(Value::Object(patch.clone()));
        qb.push(") AS r WHERE t.id = ").push_bind(id);
        qb.push(" RETURNING to_jsonb(t.*)");

        let row = qb
            .build_query_as::<(Value,)>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, table))?;
        row.map(|(v,)| into_record(table, v)).transpose()
    }

    #[instrument(skip(self, record))]
    async fn upsert(
        &self,
        table: Table,
        record: Record,
        conflict_column: &str,
    ) -> Result<Record, StoreError> {
        let conflict = column(conflict_column)?;
        let all = column_list(&record)?;
        let cols = all.join(", ");
        let updates = all
            .iter()
            .filter(|c| **c != conflict && **c != "id")
            .map(|c| format!("{c} = EXCLUDED.{c}"))
            .collect::<Vec<_>>();
        let on_conflict = if updates.is_empty() {
            format!("ON CONFLICT ({conflict}) DO NOTHING")
        } else {
            format!("ON CONFLICT ({conflict}) DO UPDATE SET {}", updates.join(", "))
        };

        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "INSERT INTO {table} ({cols}) SELECT {cols} FROM jsonb_populate_record(NULL::{table}, "
        ));
        qb.push_bind(Value::Object(record.clone()));
        qb.push(format!(") {on_conflict} RETURNING to_jsonb({table}.*)"));

        let row = qb
            .build_query_as::<(Value,)>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, table))?;
        match row {
            Some((v,)) => into_record(table, v),
            // DO NOTHING returns no row; the existing one is unchanged.
            None => Ok(record),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, table: Table, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, table))?;
        Ok(result.rows_affected() > 0)
    }
}

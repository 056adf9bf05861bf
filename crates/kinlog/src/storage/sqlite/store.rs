//! SQLite store implementation.
//!
//! One connection serves every entity kind; statements and row mapping
//! come from each kind's [`SqlRecord`] implementation.

use async_trait::async_trait;
use rusqlite::params_from_iter;
use rusqlite::types::Value;
use tokio_rusqlite::Connection;

use kinlog_core::model::EntityId;
use kinlog_core::storage::{RepositoryError, Result, ScopedStore, Store};

use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::record::{ScopedSqlRecord, SqlRecord};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based store.
///
/// Clones share the same background connection.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a file-based database, creating the file and schema if needed.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Runs a select statement and maps every row with `E::from_row`.
    async fn query_list<E: SqlRecord>(&self, sql: &'static str, params: Vec<Value>) -> Result<Vec<E>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(params_from_iter(params), E::from_row)
                    .map_err(wrap_err)?;

                let mut entities = Vec::new();
                for row_result in rows {
                    entities.push(row_result.map_err(wrap_err)?);
                }
                Ok(entities)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, E::KIND))
    }
}

#[async_trait]
impl<E: SqlRecord> Store<E> for SqliteStore {
    async fn insert(&self, mut entity: E) -> Result<E> {
        let values = entity
            .to_values()
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(E::INSERT, params_from_iter(values))
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, E::KIND))?;

        entity.set_id(id);
        Ok(entity)
    }

    async fn get(&self, id: EntityId) -> Result<Option<E>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(E::SELECT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], E::from_row) {
                    Ok(entity) => Ok(Some(entity)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::KIND, id))
    }

    async fn list_all(&self) -> Result<Vec<E>> {
        self.query_list(E::SELECT_ALL, Vec::new()).await
    }

    async fn update(&self, entity: E) -> Result<E> {
        let id = entity.id();
        if !entity.is_persisted() {
            return Err(RepositoryError::InvalidData(format!(
                "cannot update {} without an id",
                E::KIND
            )));
        }

        let mut values = entity
            .to_values()
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        values.push(Value::Integer(id));

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(E::UPDATE, params_from_iter(values))
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::KIND, id))?;

        Ok(entity)
    }

    async fn delete(&self, id: EntityId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(E::DELETE, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, E::KIND, id))
    }

    async fn count(&self) -> Result<u64> {
        let count = self
            .conn
            .call(|conn| {
                conn.query_row(E::COUNT, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, E::KIND))?;

        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl<E: ScopedSqlRecord> ScopedStore<E> for SqliteStore {
    async fn list_by_parent(&self, parent_id: EntityId) -> Result<Vec<E>> {
        self.query_list(E::SELECT_BY_PARENT, vec![Value::Integer(parent_id)])
            .await
    }
}

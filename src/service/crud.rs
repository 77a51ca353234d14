//! CRUD execution against PostgreSQL.

use crate::error::StoreError;
use crate::model::{Kurban, NewKurban};
use crate::sql;
use async_trait::async_trait;
use sqlx::PgPool;

/// Operations the handlers need from the record store.
#[async_trait]
pub trait KurbanStore: Send + Sync {
    /// All rows, ordered by id. Empty table yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Kurban>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Kurban>, StoreError>;

    /// Insert one row and return the id the store assigned.
    async fn insert(&self, new: &NewKurban) -> Result<i32, StoreError>;

    /// Overwrite all four fields of row `id`. Returns rows affected.
    async fn update(&self, id: i32, new: &NewKurban) -> Result<u64, StoreError>;

    /// Returns rows affected; 0 means no such id.
    async fn delete_by_id(&self, id: i32) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Store backed by a shared connection pool. Each call checks a connection out
/// for one statement; sqlx returns it to the pool on drop.
#[derive(Clone)]
pub struct PgKurbanStore {
    pool: PgPool,
}

impl PgKurbanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl KurbanStore for PgKurbanStore {
    async fn list_all(&self) -> Result<Vec<Kurban>, StoreError> {
        tracing::debug!(sql = %sql::SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Kurban>(sql::SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Kurban>, StoreError> {
        tracing::debug!(sql = %sql::SELECT_BY_ID, id, "query");
        let row = sqlx::query_as::<_, Kurban>(sql::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, new: &NewKurban) -> Result<i32, StoreError> {
        tracing::debug!(sql = %sql::INSERT, params = ?new, "query");
        let (id,): (i32,) = sqlx::query_as(sql::INSERT)
            .bind(&new.name)
            .bind(&new.kind)
            .bind(new.weight)
            .bind(new.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i32, new: &NewKurban) -> Result<u64, StoreError> {
        tracing::debug!(sql = %sql::UPDATE, id, params = ?new, "query");
        let result = sqlx::query(sql::UPDATE)
            .bind(&new.name)
            .bind(&new.kind)
            .bind(new.weight)
            .bind(new.price)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, StoreError> {
        tracing::debug!(sql = %sql::DELETE_BY_ID, id, "query");
        let result = sqlx::query(sql::DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query(sql::PING).fetch_optional(&self.pool).await?;
        Ok(())
    }
}

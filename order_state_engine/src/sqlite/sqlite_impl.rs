//! `SqliteDatabase` is a concrete implementation of an order state storage backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements the [`OrderStateManagement`] trait.
use std::fmt::Debug;

use log::trace;
use sqlx::SqlitePool;

use super::db::{db_url, new_pool, order_states};
use crate::{
    db_types::{NewOrderState, OrderState, OrderStateId},
    traits::OrderStateManagement,
    OrderStateApiError,
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl OrderStateManagement for SqliteDatabase {
    async fn insert_order_state(&self, new_state: NewOrderState) -> Result<OrderState, OrderStateApiError> {
        let mut conn = self.pool.acquire().await?;
        let order_state = order_states::insert_order_state(new_state, &mut conn).await?;
        Ok(order_state)
    }

    async fn fetch_order_states(&self) -> Result<Vec<OrderState>, OrderStateApiError> {
        let mut conn = self.pool.acquire().await?;
        let order_states = order_states::fetch_order_states(&mut conn).await?;
        Ok(order_states)
    }

    async fn fetch_order_state_by_id(&self, id: &OrderStateId) -> Result<Option<OrderState>, OrderStateApiError> {
        let mut conn = self.pool.acquire().await?;
        let order_state = order_states::fetch_order_state_by_id(id, &mut conn).await?;
        Ok(order_state)
    }

    async fn fetch_order_state_by_name(&self, state: &str) -> Result<Option<OrderState>, OrderStateApiError> {
        let mut conn = self.pool.acquire().await?;
        let order_state = order_states::fetch_order_state_by_name(state, &mut conn).await?;
        Ok(order_state)
    }

    async fn delete_order_state(&self, id: &OrderStateId) -> Result<Option<OrderState>, OrderStateApiError> {
        let mut conn = self.pool.acquire().await?;
        let order_state = order_states::delete_order_state(id, &mut conn).await?;
        Ok(order_state)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object using the URL from the environment.
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db_url();
        SqliteDatabase::new_with_url(url.as_str(), max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        trace!("Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// Runs the embedded schema migrations against this database.
    pub async fn run_migrations(&self) -> Result<(), OrderStateApiError> {
        sqlx::migrate!("./src/sqlite/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| OrderStateApiError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

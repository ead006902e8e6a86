//! Unified API for accessing order state records.

use std::fmt::Debug;

use futures_util::future::join_all;
use log::*;

use crate::{
    db_types::{NewOrderState, OrderState, OrderStateId, StateName},
    traits::OrderStateManagement,
    OrderStateApiError,
};

/// The `OrderStateApi` provides a unified API for managing order state records.
pub struct OrderStateApi<B> {
    db: B,
}

impl<B: Debug> Debug for OrderStateApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderStateApi ({:?})", self.db)
    }
}

impl<B> OrderStateApi<B>
where B: OrderStateManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// Validates the given state label against the schema rules and persists a new record with a fresh identifier.
    ///
    /// A schema violation yields [`OrderStateApiError::ValidationError`]; the label is otherwise taken as-is, so
    /// non-canonical states are accepted.
    pub async fn create_order_state(&self, state: &str) -> Result<OrderState, OrderStateApiError> {
        let new_state = NewOrderState::try_new(state)?;
        let order_state = self.db.insert_order_state(new_state).await?;
        debug!("🗂️ Order state [{}] created with id {}", order_state.state, order_state.id);
        Ok(order_state)
    }

    /// Fetches all order state records, projected to `{id, state}`, in creation order.
    pub async fn order_states(&self) -> Result<Vec<OrderState>, OrderStateApiError> {
        self.db.fetch_order_states().await
    }

    /// Fetches the record with the given identifier. If no record exists, `None` is returned.
    pub async fn order_state_by_id(&self, id: &OrderStateId) -> Result<Option<OrderState>, OrderStateApiError> {
        self.db.fetch_order_state_by_id(id).await
    }

    /// Atomically removes the record with the given identifier, returning it, or `None` if it did not exist.
    pub async fn delete_order_state(&self, id: &OrderStateId) -> Result<Option<OrderState>, OrderStateApiError> {
        self.db.delete_order_state(id).await
    }

    /// Ensures each canonical state label is present in the store, inserting the missing ones.
    ///
    /// The four check-and-insert operations run concurrently and complete in no particular order. Failures are
    /// logged and otherwise ignored; seeding is best-effort and idempotent with respect to the final set of states,
    /// though not atomic. Returns the number of records inserted.
    pub async fn seed_default_states(&self) -> usize {
        let seeds = StateName::ALL.iter().map(|name| self.seed_state(*name));
        join_all(seeds).await.into_iter().filter(|inserted| *inserted).count()
    }

    async fn seed_state(&self, name: StateName) -> bool {
        match self.ensure_state_exists(name).await {
            Ok(true) => {
                info!("🗂️ Seeded default order state [{name}]");
                true
            },
            Ok(false) => {
                trace!("🗂️ Default order state [{name}] already present");
                false
            },
            Err(e) => {
                warn!("🗂️ Could not seed default order state [{name}]. {e}");
                false
            },
        }
    }

    async fn ensure_state_exists(&self, name: StateName) -> Result<bool, OrderStateApiError> {
        match self.db.fetch_order_state_by_name(name.as_str()).await? {
            Some(_) => Ok(false),
            None => {
                self.db.insert_order_state(NewOrderState::from(name)).await?;
                Ok(true)
            },
        }
    }
}

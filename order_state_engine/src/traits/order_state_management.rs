use crate::{
    db_types::{NewOrderState, OrderState, OrderStateId},
    OrderStateApiError,
};

/// The `OrderStateManagement` trait defines the behaviour for storing and querying order state records in the
/// database backend.
#[allow(async_fn_in_trait)]
pub trait OrderStateManagement {
    /// Persists a new record and returns it, with the store-assigned identifier filled in.
    async fn insert_order_state(&self, new_state: NewOrderState) -> Result<OrderState, OrderStateApiError>;

    /// Fetches every record, projecting only `id` and `state`, in creation order.
    async fn fetch_order_states(&self) -> Result<Vec<OrderState>, OrderStateApiError>;

    /// Fetches the record with the given identifier. If no record matches, `None` is returned.
    async fn fetch_order_state_by_id(&self, id: &OrderStateId) -> Result<Option<OrderState>, OrderStateApiError>;

    /// Fetches a record whose `state` field matches the given label exactly. If no record matches, `None` is
    /// returned.
    async fn fetch_order_state_by_name(&self, state: &str) -> Result<Option<OrderState>, OrderStateApiError>;

    /// Atomically finds and removes the record with the given identifier. The removed record is returned, or `None`
    /// if no record matched.
    async fn delete_order_state(&self, id: &OrderStateId) -> Result<Option<OrderState>, OrderStateApiError>;
}

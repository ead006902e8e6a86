use mockall::mock;
use order_state_engine::{
    db_types::{NewOrderState, OrderState, OrderStateId},
    traits::OrderStateManagement,
    OrderStateApiError,
};

mock! {
    pub OrderStateDb {}
    impl OrderStateManagement for OrderStateDb {
        async fn insert_order_state(&self, new_state: NewOrderState) -> Result<OrderState, OrderStateApiError>;
        async fn fetch_order_states(&self) -> Result<Vec<OrderState>, OrderStateApiError>;
        async fn fetch_order_state_by_id(&self, id: &OrderStateId) -> Result<Option<OrderState>, OrderStateApiError>;
        async fn fetch_order_state_by_name(&self, state: &str) -> Result<Option<OrderState>, OrderStateApiError>;
        async fn delete_order_state(&self, id: &OrderStateId) -> Result<Option<OrderState>, OrderStateApiError>;
    }
}

use log::debug;
use sqlx::SqliteConnection;

use crate::db_types::{NewOrderState, OrderState, OrderStateId};

/// Inserts a new record with a freshly generated identifier, using the given connection. This is not atomic. You can
/// embed this call inside a transaction if you need to ensure atomicity, and pass `&mut *tx` as the connection
/// argument.
pub async fn insert_order_state(
    new_state: NewOrderState,
    conn: &mut SqliteConnection,
) -> Result<OrderState, sqlx::Error> {
    let id = OrderStateId::random();
    let order_state: OrderState = sqlx::query_as(
        r#"
            INSERT INTO order_states (id, state)
            VALUES ($1, $2)
            RETURNING id, state;
        "#,
    )
    .bind(id)
    .bind(new_state.state)
    .fetch_one(conn)
    .await?;
    debug!("📝️ Order state [{}] inserted with id {}", order_state.state, order_state.id);
    Ok(order_state)
}

/// Fetches all records, projecting only the `id` and `state` columns.
///
/// Resulting records are ordered by `created_at` in ascending order.
pub async fn fetch_order_states(conn: &mut SqliteConnection) -> Result<Vec<OrderState>, sqlx::Error> {
    let order_states =
        sqlx::query_as("SELECT id, state FROM order_states ORDER BY created_at ASC").fetch_all(conn).await?;
    Ok(order_states)
}

/// Returns the record with the given `id`, or `None` if it does not exist.
pub async fn fetch_order_state_by_id(
    id: &OrderStateId,
    conn: &mut SqliteConnection,
) -> Result<Option<OrderState>, sqlx::Error> {
    let order_state = sqlx::query_as("SELECT id, state FROM order_states WHERE id = $1")
        .bind(id.as_str())
        .fetch_optional(conn)
        .await?;
    Ok(order_state)
}

/// Returns a record whose `state` column matches the given label exactly, or `None`. Used by the startup seeder to
/// check for presence before inserting.
pub async fn fetch_order_state_by_name(
    state: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<OrderState>, sqlx::Error> {
    let order_state = sqlx::query_as("SELECT id, state FROM order_states WHERE state = $1 LIMIT 1")
        .bind(state)
        .fetch_optional(conn)
        .await?;
    Ok(order_state)
}

/// Atomically finds and removes the record with the given `id`. The removed record is returned, or `None` if no
/// record matched.
pub async fn delete_order_state(
    id: &OrderStateId,
    conn: &mut SqliteConnection,
) -> Result<Option<OrderState>, sqlx::Error> {
    let order_state = sqlx::query_as("DELETE FROM order_states WHERE id = $1 RETURNING id, state")
        .bind(id.as_str())
        .fetch_optional(conn)
        .await?;
    Ok(order_state)
}

//! # The Order State Engine public API
//!
//! The API is a thin, backend-agnostic layer over the [`crate::traits::OrderStateManagement`] trait. Construct an
//! [`order_states_api::OrderStateApi`] with any backend (e.g. [`crate::SqliteDatabase`]) and call through it:
//!
//! ```nocompile
//! let db = SqliteDatabase::new_with_url(...).await?;
//! let api = OrderStateApi::new(db);
//! let created = api.create_order_state("CONFIRMED").await?;
//! ```
pub mod errors;
pub mod order_states_api;

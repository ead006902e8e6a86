//! # Order State Engine
//!
//! The storage backend for the order state service. The library is divided into two main sections:
//! 1. Database management and control. Currently, SQLite is the only supported backend. You should never need to
//!    access the database directly; use the public API instead. The exception is the data types used in the database.
//!    These are defined in the [`db_types`] module and are public.
//! 2. The engine public API ([`OrderStateApi`]). This provides the public-facing functionality of the engine:
//!    creating, listing, fetching and removing order state records, and seeding the canonical set of states at
//!    startup. Specific backends need to implement the [`traits::OrderStateManagement`] trait in order to act as a
//!    backend for the order state server.
pub mod db_types;
mod ose_api;
#[cfg(feature = "sqlite")]
mod sqlite;
pub mod traits;

pub use ose_api::{errors::OrderStateApiError, order_states_api::OrderStateApi};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;

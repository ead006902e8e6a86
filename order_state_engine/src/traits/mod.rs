//! # Database management and control.
//!
//! This module provides the interface that defines the contract order state storage *backends* must fulfil.
//!
//! [`OrderStateManagement`] covers the full lifecycle of a record: insertion with a store-assigned identifier,
//! projection-only reads, and atomic removal. The server only ever talks to a backend through this trait (via
//! [`crate::OrderStateApi`]), which is also what lets the endpoint tests substitute a mock backend.
mod order_state_management;

pub use order_state_management::OrderStateManagement;

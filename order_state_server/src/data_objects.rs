use std::fmt::Display;

use order_state_engine::db_types::{OrderState, OrderStateId};
use serde::{Deserialize, Serialize};

use crate::config::PublicUrl;

/// Request body for creating a new order state record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderStateRequest {
    pub state: String,
}

/// A hint describing a follow-up request a caller can make against a record named in the enclosing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestHint {
    pub description: String,
    pub method: String,
    pub url: String,
}

impl RequestHint {
    /// Hint pointing at the record that was just created.
    pub fn created_order_state(base: &PublicUrl, id: &OrderStateId) -> Self {
        Self {
            description: "HTTP request for getting details of created order state.".to_string(),
            method: "GET".to_string(),
            url: format!("{}/status/{id}", base.as_str()),
        }
    }

    /// Hint pointing at a single record in a listing.
    pub fn order_state_details(base: &PublicUrl, id: &OrderStateId) -> Self {
        Self {
            description: "HTTP request for getting certain order state details.".to_string(),
            method: "GET".to_string(),
            url: format!("{}/status/{id}", base.as_str()),
        }
    }
}

/// Envelope returned from a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrderState {
    pub new_order_state: OrderState,
    pub request: RequestHint,
}

/// One entry of the list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStateListEntry {
    pub order_state: OrderState,
    pub request: RequestHint,
}

/// Envelope returned from a successful list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStateList {
    pub count: usize,
    pub order_states: Vec<OrderStateListEntry>,
}

impl OrderStateList {
    pub fn new(order_states: Vec<OrderState>, base: &PublicUrl) -> Self {
        let order_states = order_states
            .into_iter()
            .map(|os| OrderStateListEntry { request: RequestHint::order_state_details(base, &os.id), order_state: os })
            .collect::<Vec<OrderStateListEntry>>();
        Self { count: order_states.len(), order_states }
    }
}

/// Envelope returned from a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedOrderState {
    pub message: String,
    pub removed_order_state: OrderState,
}

/// A bare message payload, used for the not-found branches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Display>(message: S) -> Self {
        Self { message: message.to_string() }
    }
}

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;
use uuid::Uuid;

//--------------------------------------    OrderStateId     ---------------------------------------------------------
/// A lightweight wrapper around the opaque identifier assigned to each order state record.
#[derive(Debug, Clone, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct OrderStateId(pub String);

impl OrderStateId {
    /// Generates a fresh, collision-resistant identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderStateId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for OrderStateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for OrderStateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--------------------------------------      StateName       --------------------------------------------------------
/// The canonical order state labels.
///
/// The store accepts any string that passes schema validation. This enum only drives the startup seeder and gives
/// callers a convenient spelling of the well-known labels; it is never used to reject caller-supplied states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateName {
    /// The order has been confirmed.
    Confirmed,
    /// The order has been placed but not confirmed yet.
    Unconfirmed,
    /// The order has been cancelled by the user or admin.
    Cancelled,
    /// The order has been fulfilled.
    Done,
}

impl StateName {
    pub const ALL: [StateName; 4] = [StateName::Confirmed, StateName::Unconfirmed, StateName::Cancelled, StateName::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateName::Confirmed => "CONFIRMED",
            StateName::Unconfirmed => "UNCONFIRMED",
            StateName::Cancelled => "CANCELLED",
            StateName::Done => "DONE",
        }
    }
}

impl Display for StateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid order state name: {0}")]
pub struct ConversionError(String);

impl FromStr for StateName {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONFIRMED" => Ok(Self::Confirmed),
            "UNCONFIRMED" => Ok(Self::Unconfirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            "DONE" => Ok(Self::Done),
            s => Err(ConversionError(s.to_string())),
        }
    }
}

//--------------------------------------    NewOrderState     --------------------------------------------------------
/// The schema cap on the length of the `state` field, in bytes.
pub const MAX_STATE_LEN: usize = 128;

/// An order state record that has passed schema validation but has not been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderState {
    pub state: String,
}

impl NewOrderState {
    /// Applies the schema rules for the `state` field: it is required (non-empty) and capped at [`MAX_STATE_LEN`]
    /// bytes. The canonical labels are not enforced; any string satisfying these rules is accepted.
    pub fn try_new<S: Into<String>>(state: S) -> Result<Self, StateValidationError> {
        let state = state.into();
        if state.is_empty() {
            return Err(StateValidationError::new("state", "Path `state` is required."));
        }
        if state.len() > MAX_STATE_LEN {
            return Err(StateValidationError::new(
                "state",
                format!("Path `state` may not exceed {MAX_STATE_LEN} characters."),
            ));
        }
        Ok(Self { state })
    }
}

impl From<StateName> for NewOrderState {
    fn from(name: StateName) -> Self {
        Self { state: name.as_str().to_string() }
    }
}

/// A schema rule violation, naming the offending field.
#[derive(Debug, Clone, Error)]
#[error("Field '{field}' failed validation: {message}")]
pub struct StateValidationError {
    pub field: &'static str,
    pub message: String,
}

impl StateValidationError {
    pub fn new<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self { field, message: message.into() }
    }
}

//--------------------------------------     OrderState       --------------------------------------------------------
/// A persisted order state record.
///
/// Reads project only these two columns, so this is the complete wire-visible shape of a record.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct OrderState {
    pub id: OrderStateId,
    pub state: String,
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn canonical_names_round_trip() {
        for name in StateName::ALL {
            let parsed = StateName::from_str(name.as_str()).expect("Canonical name should parse");
            assert_eq!(parsed, name);
        }
        assert!(StateName::from_str("SHIPPED").is_err());
        assert!(StateName::from_str("confirmed").is_err());
    }

    #[test]
    fn state_is_required() {
        let err = NewOrderState::try_new("").expect_err("Empty state should be rejected");
        assert_eq!(err.field, "state");
        assert!(err.message.contains("required"));
    }

    #[test]
    fn state_length_is_capped() {
        let long = "X".repeat(MAX_STATE_LEN + 1);
        let err = NewOrderState::try_new(long).expect_err("Oversized state should be rejected");
        assert_eq!(err.field, "state");
        let ok = NewOrderState::try_new("X".repeat(MAX_STATE_LEN)).expect("State at the cap should be accepted");
        assert_eq!(ok.state.len(), MAX_STATE_LEN);
    }

    #[test]
    fn non_canonical_states_pass_schema_validation() {
        let new_state = NewOrderState::try_new("ARCHIVED").expect("Schema does not enforce the canonical labels");
        assert_eq!(new_state.state, "ARCHIVED");
    }
}

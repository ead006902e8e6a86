use thiserror::Error;

use crate::db_types::StateValidationError;

#[derive(Debug, Clone, Error)]
pub enum OrderStateApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Order state failed schema validation. {0}")]
    ValidationError(#[from] StateValidationError),
}

impl From<sqlx::Error> for OrderStateApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}

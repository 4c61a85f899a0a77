use thiserror::Error;
use uuid::Uuid;

use shopbook_domain::{DateWindowError, MovementKindError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Ledger not found: {0}")]
    LedgerNotFound(String),
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Business not found: {0}")]
    BusinessNotFound(Uuid),
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),
    #[error("Movement not found: {0}")]
    MovementNotFound(Uuid),
    #[error("Business {business} does not belong to user {user}")]
    NotOwner { user: Uuid, business: Uuid },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Not enough history to forecast: {have} sale days recorded, {need} required")]
    InsufficientData { have: usize, need: usize },
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<DateWindowError> for CoreError {
    fn from(err: DateWindowError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

impl From<MovementKindError> for CoreError {
    fn from(err: MovementKindError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

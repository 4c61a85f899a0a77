//! Domain models for ledger movements.

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single dated financial event recorded against a business.
///
/// Movements are append-only: once recorded they are never updated or
/// deleted. Ordering within a day is the insertion order of the ledger's
/// movements table; no sequence field exists beyond the identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub id: Uuid,
    pub business_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: MovementKind,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Movement {
    pub fn new(
        business_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        kind: MovementKind,
        amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            business_id,
            date,
            time,
            kind,
            amount,
            category: None,
            note: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_sale(&self) -> bool {
        self.kind == MovementKind::Sale
    }
}

impl Identifiable for Movement {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Movement {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Classifies a movement as a sale or an expense.
///
/// These are the only two literals the ledger accepts; anything else is
/// rejected at write time.
pub enum MovementKind {
    Sale,
    Expense,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MovementKind::Sale => "sale",
            MovementKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for MovementKind {
    type Err = MovementKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sale" => Ok(MovementKind::Sale),
            "expense" => Ok(MovementKind::Expense),
            other => Err(MovementKindError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Error raised when parsing a movement kind literal.
pub enum MovementKindError {
    Unknown(String),
}

impl fmt::Display for MovementKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementKindError::Unknown(value) => {
                write!(f, "unknown movement kind `{}` (expected sale or expense)", value)
            }
        }
    }
}

impl std::error::Error for MovementKindError {}

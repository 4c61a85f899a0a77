//! Domain type for authenticated users.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// An account holder, created on first successful sign-in.
///
/// `subject` is the identity-provider subject id; authentication itself
/// happens outside the core, which only ever sees a resolved user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub subject: String,
    pub email: String,
    pub name: String,
}

impl User {
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            email: email.into(),
            name: name.into(),
        }
    }
}

impl Identifiable for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for User {
    fn name(&self) -> &str {
        &self.name
    }
}

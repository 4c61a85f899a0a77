//! Domain type for tenant businesses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A tenant-scoped ledger owned by exactly one user.
///
/// The owner relationship is immutable after creation; there is no
/// transfer-of-ownership path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Business {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
}

impl Business {
    pub fn new(owner_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into(),
        }
    }
}

impl Identifiable for Business {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Business {
    fn name(&self) -> &str {
        &self.name
    }
}

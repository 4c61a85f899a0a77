//! Domain type for inventory products.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// An inventory item tracked per business.
///
/// `stock` carries no floor: selling past zero leaves a negative count
/// rather than failing the sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub cost: f64,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    pub fn new(
        business_id: Uuid,
        name: impl Into<String>,
        cost: f64,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            business_id,
            name: name.into(),
            cost,
            price,
            stock,
        }
    }
}

impl Identifiable for Product {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

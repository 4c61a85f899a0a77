//! The in-memory ledger aggregate holding every bookkeeping table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{business::Business, movement::Movement, product::Product, user::User};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Snapshot of the four flat tables: users, businesses, products and
/// movements. Services operate on a loaded `Ledger`; persistence is a
/// whole-snapshot save behind the storage trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub businesses: Vec<Business>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub movements: Vec<Movement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            users: Vec::new(),
            businesses: Vec::new(),
            products: Vec::new(),
            movements: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_user(&mut self, user: User) -> Uuid {
        let id = user.id;
        self.users.push(user);
        self.touch();
        id
    }

    pub fn add_business(&mut self, business: Business) -> Uuid {
        let id = business.id;
        self.businesses.push(business);
        self.touch();
        id
    }

    pub fn add_product(&mut self, product: Product) -> Uuid {
        let id = product.id;
        self.products.push(product);
        self.touch();
        id
    }

    pub fn add_movement(&mut self, movement: Movement) -> Uuid {
        let id = movement.id;
        self.movements.push(movement);
        self.touch();
        id
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn user_by_subject(&self, subject: &str) -> Option<&User> {
        self.users.iter().find(|user| user.subject == subject)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    pub fn business(&self, id: Uuid) -> Option<&Business> {
        self.businesses.iter().find(|business| business.id == id)
    }

    pub fn businesses_for(&self, owner_id: Uuid) -> impl Iterator<Item = &Business> {
        self.businesses
            .iter()
            .filter(move |business| business.owner_id == owner_id)
    }

    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn product_mut(&mut self, id: Uuid) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| product.id == id)
    }

    pub fn products_for(&self, business_id: Uuid) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.business_id == business_id)
    }

    pub fn movement(&self, id: Uuid) -> Option<&Movement> {
        self.movements.iter().find(|movement| movement.id == id)
    }

    pub fn movements_for(&self, business_id: Uuid) -> impl Iterator<Item = &Movement> {
        self.movements
            .iter()
            .filter(move |movement| movement.business_id == business_id)
    }

    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

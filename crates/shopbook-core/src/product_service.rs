//! Business logic for inventory products.

use uuid::Uuid;

use shopbook_domain::{Ledger, Product};

use crate::{movement_service::validate_amount, CoreError};

/// Changeset applied by [`ProductService::update`]. `None` leaves the
/// field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub cost: Option<f64>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// Provides validated mutations for [`Product`] entities.
///
/// Stock intentionally has no floor; an oversell leaves a negative count.
pub struct ProductService;

impl ProductService {
    /// Adds a product to the business inventory and returns its id.
    pub fn record(
        ledger: &mut Ledger,
        business_id: Uuid,
        name: impl Into<String>,
        cost: f64,
        price: f64,
        stock: i64,
    ) -> Result<Uuid, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation(
                "product name must not be empty".into(),
            ));
        }
        validate_amount(cost)?;
        validate_amount(price)?;
        if ledger.business(business_id).is_none() {
            return Err(CoreError::BusinessNotFound(business_id));
        }
        Ok(ledger.add_product(Product::new(business_id, name, cost, price, stock)))
    }

    /// Updates an existing product by applying the provided changeset.
    pub fn update(
        ledger: &mut Ledger,
        product_id: Uuid,
        changes: ProductChanges,
    ) -> Result<(), CoreError> {
        if let Some(name) = changes.name.as_deref() {
            if name.trim().is_empty() {
                return Err(CoreError::Validation(
                    "product name must not be empty".into(),
                ));
            }
        }
        if let Some(cost) = changes.cost {
            validate_amount(cost)?;
        }
        if let Some(price) = changes.price {
            validate_amount(price)?;
        }
        let product = ledger
            .product_mut(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;
        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(cost) = changes.cost {
            product.cost = cost;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(stock) = changes.stock {
            product.stock = stock;
        }
        ledger.touch();
        Ok(())
    }

    /// Returns every product in the business inventory.
    pub fn list(ledger: &Ledger, business_id: Uuid) -> Result<Vec<&Product>, CoreError> {
        if ledger.business(business_id).is_none() {
            return Err(CoreError::BusinessNotFound(business_id));
        }
        Ok(ledger.products_for(business_id).collect())
    }
}

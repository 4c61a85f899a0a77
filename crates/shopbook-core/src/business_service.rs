//! Business logic for tenant businesses and ownership scoping.

use uuid::Uuid;

use shopbook_domain::{Business, Ledger};

use crate::CoreError;

/// Provides validated mutations and the ownership check for [`Business`]
/// entities.
pub struct BusinessService;

impl BusinessService {
    /// Creates a business owned by `owner_id`. The owner relationship is
    /// fixed at creation; there is no transfer path.
    pub fn create(
        ledger: &mut Ledger,
        owner_id: Uuid,
        name: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation(
                "business name must not be empty".into(),
            ));
        }
        if ledger.user(owner_id).is_none() {
            return Err(CoreError::UserNotFound(owner_id.to_string()));
        }
        Ok(ledger.add_business(Business::new(owner_id, name)))
    }

    /// Returns the businesses owned by `owner_id`.
    pub fn list_for_owner(ledger: &Ledger, owner_id: Uuid) -> Vec<&Business> {
        ledger.businesses_for(owner_id).collect()
    }

    /// Verifies the `(user, business)` pair the access boundary hands to
    /// every business-scoped operation. The core performs no other
    /// authorization.
    pub fn ensure_owned(
        ledger: &Ledger,
        user_id: Uuid,
        business_id: Uuid,
    ) -> Result<(), CoreError> {
        let business = ledger
            .business(business_id)
            .ok_or(CoreError::BusinessNotFound(business_id))?;
        if business.owner_id != user_id {
            return Err(CoreError::NotOwner {
                user: user_id,
                business: business_id,
            });
        }
        Ok(())
    }
}

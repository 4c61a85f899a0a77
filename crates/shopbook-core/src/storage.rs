use std::collections::HashSet;

use shopbook_domain::Ledger;

use crate::CoreError;

/// Abstraction over persistence backends capable of storing ledgers.
///
/// Every core operation is a self-contained read or append against one
/// loaded snapshot; a save replaces the whole snapshot. Readers holding
/// an older snapshot may observe state from before a concurrent writer's
/// save, which is acceptable for reporting.
pub trait LedgerStorage: Send + Sync {
    fn save_ledger(&self, name: &str, ledger: &Ledger) -> Result<(), CoreError>;
    fn load_ledger(&self, name: &str) -> Result<Ledger, CoreError>;
    fn list_ledgers(&self) -> Result<Vec<String>, CoreError>;
    fn delete_ledger(&self, name: &str) -> Result<(), CoreError>;
}

/// Detects dangling references within a ledger snapshot.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let user_ids: HashSet<_> = ledger.users.iter().map(|user| user.id).collect();
    let business_ids: HashSet<_> = ledger.businesses.iter().map(|b| b.id).collect();
    let mut warnings = Vec::new();

    for business in &ledger.businesses {
        if !user_ids.contains(&business.owner_id) {
            warnings.push(format!(
                "business {} references unknown owner {}",
                business.id, business.owner_id
            ));
        }
    }
    for product in &ledger.products {
        if !business_ids.contains(&product.business_id) {
            warnings.push(format!(
                "product {} references unknown business {}",
                product.id, product.business_id
            ));
        }
    }
    for movement in &ledger.movements {
        if !business_ids.contains(&movement.business_id) {
            warnings.push(format!(
                "movement {} references unknown business {}",
                movement.id, movement.business_id
            ));
        }
    }
    warnings
}

//! Helper functions for high-level ledger orchestration.

use shopbook_domain::Ledger;

/// Provides the constructor for [`Ledger`] instances.
pub struct LedgerService;

impl LedgerService {
    /// Creates a new empty ledger with the supplied name.
    pub fn create(name: impl Into<String>) -> Ledger {
        Ledger::new(name)
    }
}

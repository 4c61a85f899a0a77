#![doc(test(attr(deny(warnings))))]

//! Shopbook ties the bookkeeping core, JSON persistence, and configuration
//! together behind a small command-line frontend. The web/identity layer
//! the core was designed for is an external collaborator; the CLI stands
//! in for it here, resolving the acting user and checking business
//! ownership before every scoped call.

pub mod cli;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Shopbook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}

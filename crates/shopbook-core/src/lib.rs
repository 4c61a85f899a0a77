//! shopbook-core
//!
//! Ledger Store, Aggregation Engine and Forecast Engine services.
//! Depends on shopbook-domain. No CLI, no terminal I/O, no direct storage
//! interactions; persistence is injected through [`storage::LedgerStorage`].
//!
//! Authorization lives outside this crate: callers pass an already
//! verified `(user, business)` pair, with [`BusinessService::ensure_owned`]
//! as the check the access boundary runs before business-scoped calls.

pub mod business_service;
pub mod error;
pub mod forecast_service;
pub mod ledger_service;
pub mod movement_service;
pub mod product_service;
pub mod public_api;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod user_service;

pub use business_service::*;
pub use error::CoreError;
pub use forecast_service::*;
pub use ledger_service::*;
pub use movement_service::*;
pub use product_service::*;
pub use public_api::*;
pub use summary_service::*;
pub use time::{Clock, SystemClock};
pub use user_service::*;

#[cfg(test)]
mod tests;

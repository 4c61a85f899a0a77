//! shopbook-domain
//!
//! Pure domain models (User, Business, Product, Movement, Ledger) and the
//! report shapes produced by aggregation. No I/O, no services, no storage.

pub mod business;
pub mod common;
pub mod ledger;
pub mod movement;
pub mod product;
pub mod report;
pub mod user;

pub use business::*;
pub use common::*;
pub use ledger::*;
pub use movement::*;
pub use product::*;
pub use report::*;
pub use user::*;

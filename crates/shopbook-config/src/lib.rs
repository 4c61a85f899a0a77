//! shopbook-config
//!
//! Frontend configuration: where ledgers live on disk and the default
//! reporting knobs. The core crates never read configuration themselves.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores frontend preferences and default reporting knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_ledger_name")]
    pub default_ledger: String,
    #[serde(default = "Config::default_sales_window_days")]
    pub sales_window_days: u32,
    #[serde(default = "Config::default_forecast_horizon_days")]
    pub forecast_horizon_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for ledgers. Defaults to the
    /// platform data dir under `shopbook/ledgers`.
    pub ledger_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ledger: Self::default_ledger_name(),
            sales_window_days: Self::default_sales_window_days(),
            forecast_horizon_days: Self::default_forecast_horizon_days(),
            ledger_root: None,
        }
    }
}

impl Config {
    pub fn default_ledger_name() -> String {
        "books".into()
    }

    /// The dashboard chart covers the trailing 30 days.
    pub fn default_sales_window_days() -> u32 {
        30
    }

    pub fn default_forecast_horizon_days() -> u32 {
        7
    }

    pub fn resolve_ledger_root(&self) -> PathBuf {
        if let Some(path) = &self.ledger_root {
            return path.clone();
        }
        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("shopbook").join("ledgers")
    }
}

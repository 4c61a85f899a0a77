use std::{env, path::PathBuf};

use shopbook_config::{Config, ConfigManager};
use shopbook_core::{
    storage::{ledger_warnings, LedgerStorage},
    CoreError, LedgerService,
};
use shopbook_domain::Ledger;
use shopbook_storage_json::JsonLedgerStorage;

use crate::cli::CliError;

/// Bundles configuration, storage and the loaded ledger for one command.
pub struct CliContext {
    storage: JsonLedgerStorage,
    pub config: Config,
    ledger_name: String,
    pub ledger: Ledger,
}

impl CliContext {
    /// Environment override for the base directory; keeps tests hermetic.
    pub const HOME_ENV: &'static str = "SHOPBOOK_HOME";

    /// Loads config and the default ledger, creating an empty ledger on
    /// first use.
    pub fn open() -> Result<Self, CliError> {
        let base = env::var_os(Self::HOME_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(ConfigManager::default_base_dir);
        let manager = ConfigManager::with_base_dir(base.clone())?;
        let config = manager.load()?;
        let root = config
            .ledger_root
            .clone()
            .unwrap_or_else(|| base.join("ledgers"));
        let storage = JsonLedgerStorage::new(root)?;
        let ledger_name = config.default_ledger.clone();
        let ledger = match storage.load_ledger(&ledger_name) {
            Ok(ledger) => ledger,
            Err(CoreError::LedgerNotFound(_)) => LedgerService::create(ledger_name.as_str()),
            Err(err) => return Err(err.into()),
        };
        for warning in ledger_warnings(&ledger) {
            tracing::warn!(%warning, "ledger integrity");
        }
        Ok(Self {
            storage,
            config,
            ledger_name,
            ledger,
        })
    }

    /// Persists the in-memory ledger back to its file.
    pub fn save(&self) -> Result<(), CliError> {
        self.storage.save_ledger(&self.ledger_name, &self.ledger)?;
        Ok(())
    }

    pub fn storage(&self) -> &JsonLedgerStorage {
        &self.storage
    }
}

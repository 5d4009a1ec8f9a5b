//! Weight Store - atomic hot swap of the active weight table
//!
//! Readers take an `Arc` snapshot and never see a half-updated table.
//! Reload replaces the whole table or leaves the old one in place.

use std::path::Path;
use std::sync::Arc;
use parking_lot::RwLock;

use super::error::WeightError;
use super::inference::HeuristicModel;
use super::storage::{load_weights, save_weights};
use super::weights::WeightTable;

#[derive(Debug)]
pub struct WeightStore {
    current: RwLock<Arc<WeightTable>>,
}

impl WeightStore {
    pub fn new(table: WeightTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Snapshot of the active table
    pub fn current(&self) -> Arc<WeightTable> {
        self.current.read().clone()
    }

    /// Model bound to the active table
    pub fn model(&self) -> HeuristicModel {
        HeuristicModel::new(self.current())
    }

    /// Swap in a new table if it validates
    pub fn replace(&self, table: WeightTable) -> Result<(), WeightError> {
        table.validate()?;
        let version = table.model_version.clone();
        *self.current.write() = Arc::new(table);
        log::info!("Weight table swapped to model version {}", version);
        Ok(())
    }

    /// Load weights from `path` and swap them in. On any failure the
    /// previous table stays active and `false` is returned.
    pub fn reload(&self, path: &Path) -> bool {
        match load_weights(path) {
            Ok(table) => {
                let version = table.model_version.clone();
                *self.current.write() = Arc::new(table);
                log::info!("Loaded weights '{}' from {}", version, path.display());
                true
            }
            Err(e) => {
                log::warn!(
                    "Weight load from {} failed: {}. Keeping model version {}.",
                    path.display(),
                    e,
                    self.current().model_version
                );
                false
            }
        }
    }

    /// Persist the active table
    pub fn save(&self, path: &Path) -> Result<(), WeightError> {
        let table = self.current();
        if let Err(e) = save_weights(&table, path) {
            log::error!("Failed to save weights to {}: {}", path.display(), e);
            return Err(e);
        }
        Ok(())
    }
}

impl Default for WeightStore {
    fn default() -> Self {
        Self::new(WeightTable::default())
    }
}

//! Weight persistence
//!
//! Weights are stored as a JSON blob tagged with the feature layout version
//! and hash, so a blob written for a different layout is rejected on load.

use std::fs;
use std::path::Path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::features::layout::{layout_hash, validate_layout, FEATURE_VERSION};
use super::error::WeightError;
use super::weights::WeightTable;

/// On-disk weight blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightBlob {
    pub feature_version: u8,
    pub layout_hash: u32,
    pub model_version: String,
    pub saved_at: DateTime<Utc>,
    pub weights: Vec<(String, f64)>,
}

impl WeightBlob {
    pub fn from_table(table: &WeightTable) -> Self {
        Self {
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            model_version: table.model_version.clone(),
            saved_at: Utc::now(),
            weights: table.weights.clone(),
        }
    }

    /// Validate layout and contents, then unwrap into a table
    pub fn into_table(self) -> Result<WeightTable, WeightError> {
        validate_layout(self.feature_version, self.layout_hash)?;

        let table = WeightTable::new(self.model_version, self.weights);
        table.validate()?;
        Ok(table)
    }
}

/// Save weights to disk
pub fn save_weights(table: &WeightTable, path: &Path) -> Result<(), WeightError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_vec_pretty(&WeightBlob::from_table(table))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load weights from disk with validation
pub fn load_weights(path: &Path) -> Result<WeightTable, WeightError> {
    let data = fs::read(path)?;
    let blob: WeightBlob = serde_json::from_slice(&data)?;
    blob.into_table()
}

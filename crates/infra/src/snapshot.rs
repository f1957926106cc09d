//! JSON snapshots of demand history (fixtures, exports, the report host).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use stockcast_forecasting::{PredictionRecord, SeasonalPattern, StoreError};

use crate::store::InMemoryDemandStore;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Serialized contents of a demand store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[serde(default)]
    pub predictions: Vec<PredictionRecord>,
    #[serde(default)]
    pub seasonal_patterns: Vec<SeasonalPattern>,
}

impl StoreSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Load every record into `store`.
    ///
    /// A later pattern for the same (product, month) replaces an earlier one.
    pub fn load_into(self, store: &InMemoryDemandStore) -> Result<(), SnapshotError> {
        let predictions = self.predictions.len();
        let patterns = self.seasonal_patterns.len();

        for record in self.predictions {
            store.record_prediction(record)?;
        }
        for pattern in self.seasonal_patterns {
            let product = pattern.product_id();
            let month = pattern.month();
            if store.upsert_seasonal_pattern(pattern)?.is_some() {
                warn!(product = %product, month, "snapshot repeats a seasonal pattern; keeping the later one");
            }
        }

        info!(predictions, patterns, "snapshot loaded");
        Ok(())
    }

    pub fn into_store(self) -> Result<InMemoryDemandStore, SnapshotError> {
        let store = InMemoryDemandStore::new();
        self.load_into(&store)?;
        Ok(store)
    }
}

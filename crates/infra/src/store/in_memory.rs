use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use tracing::debug;

use stockcast_core::ProductId;
use stockcast_forecasting::{DemandHistoryReader, PredictionRecord, SeasonalPattern, StoreError};

/// In-memory demand history for tests/dev and single-process hosts.
///
/// - Predictions are kept per product ordered by `generated_at`; records with
///   equal timestamps keep their write order.
/// - Seasonal patterns are keyed by (product, month), so a second write for a
///   month replaces the first.
#[derive(Debug, Default)]
pub struct InMemoryDemandStore {
    predictions: RwLock<HashMap<ProductId, Vec<PredictionRecord>>>,
    patterns: RwLock<HashMap<ProductId, BTreeMap<u32, SeasonalPattern>>>,
}

impl InMemoryDemandStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prediction record (the estimator's write path).
    pub fn record_prediction(&self, record: PredictionRecord) -> Result<(), StoreError> {
        let mut map = self.predictions.write().map_err(|_| poisoned("predictions"))?;
        let list = map.entry(record.product_id()).or_default();
        let at = list.partition_point(|r| r.generated_at() <= record.generated_at());
        debug!(product = %record.product_id(), position = at, "prediction recorded");
        list.insert(at, record);
        Ok(())
    }

    /// Insert or replace the pattern for the pattern's (product, month).
    ///
    /// Returns the pattern that was replaced, if any.
    pub fn upsert_seasonal_pattern(
        &self,
        pattern: SeasonalPattern,
    ) -> Result<Option<SeasonalPattern>, StoreError> {
        let mut map = self.patterns.write().map_err(|_| poisoned("seasonal patterns"))?;
        let previous = map
            .entry(pattern.product_id())
            .or_default()
            .insert(pattern.month(), pattern);
        Ok(previous)
    }

    pub fn remove_seasonal_pattern(
        &self,
        product_id: ProductId,
        month: u32,
    ) -> Result<Option<SeasonalPattern>, StoreError> {
        let mut map = self.patterns.write().map_err(|_| poisoned("seasonal patterns"))?;
        Ok(map.get_mut(&product_id).and_then(|by_month| by_month.remove(&month)))
    }

    /// Drop all history for a product.
    pub fn clear_product(&self, product_id: ProductId) -> Result<(), StoreError> {
        self.predictions
            .write()
            .map_err(|_| poisoned("predictions"))?
            .remove(&product_id);
        self.patterns
            .write()
            .map_err(|_| poisoned("seasonal patterns"))?
            .remove(&product_id);
        Ok(())
    }
}

impl DemandHistoryReader for InMemoryDemandStore {
    fn list_predictions(&self, product_id: ProductId) -> Result<Vec<PredictionRecord>, StoreError> {
        let map = self.predictions.read().map_err(|_| poisoned("predictions"))?;
        Ok(map.get(&product_id).cloned().unwrap_or_default())
    }

    fn list_seasonal_patterns(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<SeasonalPattern>, StoreError> {
        let map = self.patterns.read().map_err(|_| poisoned("seasonal patterns"))?;
        Ok(map
            .get(&product_id)
            .map(|by_month| by_month.values().cloned().collect())
            .unwrap_or_default())
    }
}

fn poisoned(what: &str) -> StoreError {
    StoreError::Unavailable(format!("{what} lock poisoned"))
}

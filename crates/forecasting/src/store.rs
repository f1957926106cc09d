use std::sync::Arc;

use thiserror::Error;

use stockcast_core::ProductId;

use crate::model::{PredictionRecord, SeasonalPattern};

/// Failure reported by the backing store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("stored data is corrupt: {0}")]
    Corrupt(String),
}

/// Read side of the persistence layer consumed by the engine.
///
/// Implementations must provide read-after-write consistency: a call observes
/// every write that completed before it began. The engine adds no ordering of its own.
pub trait DemandHistoryReader: Send + Sync {
    /// All prediction records for a product, in any order.
    fn list_predictions(&self, product_id: ProductId) -> Result<Vec<PredictionRecord>, StoreError>;

    /// Seasonal patterns for a product (at most one per month).
    fn list_seasonal_patterns(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<SeasonalPattern>, StoreError>;
}

impl<R> DemandHistoryReader for Arc<R>
where
    R: DemandHistoryReader + ?Sized,
{
    fn list_predictions(&self, product_id: ProductId) -> Result<Vec<PredictionRecord>, StoreError> {
        (**self).list_predictions(product_id)
    }

    fn list_seasonal_patterns(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<SeasonalPattern>, StoreError> {
        (**self).list_seasonal_patterns(product_id)
    }
}

use thiserror::Error;

use stockcast_core::ProductId;

use crate::store::StoreError;

/// Errors surfaced by the planning operations.
///
/// These are deterministic outcomes of the current store contents; retrying
/// without a write in between yields the same error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlanningError {
    /// No prediction records exist for the product.
    #[error("no historical demand data for product {product_id}")]
    NoHistoricalData { product_id: ProductId },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PlanningError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

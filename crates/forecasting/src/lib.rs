//! `stockcast-forecasting`
//!
//! **Responsibility:** demand projection and replenishment parameters.
//!
//! This crate is intentionally **read-only** with respect to stored data:
//! - It reads prediction records and seasonal patterns through [`DemandHistoryReader`].
//! - It never writes back; every result is recomputed per call and never cached.
//! - Storage lives elsewhere (see `stockcast-infra`).

pub mod error;
pub mod forecast;
pub mod model;
pub mod policy;
pub mod replenishment;
pub mod stats;
pub mod store;
pub mod trends;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::PlanningError;
pub use forecast::{ConfidenceInterval, ForecastEngine, ForecastPoint};
pub use model::{AccuracyTag, ForecastMethod, PredictionRecord, PredictionRecordData, SeasonalPattern};
pub use policy::ReplenishmentPolicy;
pub use replenishment::{ReplenishmentOptimizer, ReplenishmentParameters};
pub use store::{DemandHistoryReader, StoreError};
pub use trends::{SeasonalTrend, SeasonalTrendReporter};

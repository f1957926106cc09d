//! Test fixtures: a plain in-memory reader and record builders.

use chrono::{DateTime, TimeZone, Utc};

use stockcast_core::ProductId;

use crate::model::{AccuracyTag, ForecastMethod, PredictionRecord, SeasonalPattern};
use crate::store::{DemandHistoryReader, StoreError};

#[derive(Debug, Default, Clone)]
pub struct FixtureStore {
    pub predictions: Vec<PredictionRecord>,
    pub patterns: Vec<SeasonalPattern>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prediction(mut self, record: PredictionRecord) -> Self {
        self.predictions.push(record);
        self
    }

    pub fn with_pattern(mut self, pattern: SeasonalPattern) -> Self {
        self.patterns.push(pattern);
        self
    }
}

impl DemandHistoryReader for FixtureStore {
    fn list_predictions(&self, product_id: ProductId) -> Result<Vec<PredictionRecord>, StoreError> {
        Ok(self
            .predictions
            .iter()
            .filter(|r| r.product_id() == product_id)
            .cloned()
            .collect())
    }

    fn list_seasonal_patterns(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<SeasonalPattern>, StoreError> {
        Ok(self
            .patterns
            .iter()
            .filter(|p| p.product_id() == product_id)
            .cloned()
            .collect())
    }
}

/// Reader whose every call fails.
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl DemandHistoryReader for UnavailableStore {
    fn list_predictions(&self, _product_id: ProductId) -> Result<Vec<PredictionRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn list_seasonal_patterns(
        &self,
        _product_id: ProductId,
    ) -> Result<Vec<SeasonalPattern>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

pub fn record(
    product_id: ProductId,
    generated_at: DateTime<Utc>,
    demand: f64,
    confidence: f64,
) -> PredictionRecord {
    PredictionRecord::new(
        product_id,
        generated_at,
        ForecastMethod::MovingAverage,
        demand,
        confidence,
        AccuracyTag::Medium,
    )
    .unwrap()
}

pub fn pattern(product_id: ProductId, month: u8, factor: f64) -> SeasonalPattern {
    SeasonalPattern::new(product_id, month, factor).unwrap()
}

use chrono::{DateTime, Month, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::{DomainError, DomainResult, ProductId, UserId};

/// How the external estimator arrived at `predicted_demand`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    MovingAverage,
    LinearRegression,
    SeasonalAdjustment,
    WeightedAverage,
    Manual,
}

/// Qualitative accuracy tag attached by the estimator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyTag {
    High,
    Medium,
    Low,
}

/// Persisted shape of a [`PredictionRecord`].
///
/// Stores hand rows back in this form; [`PredictionRecord::restore`] turns them
/// into records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecordData {
    pub product_id: ProductId,
    pub generated_at: DateTime<Utc>,
    pub method: ForecastMethod,
    pub predicted_demand: f64,
    pub confidence_level: f64,
    pub accuracy: AccuracyTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_stockout_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_reorder_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
}

/// A timestamped demand estimate for one product.
///
/// Owned by the persistence layer; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PredictionRecordData", into = "PredictionRecordData")]
pub struct PredictionRecord {
    data: PredictionRecordData,
}

impl PredictionRecord {
    /// Build a new record, enforcing `predicted_demand >= 0` and
    /// `confidence_level` in \[0, 100\].
    pub fn new(
        product_id: ProductId,
        generated_at: DateTime<Utc>,
        method: ForecastMethod,
        predicted_demand: f64,
        confidence_level: f64,
        accuracy: AccuracyTag,
    ) -> DomainResult<Self> {
        check_quantity("predicted_demand", predicted_demand)?;
        if !(confidence_level.is_finite() && (0.0..=100.0).contains(&confidence_level)) {
            return Err(DomainError::validation(format!(
                "confidence_level must be within [0, 100], got {confidence_level}"
            )));
        }

        Ok(Self {
            data: PredictionRecordData {
                product_id,
                generated_at,
                method,
                predicted_demand,
                confidence_level,
                accuracy,
                predicted_stockout_date: None,
                recommended_reorder_date: None,
                recommended_quantity: None,
                notes: None,
                created_by: None,
            },
        })
    }

    /// Rehydrate a stored row.
    ///
    /// Quantities are checked as in [`PredictionRecord::new`]. The confidence
    /// level is kept as stored: historical rows may predate the range check, and
    /// readers clamp it.
    pub fn restore(data: PredictionRecordData) -> DomainResult<Self> {
        check_quantity("predicted_demand", data.predicted_demand)?;
        if let Some(quantity) = data.recommended_quantity {
            check_quantity("recommended_quantity", quantity)?;
        }
        Ok(Self { data })
    }

    pub fn with_stockout_date(mut self, date: NaiveDate) -> Self {
        self.data.predicted_stockout_date = Some(date);
        self
    }

    pub fn with_reorder_date(mut self, date: NaiveDate) -> Self {
        self.data.recommended_reorder_date = Some(date);
        self
    }

    pub fn with_recommended_quantity(mut self, quantity: f64) -> DomainResult<Self> {
        check_quantity("recommended_quantity", quantity)?;
        self.data.recommended_quantity = Some(quantity);
        Ok(self)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.data.notes = Some(notes.into());
        self
    }

    pub fn with_created_by(mut self, user: UserId) -> Self {
        self.data.created_by = Some(user);
        self
    }

    pub fn product_id(&self) -> ProductId {
        self.data.product_id
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.data.generated_at
    }

    pub fn method(&self) -> ForecastMethod {
        self.data.method
    }

    pub fn predicted_demand(&self) -> f64 {
        self.data.predicted_demand
    }

    /// Confidence as stored, on a 0..=100 scale.
    pub fn confidence_level(&self) -> f64 {
        self.data.confidence_level
    }

    pub fn accuracy(&self) -> AccuracyTag {
        self.data.accuracy
    }

    pub fn predicted_stockout_date(&self) -> Option<NaiveDate> {
        self.data.predicted_stockout_date
    }

    pub fn recommended_reorder_date(&self) -> Option<NaiveDate> {
        self.data.recommended_reorder_date
    }

    pub fn recommended_quantity(&self) -> Option<f64> {
        self.data.recommended_quantity
    }

    pub fn notes(&self) -> Option<&str> {
        self.data.notes.as_deref()
    }

    pub fn created_by(&self) -> Option<UserId> {
        self.data.created_by
    }

    pub fn as_data(&self) -> &PredictionRecordData {
        &self.data
    }
}

impl TryFrom<PredictionRecordData> for PredictionRecord {
    type Error = DomainError;

    fn try_from(data: PredictionRecordData) -> Result<Self, Self::Error> {
        Self::restore(data)
    }
}

fn check_quantity(name: &str, value: f64) -> DomainResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "{name} must be a finite non-negative number, got {value}"
        )))
    }
}

impl From<PredictionRecord> for PredictionRecordData {
    fn from(record: PredictionRecord) -> Self {
        record.data
    }
}

/// Wire shape of a [`SeasonalPattern`]; validated on conversion.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalPatternData {
    product_id: ProductId,
    month: u8,
    adjustment_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

/// Monthly demand multiplier for a product (100 = neutral).
///
/// Stores keep at most one pattern per (product, month); writers update in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeasonalPatternData", into = "SeasonalPatternData")]
pub struct SeasonalPattern {
    product_id: ProductId,
    month: Month,
    adjustment_factor: f64,
    notes: Option<String>,
}

impl SeasonalPattern {
    /// `month` is 1-based (1 = January).
    pub fn new(product_id: ProductId, month: u8, adjustment_factor: f64) -> DomainResult<Self> {
        let month = Month::try_from(month).map_err(|_| {
            DomainError::validation(format!("month must be within [1, 12], got {month}"))
        })?;
        if !(adjustment_factor.is_finite() && adjustment_factor >= 0.0) {
            return Err(DomainError::validation(format!(
                "adjustment_factor must be a finite non-negative number, got {adjustment_factor}"
            )));
        }

        Ok(Self {
            product_id,
            month,
            adjustment_factor,
            notes: None,
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Calendar month number, 1..=12.
    pub fn month(&self) -> u32 {
        self.month.number_from_month()
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Raw factor as stored (100 = neutral).
    pub fn adjustment_factor(&self) -> f64 {
        self.adjustment_factor
    }

    /// Multiplier form of the adjustment factor (1.0 = neutral).
    pub fn factor(&self) -> f64 {
        self.adjustment_factor / 100.0
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl TryFrom<SeasonalPatternData> for SeasonalPattern {
    type Error = DomainError;

    fn try_from(data: SeasonalPatternData) -> Result<Self, Self::Error> {
        let pattern = Self::new(data.product_id, data.month, data.adjustment_factor)?;
        Ok(match data.notes {
            Some(notes) => pattern.with_notes(notes),
            None => pattern,
        })
    }
}

impl From<SeasonalPattern> for SeasonalPatternData {
    fn from(pattern: SeasonalPattern) -> Self {
        Self {
            product_id: pattern.product_id,
            month: pattern.month() as u8,
            adjustment_factor: pattern.adjustment_factor,
            notes: pattern.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn rejects_negative_demand() {
        let err = PredictionRecord::new(
            ProductId::new(),
            at(2024, 1, 15),
            ForecastMethod::Manual,
            -1.0,
            80.0,
            AccuracyTag::Medium,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_confidence_outside_percentage_range() {
        for level in [-0.5, 100.5, f64::NAN] {
            let res = PredictionRecord::new(
                ProductId::new(),
                at(2024, 1, 15),
                ForecastMethod::MovingAverage,
                10.0,
                level,
                AccuracyTag::Low,
            );
            assert!(res.is_err(), "confidence {level} should be rejected");
        }
    }

    #[test]
    fn restore_keeps_out_of_range_values() {
        let record = PredictionRecord::new(
            ProductId::new(),
            at(2024, 1, 15),
            ForecastMethod::WeightedAverage,
            10.0,
            50.0,
            AccuracyTag::High,
        )
        .unwrap();
        let mut data = record.as_data().clone();
        data.confidence_level = 140.0;

        let restored = PredictionRecord::restore(data.clone()).unwrap();
        assert_eq!(restored.confidence_level(), 140.0);

        data.predicted_demand = -100.0;
        assert!(PredictionRecord::restore(data).is_err());
    }

    #[test]
    fn record_json_uses_camel_case_and_skips_empty_optionals() {
        let product_id = ProductId::new();
        let record = PredictionRecord::new(
            product_id,
            at(2024, 1, 15),
            ForecastMethod::LinearRegression,
            42.0,
            75.0,
            AccuracyTag::Medium,
        )
        .unwrap()
        .with_notes("q1 estimate");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["method"], "linear_regression");
        assert_eq!(json["predictedDemand"], 42.0);
        assert_eq!(json["notes"], "q1 estimate");
        assert!(json.get("recommendedQuantity").is_none());

        let back: PredictionRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn recommended_quantity_must_be_non_negative() {
        let record = PredictionRecord::new(
            ProductId::new(),
            at(2024, 1, 15),
            ForecastMethod::Manual,
            5.0,
            90.0,
            AccuracyTag::High,
        )
        .unwrap();
        assert!(record.clone().with_recommended_quantity(-3.0).is_err());
        assert_eq!(
            record.with_recommended_quantity(12.0).unwrap().recommended_quantity(),
            Some(12.0)
        );
    }

    #[test]
    fn seasonal_pattern_validates_month() {
        assert!(SeasonalPattern::new(ProductId::new(), 0, 100.0).is_err());
        assert!(SeasonalPattern::new(ProductId::new(), 13, 100.0).is_err());

        let december = SeasonalPattern::new(ProductId::new(), 12, 130.0).unwrap();
        assert_eq!(december.month(), 12);
        assert_eq!(december.month_name(), "December");
        assert!((december.factor() - 1.3).abs() < 1e-12);
    }

    #[test]
    fn seasonal_pattern_deserialization_is_validated() {
        let json = serde_json::json!({
            "productId": ProductId::new(),
            "month": 14,
            "adjustmentFactor": 100.0,
        });
        assert!(serde_json::from_value::<SeasonalPattern>(json).is_err());
    }
}

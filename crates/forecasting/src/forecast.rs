use chrono::{Datelike, Months};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use stockcast_core::{ProductId, ValueObject};

use crate::error::PlanningError;
use crate::model::{PredictionRecord, SeasonalPattern};
use crate::stats::{ceil_whole, floor_whole};
use crate::store::DemandHistoryReader;

/// Whole-unit band around a projected demand.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// `floor(demand * (1 - margin))` to `ceil(demand * (1 + margin))`.
    pub fn around(demand: f64, margin: f64) -> Self {
        Self {
            lower: floor_whole(demand * (1.0 - margin)),
            upper: ceil_whole(demand * (1.0 + margin)),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl ValueObject for ConfidenceInterval {}

/// Projected demand for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// `YYYY-MM`.
    pub month_label: String,
    pub predicted_demand: f64,
    pub confidence_interval: ConfidenceInterval,
}

impl ValueObject for ForecastPoint {}

/// Projects the latest prediction record forward, month by month, modulated by
/// the product's seasonal patterns.
#[derive(Debug, Clone)]
pub struct ForecastEngine<R> {
    reader: R,
}

impl<R> ForecastEngine<R>
where
    R: DemandHistoryReader,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// The governing record: greatest `generated_at`; on a tie the one listed
    /// later by the store wins.
    pub fn baseline(&self, product_id: ProductId) -> Result<Option<PredictionRecord>, PlanningError> {
        let records = self.reader.list_predictions(product_id)?;
        Ok(latest(records))
    }

    /// Forecast the `months_ahead` calendar months following the baseline record.
    ///
    /// Returns an empty list when the product has no prediction records.
    pub fn forecast(
        &self,
        product_id: ProductId,
        months_ahead: u32,
    ) -> Result<Vec<ForecastPoint>, PlanningError> {
        if months_ahead < 1 {
            return Err(PlanningError::invalid_argument(format!(
                "months_ahead must be >= 1, got {months_ahead}"
            )));
        }

        let Some(baseline) = self.baseline(product_id)? else {
            debug!(product = %product_id, "no prediction records; empty forecast");
            return Ok(Vec::new());
        };

        let patterns = self.reader.list_seasonal_patterns(product_id)?;
        let factors = MonthlyFactors::from_patterns(product_id, &patterns);

        let confidence = effective_confidence(product_id, &baseline);
        let margin = (1.0 - confidence) / 2.0;
        let base_demand = baseline.predicted_demand();
        let origin = baseline.generated_at();

        // The last month bounds every earlier one, so checking it up front keeps
        // each step below in range.
        if origin.checked_add_months(Months::new(months_ahead)).is_none() {
            return Err(PlanningError::invalid_argument(format!(
                "forecast horizon of {months_ahead} months from {origin} is out of range"
            )));
        }

        let mut points = Vec::new();
        for i in 1..=months_ahead {
            let Some(forecast_date) = origin.checked_add_months(Months::new(i)) else {
                break;
            };

            let adjusted = base_demand * factors.get(forecast_date.month());
            points.push(ForecastPoint {
                month_label: forecast_date.format("%Y-%m").to_string(),
                predicted_demand: adjusted,
                confidence_interval: ConfidenceInterval::around(adjusted, margin),
            });
        }

        debug!(
            product = %product_id,
            months_ahead,
            base_demand,
            confidence,
            "forecast computed"
        );

        Ok(points)
    }
}

fn latest(records: Vec<PredictionRecord>) -> Option<PredictionRecord> {
    records.into_iter().reduce(|best, r| {
        if r.generated_at() >= best.generated_at() {
            r
        } else {
            best
        }
    })
}

/// Baseline confidence as a fraction in \[0, 1\].
///
/// Stored levels outside \[0, 100\] are clamped; a non-finite level is read as 0
/// (widest band).
fn effective_confidence(product_id: ProductId, record: &PredictionRecord) -> f64 {
    let level = record.confidence_level();
    if !level.is_finite() {
        warn!(product = %product_id, level, "non-finite confidence level; using 0");
        return 0.0;
    }
    if !(0.0..=100.0).contains(&level) {
        warn!(product = %product_id, level, "confidence level out of range; clamping");
    }
    (level / 100.0).clamp(0.0, 1.0)
}

/// Seasonal multipliers indexed by calendar month; absent months are neutral.
struct MonthlyFactors([Option<f64>; 12]);

impl MonthlyFactors {
    /// First pattern for a month wins; later duplicates are ignored.
    fn from_patterns(product_id: ProductId, patterns: &[SeasonalPattern]) -> Self {
        let mut factors = [None; 12];
        for p in patterns {
            let slot = &mut factors[(p.month() - 1) as usize];
            if slot.is_some() {
                warn!(
                    product = %product_id,
                    month = p.month(),
                    "duplicate seasonal pattern ignored"
                );
                continue;
            }
            *slot = Some(p.factor());
        }
        Self(factors)
    }

    fn get(&self, month: u32) -> f64 {
        self.0
            .get(month.wrapping_sub(1) as usize)
            .copied()
            .flatten()
            .unwrap_or(1.0)
    }
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use stockcast_core::{ProductId, ValueObject};

use crate::error::PlanningError;
use crate::store::DemandHistoryReader;

/// One row of the seasonal trend report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalTrend {
    pub month_name: String,
    /// NOTE: carries the raw adjustment factor (e.g. 150.0), not a demand
    /// quantity. Downstream dashboards already read this number, so the value
    /// stays as-is until its consumers agree on a rename.
    pub average_demand: f64,
    /// Adjustment factor as a multiplier (1.0 = neutral).
    pub peak_factor: f64,
}

impl ValueObject for SeasonalTrend {}

/// Renders stored seasonal patterns as a month-ordered list.
#[derive(Debug, Clone)]
pub struct SeasonalTrendReporter<R> {
    reader: R,
}

impl<R> SeasonalTrendReporter<R>
where
    R: DemandHistoryReader,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn trends(&self, product_id: ProductId) -> Result<Vec<SeasonalTrend>, PlanningError> {
        let mut patterns = self.reader.list_seasonal_patterns(product_id)?;
        patterns.sort_by_key(|p| p.month());

        let trends: Vec<SeasonalTrend> = patterns
            .iter()
            .map(|p| SeasonalTrend {
                month_name: p.month_name().to_string(),
                average_demand: p.adjustment_factor(),
                peak_factor: p.factor(),
            })
            .collect();

        debug!(product = %product_id, months = trends.len(), "seasonal trends rendered");
        Ok(trends)
    }
}

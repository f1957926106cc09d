//! Demonstration host: runs every planning operation for one product and
//! bundles the results into a single serializable report.

use serde::Serialize;

use stockcast_core::ProductId;
use stockcast_forecasting::{
    DemandHistoryReader, ForecastEngine, ForecastPoint, PlanningError, ReplenishmentOptimizer,
    ReplenishmentParameters, SeasonalTrend, SeasonalTrendReporter,
};
use stockcast_infra::EngineConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningReport {
    pub product_id: ProductId,
    pub forecast: Vec<ForecastPoint>,
    pub trends: Vec<SeasonalTrend>,
    /// `None` when the product has no prediction history yet.
    pub replenishment: Option<ReplenishmentParameters>,
}

/// Build the report for `product_id` against `reader`.
///
/// Missing history is reported as an absent replenishment section rather than
/// an error, mirroring a "not enough data" response.
pub fn build_report<R>(
    reader: R,
    config: &EngineConfig,
    product_id: ProductId,
    months_ahead: Option<u32>,
) -> anyhow::Result<PlanningReport>
where
    R: DemandHistoryReader + Clone,
{
    let months_ahead = months_ahead.unwrap_or(config.default_months_ahead);

    let forecast = ForecastEngine::new(reader.clone()).forecast(product_id, months_ahead)?;
    let trends = SeasonalTrendReporter::new(reader.clone()).trends(product_id)?;

    let optimizer = ReplenishmentOptimizer::with_policy(reader, config.policy.clone())?;
    let replenishment = match optimizer.optimize(product_id) {
        Ok(params) => Some(params),
        Err(PlanningError::NoHistoricalData { .. }) => {
            tracing::warn!(product = %product_id, "not enough data for replenishment parameters");
            None
        }
        Err(e) => return Err(e.into()),
    };

    Ok(PlanningReport {
        product_id,
        forecast,
        trends,
        replenishment,
    })
}

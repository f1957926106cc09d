use serde::{Deserialize, Serialize};
use tracing::debug;

use stockcast_core::{DomainResult, ProductId, ValueObject};

use crate::error::PlanningError;
use crate::policy::ReplenishmentPolicy;
use crate::stats::{mean, stddev_population};
use crate::store::DemandHistoryReader;

/// Stocking parameters derived from a product's prediction history.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentParameters {
    pub optimal_stock_level: f64,
    pub reorder_point: f64,
    pub safety_stock: f64,
    pub lead_time_demand: f64,
    /// Echo of the policy's service level.
    pub service_level: f64,
}

impl ReplenishmentParameters {
    /// Stock at or below the reorder point should trigger an order.
    pub fn needs_reorder(&self, on_hand: f64) -> bool {
        on_hand <= self.reorder_point
    }

    /// Quantity that brings `on_hand` up to the optimal level (never negative).
    pub fn suggested_order_quantity(&self, on_hand: f64) -> f64 {
        (self.optimal_stock_level - on_hand).max(0.0)
    }
}

impl ValueObject for ReplenishmentParameters {}

/// Derives safety stock, reorder point and optimal stock level from the full
/// prediction history of a product.
///
/// Model:
/// - Every prediction record is one period's demand aggregate.
/// - `stddev` is the population standard deviation of those aggregates.
/// - `safety_stock = z * stddev * sqrt(lead_time_days / days_per_period)`.
/// - `lead_time_demand = mean * lead_time_days / days_per_period`.
/// - `reorder_point = lead_time_demand + safety_stock`.
/// - `optimal_stock_level = reorder_point + mean * order_periods`.
#[derive(Debug, Clone)]
pub struct ReplenishmentOptimizer<R> {
    reader: R,
    policy: ReplenishmentPolicy,
}

impl<R> ReplenishmentOptimizer<R>
where
    R: DemandHistoryReader,
{
    /// Optimizer with the default policy (14 day lead time, 95% service level).
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            policy: ReplenishmentPolicy::default(),
        }
    }

    pub fn with_policy(reader: R, policy: ReplenishmentPolicy) -> DomainResult<Self> {
        policy.validate()?;
        Ok(Self { reader, policy })
    }

    pub fn policy(&self) -> &ReplenishmentPolicy {
        &self.policy
    }

    pub fn optimize(&self, product_id: ProductId) -> Result<ReplenishmentParameters, PlanningError> {
        let records = self.reader.list_predictions(product_id)?;
        if records.is_empty() {
            return Err(PlanningError::NoHistoricalData { product_id });
        }

        let demands: Vec<f64> = records.iter().map(|r| r.predicted_demand()).collect();
        let avg_demand = mean(&demands);
        let std_dev = stddev_population(&demands, avg_demand);

        // Per-period stddev scaled by sqrt(lead-time periods).
        let lead_time_periods = self.policy.lead_time_periods();
        let safety_stock = self.policy.service_factor * std_dev * lead_time_periods.sqrt();
        let lead_time_demand = avg_demand * lead_time_periods;
        let reorder_point = lead_time_demand + safety_stock;
        let optimal_stock_level = reorder_point + avg_demand * f64::from(self.policy.order_periods);

        debug!(
            product = %product_id,
            samples = demands.len(),
            avg_demand,
            std_dev,
            reorder_point,
            "replenishment parameters computed"
        );

        Ok(ReplenishmentParameters {
            optimal_stock_level,
            reorder_point,
            safety_stock,
            lead_time_demand,
            service_level: self.policy.service_level,
        })
    }
}

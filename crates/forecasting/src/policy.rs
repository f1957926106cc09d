use serde::{Deserialize, Serialize};

use stockcast_core::{DomainError, DomainResult};

/// Inventory policy used to derive replenishment parameters.
///
/// Demand records are treated as per-period aggregates; `days_per_period`
/// converts the lead time into that period unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentPolicy {
    /// Days between placing and receiving an order.
    pub lead_time_days: u32,
    /// Target probability of not stocking out during the lead time.
    pub service_level: f64,
    /// z-score matching `service_level`.
    pub service_factor: f64,
    pub days_per_period: u32,
    /// Periods of average demand added on top of the reorder point.
    pub order_periods: u32,
}

impl Default for ReplenishmentPolicy {
    fn default() -> Self {
        Self {
            lead_time_days: 14,
            service_level: 0.95,
            service_factor: 1.645,
            days_per_period: 30,
            order_periods: 2,
        }
    }
}

impl ReplenishmentPolicy {
    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = days;
        self
    }

    /// Set the service level together with its z-score.
    pub fn with_service_level(mut self, service_level: f64, service_factor: f64) -> Self {
        self.service_level = service_level;
        self.service_factor = service_factor;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.lead_time_days == 0 {
            return Err(DomainError::validation("lead_time_days must be positive"));
        }
        if self.days_per_period == 0 {
            return Err(DomainError::validation("days_per_period must be positive"));
        }
        if self.order_periods == 0 {
            return Err(DomainError::validation("order_periods must be positive"));
        }
        if !(self.service_level.is_finite() && self.service_level > 0.0 && self.service_level < 1.0)
        {
            return Err(DomainError::validation(format!(
                "service_level must be within (0, 1), got {}",
                self.service_level
            )));
        }
        if !(self.service_factor.is_finite() && self.service_factor > 0.0) {
            return Err(DomainError::validation(format!(
                "service_factor must be a finite positive number, got {}",
                self.service_factor
            )));
        }
        Ok(())
    }

    /// Lead time expressed in demand periods (14/30 under the default policy).
    pub fn lead_time_periods(&self) -> f64 {
        f64::from(self.lead_time_days) / f64::from(self.days_per_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        let policy = ReplenishmentPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.lead_time_periods(), 14.0 / 30.0);
    }

    #[test]
    fn rejects_degenerate_service_level() {
        let policy = ReplenishmentPolicy::default().with_service_level(1.0, 3.0);
        assert!(policy.validate().is_err());

        let policy = ReplenishmentPolicy::default().with_service_level(0.9, 0.0);
        assert!(policy.validate().is_err());
    }

    #[test]
    fn rejects_zero_lead_time() {
        let policy = ReplenishmentPolicy::default().with_lead_time_days(0);
        assert!(policy.validate().is_err());
    }
}

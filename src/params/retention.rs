//! Retention: churn and client lifetime economics

use serde::{Deserialize, Serialize};

use crate::numeric::ratio_or_zero;

/// How long clients stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Retention {
    /// Share of clients lost each month (%)
    pub monthly_churn_rate: f64,
    pub avg_lifespan_months: f64,
}

impl Default for Retention {
    fn default() -> Self {
        Self {
            monthly_churn_rate: 8.0,
            avg_lifespan_months: 6.0,
        }
    }
}

impl Retention {
    /// Churn as a fraction (8% -> 0.08)
    pub fn churn_fraction(&self) -> f64 {
        self.monthly_churn_rate / 100.0
    }

    /// Lifetime value and its ratio to acquisition cost
    pub fn metrics(&self, avg_revenue_per_client: f64, cost_per_acquisition: f64) -> RetentionMetrics {
        let lifetime_value = avg_revenue_per_client * self.avg_lifespan_months;
        let ltv_to_cac_ratio = ratio_or_zero(lifetime_value, cost_per_acquisition);

        RetentionMetrics {
            lifetime_value,
            ltv_to_cac_ratio,
            ad_efficiency: AdEfficiency::from_ratio(ltv_to_cac_ratio),
        }
    }
}

/// Verdict on the LTV:CAC ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdEfficiency {
    /// Each ad dollar returns at least three
    Healthy,
    /// Returns between 1x and 3x
    BreakingEven,
    /// Returns less than the ad dollar
    LosingMoney,
    /// No acquisition cost to compare against
    Unknown,
}

impl AdEfficiency {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 3.0 {
            AdEfficiency::Healthy
        } else if ratio >= 1.0 {
            AdEfficiency::BreakingEven
        } else if ratio > 0.0 {
            AdEfficiency::LosingMoney
        } else {
            AdEfficiency::Unknown
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            AdEfficiency::Healthy => "Healthy",
            AdEfficiency::BreakingEven => "Breaking even. Improve retention.",
            AdEfficiency::LosingMoney => "Losing money on ads. Fix before scaling.",
            AdEfficiency::Unknown => "No acquisition cost yet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionMetrics {
    pub lifetime_value: f64,
    /// 0 when there is no acquisition cost
    pub ltv_to_cac_ratio: f64,
    pub ad_efficiency: AdEfficiency,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lifetime_value() {
        let retention = Retention::default();
        let metrics = retention.metrics(150.0, 250.0);

        assert_relative_eq!(metrics.lifetime_value, 900.0);
        assert_relative_eq!(metrics.ltv_to_cac_ratio, 3.6);
        assert_eq!(metrics.ad_efficiency, AdEfficiency::Healthy);
    }

    #[test]
    fn test_zero_cac_ratio_is_zero() {
        let metrics = Retention::default().metrics(150.0, 0.0);

        assert_relative_eq!(metrics.lifetime_value, 900.0);
        assert_eq!(metrics.ltv_to_cac_ratio, 0.0);
        assert_eq!(metrics.ad_efficiency, AdEfficiency::Unknown);
    }

    #[test]
    fn test_efficiency_bands() {
        assert_eq!(AdEfficiency::from_ratio(3.0), AdEfficiency::Healthy);
        assert_eq!(AdEfficiency::from_ratio(2.99), AdEfficiency::BreakingEven);
        assert_eq!(AdEfficiency::from_ratio(1.0), AdEfficiency::BreakingEven);
        assert_eq!(AdEfficiency::from_ratio(0.4), AdEfficiency::LosingMoney);
        assert_eq!(AdEfficiency::from_ratio(0.0), AdEfficiency::Unknown);
    }

    #[test]
    fn test_churn_fraction() {
        let retention = Retention {
            monthly_churn_rate: 6.0,
            avg_lifespan_months: 8.0,
        };
        assert_relative_eq!(retention.churn_fraction(), 0.06);
    }
}

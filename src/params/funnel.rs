//! Acquisition funnel: ad spend -> leads -> trials -> paying clients

use serde::{Deserialize, Serialize};

use crate::numeric::{ratio_or_zero, round_half_up};

/// Below this many new clients per month the funnel is "not enough to grow"
pub const MIN_GROWTH_CLIENTS_PER_MONTH: f64 = 0.5;

/// Monthly acquisition parameters. Rates are percentages (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionFunnel {
    /// Monthly ad budget in dollars
    pub ad_spend: f64,
    pub cost_per_lead: f64,
    /// Lead -> trial conversion (%)
    pub lead_to_trial_rate: f64,
    /// Trial -> paid conversion (%)
    pub trial_to_paid_rate: f64,
}

impl Default for AcquisitionFunnel {
    fn default() -> Self {
        Self {
            ad_spend: 500.0,
            cost_per_lead: 25.0,
            lead_to_trial_rate: 25.0,
            trial_to_paid_rate: 40.0,
        }
    }
}

/// Derived funnel throughput
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FunnelMetrics {
    pub leads_per_month: f64,
    pub trials_per_month: f64,
    pub new_clients_per_month: f64,
    /// Whole dollars per paying client; 0 when nobody converts
    pub cost_per_acquisition: f64,
}

impl FunnelMetrics {
    /// Whether the funnel brings in enough clients to register as growth
    pub fn sustains_growth(&self) -> bool {
        self.new_clients_per_month >= MIN_GROWTH_CLIENTS_PER_MONTH
    }
}

impl AcquisitionFunnel {
    /// Run the funnel once. Acquisition is constant month to month.
    pub fn metrics(&self) -> FunnelMetrics {
        let leads_per_month = ratio_or_zero(self.ad_spend, self.cost_per_lead);
        let trials_per_month = leads_per_month * (self.lead_to_trial_rate / 100.0);
        let new_clients_per_month = trials_per_month * (self.trial_to_paid_rate / 100.0);

        let cost_per_acquisition = if new_clients_per_month > 0.0 {
            round_half_up(self.ad_spend / new_clients_per_month)
        } else {
            0.0
        };

        FunnelMetrics {
            leads_per_month,
            trials_per_month,
            new_clients_per_month,
            cost_per_acquisition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_funnel() {
        let metrics = AcquisitionFunnel::default().metrics();

        assert_relative_eq!(metrics.leads_per_month, 20.0);
        assert_relative_eq!(metrics.trials_per_month, 5.0);
        assert_relative_eq!(metrics.new_clients_per_month, 2.0);
        assert_eq!(metrics.cost_per_acquisition, 250.0);
        assert!(metrics.sustains_growth());
    }

    #[test]
    fn test_zero_cost_per_lead_yields_no_leads() {
        let funnel = AcquisitionFunnel {
            cost_per_lead: 0.0,
            ..Default::default()
        };
        let metrics = funnel.metrics();

        assert_eq!(metrics.leads_per_month, 0.0);
        assert_eq!(metrics.new_clients_per_month, 0.0);
        assert_eq!(metrics.cost_per_acquisition, 0.0);
        assert!(!metrics.sustains_growth());
    }

    #[test]
    fn test_zero_ad_spend() {
        let funnel = AcquisitionFunnel {
            ad_spend: 0.0,
            ..Default::default()
        };
        let metrics = funnel.metrics();

        assert_eq!(metrics.new_clients_per_month, 0.0);
        assert_eq!(metrics.cost_per_acquisition, 0.0);
    }

    #[test]
    fn test_trickle_does_not_sustain_growth() {
        // $100 / $50 = 2 leads, 10% -> 0.2 trials, 20% -> 0.04 clients
        let funnel = AcquisitionFunnel {
            ad_spend: 100.0,
            cost_per_lead: 50.0,
            lead_to_trial_rate: 10.0,
            trial_to_paid_rate: 20.0,
        };
        let metrics = funnel.metrics();

        assert_relative_eq!(metrics.new_clients_per_month, 0.04, epsilon = 1e-12);
        assert_eq!(metrics.cost_per_acquisition, 2500.0);
        assert!(!metrics.sustains_growth());
    }
}

//! Calculator input parameters: offerings, costs, funnel, retention and goal

mod funnel;
mod retention;
pub mod loader;

pub use funnel::{AcquisitionFunnel, FunnelMetrics, MIN_GROWTH_CLIENTS_PER_MONTH};
pub use retention::{AdEfficiency, Retention, RetentionMetrics};
pub use loader::{load_params, load_params_from_reader};

use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, Result};
use crate::offering::Offering;

/// Default monthly profit target
pub const DEFAULT_INCOME_GOAL: f64 = 5000.0;

/// Everything the calculator reads
///
/// The caller owns this value and its lifecycle; the calculator only borrows
/// it for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessParams {
    pub offerings: Vec<Offering>,
    /// Insurance, equipment, software
    pub fixed_monthly_costs: f64,
    pub funnel: AcquisitionFunnel,
    pub retention: Retention,
    /// Target monthly profit
    pub income_goal: f64,
}

impl Default for BusinessParams {
    fn default() -> Self {
        Self::generic()
    }
}

impl BusinessParams {
    /// General studio mix: private clients and pods switched on, park classes
    /// and online coaching configured but off
    pub fn generic() -> Self {
        Self {
            offerings: vec![
                Offering::one_to_one("1:1 Personal Training", 6.0, 150.0, 2.0),
                Offering::class("Park Classes", 3.0, 8.0, 25.0, 1.5).with_active(false),
                Offering::group("Small Group Pods", 4.0, 4.0, 100.0, 2.0, false),
                Offering::remote("Online Coaching", 10.0, 75.0, 0.75).with_active(false),
            ],
            fixed_monthly_costs: 295.0,
            funnel: AcquisitionFunnel::default(),
            retention: Retention::default(),
            income_goal: DEFAULT_INCOME_GOAL,
        }
    }

    /// Host-led pods: each pod's host trains free and supplies venue and people
    pub fn host_pods() -> Self {
        Self {
            offerings: vec![
                Offering::one_to_one("1:1 Personal Training", 4.0, 180.0, 1.5),
                Offering::group("Host Pods", 5.0, 4.0, 100.0, 2.0, true),
                Offering::remote("Online Coaching", 6.0, 60.0, 0.5),
            ],
            fixed_monthly_costs: 250.0,
            funnel: AcquisitionFunnel {
                ad_spend: 300.0,
                cost_per_lead: 30.0,
                lead_to_trial_rate: 30.0,
                trial_to_paid_rate: 50.0,
            },
            retention: Retention {
                monthly_churn_rate: 6.0,
                avg_lifespan_months: 8.0,
            },
            income_goal: DEFAULT_INCOME_GOAL,
        }
    }

    /// Look up a preset by its CLI name
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "generic" => Ok(Self::generic()),
            "host-pods" | "host_pods" => Ok(Self::host_pods()),
            other => Err(CalculatorError::UnknownPreset(other.to_string())),
        }
    }

    /// Reject NaN and infinite values before they reach the projection.
    ///
    /// Negative or out-of-range numbers are accepted; range limits belong to
    /// whatever collects the input.
    pub fn validate(&self) -> Result<()> {
        let mut fields: Vec<(String, f64)> = vec![
            ("fixed_monthly_costs".to_string(), self.fixed_monthly_costs),
            ("income_goal".to_string(), self.income_goal),
            ("funnel.ad_spend".to_string(), self.funnel.ad_spend),
            ("funnel.cost_per_lead".to_string(), self.funnel.cost_per_lead),
            ("funnel.lead_to_trial_rate".to_string(), self.funnel.lead_to_trial_rate),
            ("funnel.trial_to_paid_rate".to_string(), self.funnel.trial_to_paid_rate),
            ("retention.monthly_churn_rate".to_string(), self.retention.monthly_churn_rate),
            ("retention.avg_lifespan_months".to_string(), self.retention.avg_lifespan_months),
        ];

        for (i, offering) in self.offerings.iter().enumerate() {
            for (name, value) in offering.kind.numeric_fields() {
                fields.push((format!("offerings[{}].{}", i, name), value));
            }
        }

        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(CalculatorError::NonFinite { field, value }),
            None => Ok(()),
        }
    }

    /// Find an offering by name for in-place edits
    pub fn offering_mut(&mut self, name: &str) -> Option<&mut Offering> {
        self.offerings.iter_mut().find(|o| o.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offering::OfferingKind;

    #[test]
    fn test_presets_validate() {
        assert!(BusinessParams::generic().validate().is_ok());
        assert!(BusinessParams::host_pods().validate().is_ok());
    }

    #[test]
    fn test_unknown_preset() {
        let err = BusinessParams::preset("crossfit").unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownPreset(ref name) if name == "crossfit"));
    }

    #[test]
    fn test_nan_in_funnel_fails_fast() {
        let mut params = BusinessParams::generic();
        params.funnel.cost_per_lead = f64::NAN;

        match params.validate() {
            Err(CalculatorError::NonFinite { field, .. }) => assert_eq!(field, "funnel.cost_per_lead"),
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }

    #[test]
    fn test_infinite_offering_field_names_offering() {
        let mut params = BusinessParams::generic();
        if let OfferingKind::Group { weekly_price_per_person, .. } = &mut params.offerings[2].kind {
            *weekly_price_per_person = f64::INFINITY;
        }

        match params.validate() {
            Err(CalculatorError::NonFinite { field, .. }) => {
                assert_eq!(field, "offerings[2].weekly_price_per_person")
            }
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_values_are_not_rejected() {
        let mut params = BusinessParams::generic();
        params.funnel.ad_spend = -100.0;
        params.retention.monthly_churn_rate = 150.0;

        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_offering_mut_toggle() {
        let mut params = BusinessParams::generic();
        let park = params.offering_mut("Park Classes").unwrap();
        assert!(!park.active);
        park.toggle();
        assert!(params.offerings[1].active);
    }
}

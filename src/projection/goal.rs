//! Interpreting the goal month

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateTargetState;
use crate::numeric::format_dollars;
use crate::params::FunnelMetrics;

/// Why the income goal is, or is not, reached within the horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalOutcome {
    /// Profit first met the goal in this month
    Reached { month: u32 },
    /// The funnel produces no new clients
    NoAcquisition,
    /// Even fully booked, the business cannot earn the goal
    CapacityShortfall { max_monthly_profit: f64 },
    /// Reachable in principle, but not inside the projection horizon
    BeyondHorizon,
}

impl GoalOutcome {
    /// Classify a projection's goal month. Checked in order: reached,
    /// no acquisition, capacity shortfall, beyond horizon.
    pub fn evaluate(
        month_to_goal: Option<u32>,
        funnel: &FunnelMetrics,
        aggregate: &AggregateTargetState,
        income_goal: f64,
    ) -> Self {
        if let Some(month) = month_to_goal {
            GoalOutcome::Reached { month }
        } else if funnel.new_clients_per_month <= 0.0 {
            GoalOutcome::NoAcquisition
        } else if aggregate.monthly_profit < income_goal {
            GoalOutcome::CapacityShortfall {
                max_monthly_profit: aggregate.monthly_profit,
            }
        } else {
            GoalOutcome::BeyondHorizon
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, GoalOutcome::Reached { .. })
    }

    /// One-line explanation for summaries
    pub fn message(&self, income_goal: f64, horizon_months: u32) -> String {
        match *self {
            GoalOutcome::Reached { month } => format!(
                "At this rate you hit {}/month in {} months.",
                format_dollars(income_goal),
                month
            ),
            GoalOutcome::NoAcquisition => "Set up acquisition to see projections.".to_string(),
            GoalOutcome::CapacityShortfall { max_monthly_profit } => format!(
                "Current capacity maxes out at {}/mo. Add more capacity.",
                format_dollars(max_monthly_profit)
            ),
            GoalOutcome::BeyondHorizon => format!(
                "Won't reach this goal in {} months. Improve acquisition or retention.",
                horizon_months
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::params::{AcquisitionFunnel, BusinessParams};

    fn generic() -> (AggregateTargetState, FunnelMetrics) {
        let params = BusinessParams::generic();
        let agg = aggregate(&params.offerings, params.fixed_monthly_costs, params.funnel.ad_spend);
        (agg, params.funnel.metrics())
    }

    #[test]
    fn test_reached_wins() {
        let (agg, funnel) = generic();
        let outcome = GoalOutcome::evaluate(Some(9), &funnel, &agg, 5000.0);

        assert_eq!(outcome, GoalOutcome::Reached { month: 9 });
        assert!(outcome.is_reached());
        assert_eq!(outcome.message(5000.0, 24), "At this rate you hit $5,000/month in 9 months.");
    }

    #[test]
    fn test_no_acquisition() {
        let (agg, _) = generic();
        let funnel = AcquisitionFunnel {
            ad_spend: 0.0,
            ..Default::default()
        }
        .metrics();

        let outcome = GoalOutcome::evaluate(None, &funnel, &agg, 5000.0);
        assert_eq!(outcome, GoalOutcome::NoAcquisition);
        assert!(!outcome.is_reached());
    }

    #[test]
    fn test_capacity_shortfall() {
        let (agg, funnel) = generic();
        // Fully booked generic mix earns $10,030
        let outcome = GoalOutcome::evaluate(None, &funnel, &agg, 12000.0);

        assert_eq!(outcome, GoalOutcome::CapacityShortfall { max_monthly_profit: agg.monthly_profit });
        assert_eq!(
            outcome.message(12000.0, 24),
            "Current capacity maxes out at $10,030/mo. Add more capacity."
        );
    }

    #[test]
    fn test_beyond_horizon() {
        let (agg, funnel) = generic();
        let outcome = GoalOutcome::evaluate(None, &funnel, &agg, 9500.0);

        assert_eq!(outcome, GoalOutcome::BeyondHorizon);
        assert!(outcome.message(9500.0, 24).contains("24 months"));
    }
}

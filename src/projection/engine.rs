//! Month-by-month client growth and profit projection

use crate::aggregate::AggregateTargetState;
use crate::numeric::{round_half_up, round_to_tenth};
use crate::params::{AcquisitionFunnel, Retention};
use super::state::GrowthState;
use super::points::{ProjectionPoint, ProjectionResult};

/// Default projection horizon (two years)
pub const DEFAULT_HORIZON_MONTHS: u32 = 24;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of months to project
    pub horizon_months: u32,

    /// Round emitted points for display (clients to 0.1, money to whole
    /// dollars). Has no effect on the recurrence or the goal month.
    pub round_output: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            round_output: true,
        }
    }
}

/// Growth projection engine
///
/// Starts from zero clients and steps month by month:
/// acquire -> churn -> cap -> financials -> goal check -> emit.
#[derive(Debug, Clone, Default)]
pub struct GrowthProjector {
    config: ProjectionConfig,
}

impl GrowthProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection. Always produces the full horizon, even after the
    /// goal is reached.
    pub fn project(
        &self,
        aggregate: &AggregateTargetState,
        funnel: &AcquisitionFunnel,
        retention: &Retention,
        income_goal: f64,
    ) -> ProjectionResult {
        // Ads are charged from the funnel that drives acquisition
        if aggregate.ad_spend != funnel.ad_spend {
            log::debug!(
                "aggregate ad spend {:.2} differs from funnel {:.2}; using funnel",
                aggregate.ad_spend,
                funnel.ad_spend,
            );
        }
        let new_clients_per_month = funnel.metrics().new_clients_per_month;
        let churn_fraction = retention.churn_fraction();

        let mut result = ProjectionResult::with_capacity(self.config.horizon_months as usize);
        let mut state = GrowthState::initial();

        for _month in 1..=self.config.horizon_months {
            state.advance_month();

            let point = self.calculate_month(
                aggregate,
                &mut state,
                funnel.ad_spend,
                new_clients_per_month,
                churn_fraction,
                income_goal,
                &mut result.month_to_goal,
            );
            result.add_point(point);
        }

        log::debug!(
            "projection: {} months, {:.3} new/month, churn {:.3}, goal {:?}",
            self.config.horizon_months,
            new_clients_per_month,
            churn_fraction,
            result.month_to_goal,
        );

        result
    }

    /// Step the client book one month and build its output point
    fn calculate_month(
        &self,
        aggregate: &AggregateTargetState,
        state: &mut GrowthState,
        ad_spend: f64,
        new_clients_per_month: f64,
        churn_fraction: f64,
        income_goal: f64,
        month_to_goal: &mut Option<u32>,
    ) -> ProjectionPoint {
        state.acquire(new_clients_per_month);
        state.churn(churn_fraction);
        state.cap(aggregate.target_client_count);

        let revenue = state.clients * aggregate.avg_revenue_per_client;
        let profit = revenue - aggregate.fixed_monthly_costs - ad_spend;

        // Checked on unrounded profit; first crossing wins
        if month_to_goal.is_none() && profit >= income_goal {
            *month_to_goal = Some(state.month);
        }

        log::trace!(
            "month {:>2}: clients={:.4} churned={:.4} revenue={:.2} profit={:.2}",
            state.month,
            state.clients,
            state.churned,
            revenue,
            profit,
        );

        if self.config.round_output {
            ProjectionPoint {
                month_index: state.month,
                client_count: round_to_tenth(state.clients),
                revenue: round_half_up(revenue),
                profit: round_half_up(profit),
            }
        } else {
            ProjectionPoint {
                month_index: state.month,
                client_count: state.clients,
                revenue,
                profit,
            }
        }
    }
}

//! Scenario runner: the full calculator pass and batch variants
//!
//! One run validates the parameters, aggregates offerings, runs the funnel
//! and retention maths, then projects growth. Nothing is kept between runs;
//! callers own the parameter set.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, AggregateTargetState, HostSavings};
use crate::error::{CalculatorError, Result};
use crate::params::{BusinessParams, FunnelMetrics, RetentionMetrics};
use crate::projection::{GoalOutcome, GrowthProjector, ProjectionConfig, ProjectionResult};

/// Everything the presentation layer reads after a recomputation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorReport {
    pub income_goal: f64,
    pub horizon_months: u32,
    pub aggregate: AggregateTargetState,
    pub funnel: FunnelMetrics,
    pub retention: RetentionMetrics,
    pub host_savings: HostSavings,
    pub projection: ProjectionResult,
    pub goal_outcome: GoalOutcome,
}

impl CalculatorReport {
    pub fn goal_message(&self) -> String {
        self.goal_outcome.message(self.income_goal, self.horizon_months)
    }
}

/// Upper bound on budgets per sweep
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Evenly spaced ad budgets from `min` to `max` inclusive
pub fn ad_spend_budgets(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(CalculatorError::InvalidSweep(format!("step must be a positive number, got {}", step)));
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(CalculatorError::InvalidSweep(format!(
            "bounds must be finite, got {} and {}",
            min, max
        )));
    }

    let steps = ((max - min) / step).floor().max(0.0);
    if !steps.is_finite() || steps >= MAX_SWEEP_POINTS as f64 {
        return Err(CalculatorError::InvalidSweep(format!(
            "{} to {} by {} exceeds {} budgets",
            min, max, step, MAX_SWEEP_POINTS
        )));
    }

    Ok((0..=steps as usize).map(|i| min + i as f64 * step).collect())
}

/// One row of an ad-spend sensitivity sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdSpendPoint {
    pub ad_spend: f64,
    pub new_clients_per_month: f64,
    pub cost_per_acquisition: f64,
    pub ltv_to_cac_ratio: f64,
    pub month_to_goal: Option<u32>,
    pub final_profit: f64,
}

/// Runs the calculator with a fixed projection configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let report = runner.run(&BusinessParams::host_pods())?;
/// println!("{}", report.goal_message());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    projector: GrowthProjector,
}

impl ScenarioRunner {
    /// Runner with the default 24-month, display-rounded projection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            projector: GrowthProjector::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.projector.config()
    }

    /// Full calculator pass. Fails only on non-finite input.
    pub fn run(&self, params: &BusinessParams) -> Result<CalculatorReport> {
        params.validate()?;

        let aggregate = aggregate(&params.offerings, params.fixed_monthly_costs, params.funnel.ad_spend);
        let funnel = params.funnel.metrics();
        let retention = params
            .retention
            .metrics(aggregate.avg_revenue_per_client, funnel.cost_per_acquisition);
        let host_savings = HostSavings::from_offerings(&params.offerings, funnel.cost_per_acquisition);

        let projection = self
            .projector
            .project(&aggregate, &params.funnel, &params.retention, params.income_goal);
        let goal_outcome = GoalOutcome::evaluate(projection.month_to_goal, &funnel, &aggregate, params.income_goal);

        log::info!(
            "calculator run: {:.1} target clients, {:.2} new/month, outcome {:?}",
            aggregate.target_client_count,
            funnel.new_clients_per_month,
            goal_outcome,
        );

        Ok(CalculatorReport {
            income_goal: params.income_goal,
            horizon_months: self.config().horizon_months,
            aggregate,
            funnel,
            retention,
            host_savings,
            projection,
            goal_outcome,
        })
    }

    /// Run independent parameter sets in parallel, preserving order
    pub fn run_batch(&self, params: &[BusinessParams]) -> Vec<Result<CalculatorReport>> {
        params.par_iter().map(|p| self.run(p)).collect()
    }

    /// Re-run one parameter set across several monthly ad budgets
    pub fn sweep_ad_spend(&self, params: &BusinessParams, budgets: &[f64]) -> Result<Vec<AdSpendPoint>> {
        budgets
            .par_iter()
            .map(|&ad_spend| {
                let mut scenario = params.clone();
                scenario.funnel.ad_spend = ad_spend;
                let report = self.run(&scenario)?;

                Ok(AdSpendPoint {
                    ad_spend,
                    new_clients_per_month: report.funnel.new_clients_per_month,
                    cost_per_acquisition: report.funnel.cost_per_acquisition,
                    ltv_to_cac_ratio: report.retention.ltv_to_cac_ratio,
                    month_to_goal: report.projection.month_to_goal,
                    final_profit: report.projection.summary().final_profit,
                })
            })
            .collect()
    }
}

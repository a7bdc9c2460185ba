//! Sweep monthly ad spend and report time-to-goal for each budget
//!
//! Supports JSON output via --json flag
//! Accepts config via environment variables:
//!   PRESET (generic | host-pods), PARAMS_FILE, INCOME_GOAL,
//!   SWEEP_MIN, SWEEP_MAX, SWEEP_STEP, PROJECTION_MONTHS

use std::env;
use std::time::Instant;

use trainer_calc::{
    numeric::format_dollars,
    params::load_params,
    projection::ProjectionConfig,
    scenario::ad_spend_budgets,
    BusinessParams, ScenarioRunner,
};

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    let mut params = match env::var("PARAMS_FILE") {
        Ok(path) => load_params(&path)?,
        Err(_) => BusinessParams::preset(&env::var("PRESET").unwrap_or_else(|_| "generic".to_string()))?,
    };
    params.income_goal = env_or("INCOME_GOAL", params.income_goal);

    let sweep_min: f64 = env_or("SWEEP_MIN", 0.0);
    let sweep_max: f64 = env_or("SWEEP_MAX", 2000.0);
    let sweep_step: f64 = env_or("SWEEP_STEP", 100.0);
    let budgets = ad_spend_budgets(sweep_min, sweep_max, sweep_step)?;

    let runner = ScenarioRunner::with_config(ProjectionConfig {
        horizon_months: env_or("PROJECTION_MONTHS", 24),
        ..Default::default()
    });
    let sweep = runner.sweep_ad_spend(&params, &budgets)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&sweep)?);
        return Ok(());
    }

    println!("Ad spend sweep toward {}/month", format_dollars(params.income_goal));
    println!("{:>9} {:>9} {:>8} {:>8} {:>8} {:>10}", "AdSpend", "NewCl/mo", "CAC", "LTV/CAC", "Goal", "FinalProf");
    println!("{}", "-".repeat(57));
    for row in &sweep {
        let goal = row
            .month_to_goal
            .map(|m| format!("M{}", m))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>9.0} {:>9.2} {:>8.0} {:>8.1} {:>8} {:>10.0}",
            row.ad_spend, row.new_clients_per_month, row.cost_per_acquisition, row.ltv_to_cac_ratio, goal, row.final_profit,
        );
    }

    if let Some(best) = sweep
        .iter()
        .filter_map(|row| row.month_to_goal.map(|m| (m, row.ad_spend)))
        .min_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)))
    {
        println!("\nFastest: month {} at {}/month ad spend", best.0, format_dollars(best.1));
    } else {
        println!("\nNo budget in range reaches the goal.");
    }

    println!("\nSwept {} budgets in {:?}", sweep.len(), start.elapsed());
    Ok(())
}

//! Trainer Calc CLI
//!
//! Runs the business-model calculator for a preset or a JSON parameter file

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use trainer_calc::{
    numeric::format_dollars,
    projection::{write_projection_csv_file, ProjectionConfig},
    BusinessParams, ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(name = "trainer_calc", version, about = "Personal-training business-model calculator")]
struct Args {
    /// Built-in parameter set: `generic` or `host-pods`
    #[arg(long, default_value = "generic")]
    preset: String,

    /// JSON parameter file (missing fields fall back to the generic preset)
    #[arg(long, conflicts_with = "preset")]
    params: Option<PathBuf>,

    /// Override the monthly income goal
    #[arg(long)]
    income_goal: Option<f64>,

    /// Projection horizon in months
    #[arg(long, default_value_t = 24)]
    months: u32,

    /// Write the monthly projection to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut params = match &args.params {
        Some(path) => trainer_calc::params::load_params(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => BusinessParams::preset(&args.preset)?,
    };
    if let Some(goal) = args.income_goal {
        params.income_goal = goal;
    }

    let runner = ScenarioRunner::with_config(ProjectionConfig {
        horizon_months: args.months,
        ..Default::default()
    });
    let report = runner.run(&params)?;

    if let Some(path) = &args.csv {
        write_projection_csv_file(path, &report.projection)
            .with_context(|| format!("writing projection to {}", path.display()))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Business Model");
    println!("==============\n");

    println!("Revenue mix (full capacity):");
    println!("{:<26} {:>6} {:>10} {:>8} {:>8} {:>8}", "Offering", "Type", "$/week", "Hours", "Clients", "$/hr");
    println!("{}", "-".repeat(71));
    for (offering, stats) in params.offerings.iter().zip(&report.aggregate.offerings) {
        if !stats.active {
            println!("{:<26} {:>6} {:>10}", offering.name, offering.kind.label(), "off");
            continue;
        }
        println!(
            "{:<26} {:>6} {:>10.0} {:>8.1} {:>8.0} {:>8.0}",
            offering.name,
            offering.kind.label(),
            stats.weekly_revenue,
            stats.weekly_hours,
            stats.client_count,
            stats.hourly_rate,
        );
    }

    let agg = &report.aggregate;
    let best_rate = agg.best_hourly_rate();
    if best_rate > 0.0 {
        println!("\nHourly rate by offering:");
        for stats in agg.active_offerings() {
            let width = (stats.hourly_rate / best_rate * 30.0).round() as usize;
            println!("  {:<24} {:>5}/hr {}", stats.name, format_dollars(stats.hourly_rate), "#".repeat(width));
        }
    }

    println!();
    println!("  Target clients:  {:.0} ({:.0} paying)", agg.target_client_count, agg.paying_client_count);
    println!("  Weekly revenue:  {}", format_dollars(agg.weekly_revenue));
    println!("  Weekly hours:    {:.0}", agg.weekly_hours);
    println!("  Blended rate:    {}/hr", format_dollars(agg.hourly_rate));
    println!("  Monthly profit:  {}/mo at full capacity", format_dollars(agg.monthly_profit));

    let funnel = &report.funnel;
    println!("\nAcquisition:");
    println!("  Leads/month:     {:.0}", funnel.leads_per_month);
    println!("  Trials/month:    {:.1}", funnel.trials_per_month);
    if funnel.sustains_growth() {
        println!("  New clients:     {:.1}/month", funnel.new_clients_per_month);
    } else {
        println!("  New clients:     {:.1}/month (not enough to grow)", funnel.new_clients_per_month);
    }
    println!("  Cost per client: {}", format_dollars(funnel.cost_per_acquisition));

    let retention = &report.retention;
    println!("\nRetention:");
    println!("  Avg revenue:     {}/mo per client", format_dollars(agg.avg_revenue_per_client));
    println!("  Lifetime value:  {}", format_dollars(retention.lifetime_value));
    println!(
        "  LTV / CAC:       {:.1}x  {}",
        retention.ltv_to_cac_ratio,
        retention.ad_efficiency.describe()
    );

    if report.host_savings.hosted_groups > 0.0 {
        let host = &report.host_savings;
        println!("\nHost pods ({:.0} free spots):", host.hosted_groups);
        println!("  Rent saved:      {}", format_dollars(host.rent_saved));
        println!("  Ads saved:       {}", format_dollars(host.ads_saved));
        println!("  Admin saved:     {:.0}h", host.admin_hours_saved);
    }

    println!("\nPath to {}/month:", format_dollars(report.income_goal));
    println!("{:>5} {:>8} {:>10} {:>10}", "Month", "Clients", "Revenue", "Profit");
    println!("{}", "-".repeat(36));
    for point in report.projection.points.iter().take(12) {
        println!(
            "{:>5} {:>8.1} {:>10.0} {:>10.0}",
            point.month_index, point.client_count, point.revenue, point.profit,
        );
    }
    if report.projection.points.len() > 12 {
        println!("... ({} more months)", report.projection.points.len() - 12);
    }

    println!("\nMilestones:");
    for point in report.projection.milestones() {
        println!(
            "  Month {:>2}: {:.1} clients, {}/mo",
            point.month_index,
            point.client_count,
            format_dollars(point.profit),
        );
    }

    println!("\n{}", report.goal_message());
    println!(
        "\nAssumes {}/mo fixed costs (insurance, equipment, software).",
        format_dollars(params.fixed_monthly_costs)
    );

    Ok(())
}

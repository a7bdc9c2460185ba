//! Revenue model aggregation: per-offering stats summed into target capacity
//!
//! "Target" figures describe the business with every active offering fully
//! booked. They cap the growth projection and set its revenue per client.

mod host;

pub use host::{HostSavings, ADMIN_HOURS_SAVED_PER_GROUP, RENT_SAVED_PER_GROUP};

use serde::{Deserialize, Serialize};

use crate::numeric::ratio_or_zero;
use crate::offering::{hourly_rate, Offering, OfferingStats};

/// Average number of weeks in a month
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Full-capacity financials across all active offerings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateTargetState {
    /// Per-offering stats in input order (inactive ones zeroed)
    pub offerings: Vec<OfferingStats>,

    pub weekly_revenue: f64,
    pub weekly_hours: f64,
    /// Capacity headcount, the projection's client ceiling
    pub target_client_count: f64,
    pub paying_client_count: f64,
    pub hourly_rate: f64,

    pub monthly_revenue: f64,
    pub fixed_monthly_costs: f64,
    pub ad_spend: f64,
    /// May be negative
    pub monthly_profit: f64,
    /// Monthly revenue per client; 0 with no clients
    pub avg_revenue_per_client: f64,
}

impl AggregateTargetState {
    /// Stats for active offerings only
    pub fn active_offerings(&self) -> impl Iterator<Item = &OfferingStats> {
        self.offerings.iter().filter(|s| s.active)
    }

    /// Highest per-offering hourly rate (for relative bar widths)
    pub fn best_hourly_rate(&self) -> f64 {
        self.offerings.iter().map(|s| s.hourly_rate).fold(0.0, f64::max)
    }
}

/// Sum active offerings into target-capacity financials
pub fn aggregate(offerings: &[Offering], fixed_monthly_costs: f64, ad_spend: f64) -> AggregateTargetState {
    let stats: Vec<OfferingStats> = offerings.iter().map(OfferingStats::from_offering).collect();

    // Inactive stats are already zeroed, so plain sums only count active offerings
    let weekly_revenue: f64 = stats.iter().map(|s| s.weekly_revenue).sum();
    let weekly_hours: f64 = stats.iter().map(|s| s.weekly_hours).sum();
    let target_client_count: f64 = stats.iter().map(|s| s.client_count).sum();
    let paying_client_count: f64 = stats.iter().map(|s| s.paying_clients).sum();

    let monthly_revenue = weekly_revenue * WEEKS_PER_MONTH;
    let monthly_profit = monthly_revenue - fixed_monthly_costs - ad_spend;
    let avg_revenue_per_client = ratio_or_zero(monthly_revenue, target_client_count);

    log::debug!(
        "aggregate: {} of {} offerings active, {:.1} clients, ${:.2}/week, ${:.2}/month",
        stats.iter().filter(|s| s.active).count(),
        stats.len(),
        target_client_count,
        weekly_revenue,
        monthly_revenue,
    );

    AggregateTargetState {
        offerings: stats,
        weekly_revenue,
        weekly_hours,
        target_client_count,
        paying_client_count,
        hourly_rate: hourly_rate(weekly_revenue, weekly_hours),
        monthly_revenue,
        fixed_monthly_costs,
        ad_spend,
        monthly_profit,
        avg_revenue_per_client,
    }
}

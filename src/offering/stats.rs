//! Derived per-offering statistics

use serde::{Deserialize, Serialize};

use super::Offering;
use crate::numeric::{ratio_or_zero, round_half_up};

/// Weekly figures for one offering, zeroed when the offering is inactive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferingStats {
    pub name: String,
    pub active: bool,
    pub weekly_revenue: f64,
    pub weekly_hours: f64,
    /// Total headcount including unpaid hosts
    pub client_count: f64,
    pub paying_clients: f64,
    /// Whole dollars per coaching hour; 0 when there are no hours
    pub hourly_rate: f64,
}

impl OfferingStats {
    pub fn from_offering(offering: &Offering) -> Self {
        if !offering.active {
            return Self {
                name: offering.name.clone(),
                active: false,
                weekly_revenue: 0.0,
                weekly_hours: 0.0,
                client_count: 0.0,
                paying_clients: 0.0,
                hourly_rate: 0.0,
            };
        }

        let weekly_revenue = offering.kind.weekly_revenue();
        let weekly_hours = offering.kind.weekly_hours();

        Self {
            name: offering.name.clone(),
            active: true,
            weekly_revenue,
            weekly_hours,
            client_count: offering.kind.client_count(),
            paying_clients: offering.kind.paying_client_count(),
            hourly_rate: hourly_rate(weekly_revenue, weekly_hours),
        }
    }
}

/// Integer-rounded revenue per hour, 0 when hours are not positive
pub fn hourly_rate(weekly_revenue: f64, weekly_hours: f64) -> f64 {
    if weekly_hours > 0.0 {
        round_half_up(ratio_or_zero(weekly_revenue, weekly_hours))
    } else {
        0.0
    }
}

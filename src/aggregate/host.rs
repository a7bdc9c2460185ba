//! What free host slots save
//!
//! A pod host trains free but supplies the venue, brings their own people and
//! handles the admin. These are rough per-group estimates, not billed amounts.

use serde::{Deserialize, Serialize};

use crate::offering::Offering;

/// Estimated venue cost avoided per hosted group, per month
pub const RENT_SAVED_PER_GROUP: f64 = 200.0;

/// Admin hours avoided per hosted group, per month
pub const ADMIN_HOURS_SAVED_PER_GROUP: f64 = 2.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HostSavings {
    /// Groups run with a free host slot
    pub hosted_groups: f64,
    pub rent_saved: f64,
    /// One acquisition cost avoided per host
    pub ads_saved: f64,
    pub admin_hours_saved: f64,
}

impl HostSavings {
    /// Sum savings over active group offerings that grant a host slot
    pub fn from_offerings(offerings: &[Offering], cost_per_acquisition: f64) -> Self {
        let hosted_groups: f64 = offerings
            .iter()
            .filter(|o| o.active)
            .map(|o| o.kind.host_slots())
            .sum();

        Self {
            hosted_groups,
            rent_saved: RENT_SAVED_PER_GROUP * hosted_groups,
            ads_saved: cost_per_acquisition * hosted_groups,
            admin_hours_saved: ADMIN_HOURS_SAVED_PER_GROUP * hosted_groups,
        }
    }

    /// Dollar value of rent plus ads avoided
    pub fn dollars_saved(&self) -> f64 {
        self.rent_saved + self.ads_saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosted_pods() {
        let offerings = vec![
            Offering::one_to_one("1:1", 4.0, 180.0, 1.5),
            Offering::group("Pods", 5.0, 4.0, 100.0, 2.0, true),
        ];
        let savings = HostSavings::from_offerings(&offerings, 200.0);

        assert_eq!(savings.hosted_groups, 5.0);
        assert_eq!(savings.rent_saved, 1000.0);
        assert_eq!(savings.ads_saved, 1000.0);
        assert_eq!(savings.admin_hours_saved, 10.0);
        assert_eq!(savings.dollars_saved(), 2000.0);
    }

    #[test]
    fn test_no_host_slot_or_inactive_saves_nothing() {
        let offerings = vec![
            Offering::group("Pods", 4.0, 4.0, 100.0, 2.0, false),
            Offering::group("Hosted", 3.0, 4.0, 100.0, 2.0, true).with_active(false),
        ];

        assert_eq!(HostSavings::from_offerings(&offerings, 250.0), HostSavings::default());
    }
}

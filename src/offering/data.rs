//! Offering configuration: one revenue-generating service format

use serde::{Deserialize, Serialize};

/// Capacity shape of an offering
///
/// Quantity fields are plain `f64` so fractional inputs (0.75 hours per
/// client, half-filled classes) flow through without conversion. They are not
/// range-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfferingKind {
    /// Private 1:1 training, billed weekly per client
    OneToOne {
        client_count: f64,
        weekly_price: f64,
        hours_per_client: f64,
    },
    /// Drop-in classes, billed per attendee per session
    Class {
        sessions_per_week: f64,
        attendees_per_session: f64,
        drop_in_price: f64,
        hours_per_session: f64,
    },
    /// Small fixed groups ("pods") billed weekly per person
    Group {
        group_count: f64,
        people_per_group: f64,
        weekly_price_per_person: f64,
        hours_per_session: f64,
        /// One member per group (the host) trains free
        #[serde(default)]
        free_host_slot: bool,
    },
    /// Online coaching, billed weekly per client
    Remote {
        client_count: f64,
        weekly_price: f64,
        hours_per_client: f64,
    },
}

impl OfferingKind {
    /// Short label used in CLI tables
    pub fn label(&self) -> &'static str {
        match self {
            OfferingKind::OneToOne { .. } => "1:1",
            OfferingKind::Class { .. } => "class",
            OfferingKind::Group { .. } => "group",
            OfferingKind::Remote { .. } => "remote",
        }
    }

    /// Paying slots per group: the host slot, when free, is not billed.
    /// Floored at zero so an empty group never bills negatively.
    fn paid_slots_per_group(people_per_group: f64, free_host_slot: bool) -> f64 {
        if free_host_slot {
            (people_per_group - 1.0).max(0.0)
        } else {
            people_per_group
        }
    }

    /// Weekly revenue at full capacity
    pub fn weekly_revenue(&self) -> f64 {
        match *self {
            OfferingKind::OneToOne { client_count, weekly_price, .. }
            | OfferingKind::Remote { client_count, weekly_price, .. } => client_count * weekly_price,
            OfferingKind::Class { sessions_per_week, attendees_per_session, drop_in_price, .. } => {
                sessions_per_week * attendees_per_session * drop_in_price
            }
            OfferingKind::Group {
                group_count,
                people_per_group,
                weekly_price_per_person,
                free_host_slot,
                ..
            } => {
                let paid = Self::paid_slots_per_group(people_per_group, free_host_slot);
                group_count * paid * weekly_price_per_person
            }
        }
    }

    /// Coaching hours per week at full capacity
    pub fn weekly_hours(&self) -> f64 {
        match *self {
            OfferingKind::OneToOne { client_count, hours_per_client, .. }
            | OfferingKind::Remote { client_count, hours_per_client, .. } => client_count * hours_per_client,
            OfferingKind::Class { sessions_per_week, hours_per_session, .. } => sessions_per_week * hours_per_session,
            OfferingKind::Group { group_count, hours_per_session, .. } => group_count * hours_per_session,
        }
    }

    /// Total headcount, including unpaid hosts
    pub fn client_count(&self) -> f64 {
        match *self {
            OfferingKind::OneToOne { client_count, .. } | OfferingKind::Remote { client_count, .. } => client_count,
            OfferingKind::Class { sessions_per_week, attendees_per_session, .. } => {
                sessions_per_week * attendees_per_session
            }
            OfferingKind::Group { group_count, people_per_group, .. } => group_count * people_per_group,
        }
    }

    /// Headcount that actually pays
    pub fn paying_client_count(&self) -> f64 {
        match *self {
            OfferingKind::Group { group_count, people_per_group, free_host_slot, .. } => {
                group_count * Self::paid_slots_per_group(people_per_group, free_host_slot)
            }
            _ => self.client_count(),
        }
    }

    /// Number of free host slots granted per week (one per group when enabled)
    pub fn host_slots(&self) -> f64 {
        match *self {
            OfferingKind::Group { group_count, free_host_slot: true, .. } => group_count,
            _ => 0.0,
        }
    }

    /// All numeric fields with their names, for boundary validation
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        match *self {
            OfferingKind::OneToOne { client_count, weekly_price, hours_per_client }
            | OfferingKind::Remote { client_count, weekly_price, hours_per_client } => vec![
                ("client_count", client_count),
                ("weekly_price", weekly_price),
                ("hours_per_client", hours_per_client),
            ],
            OfferingKind::Class {
                sessions_per_week,
                attendees_per_session,
                drop_in_price,
                hours_per_session,
            } => vec![
                ("sessions_per_week", sessions_per_week),
                ("attendees_per_session", attendees_per_session),
                ("drop_in_price", drop_in_price),
                ("hours_per_session", hours_per_session),
            ],
            OfferingKind::Group {
                group_count,
                people_per_group,
                weekly_price_per_person,
                hours_per_session,
                ..
            } => vec![
                ("group_count", group_count),
                ("people_per_group", people_per_group),
                ("weekly_price_per_person", weekly_price_per_person),
                ("hours_per_session", hours_per_session),
            ],
        }
    }
}

/// A configured service format
///
/// `active` is a toggle only: switching it off zeroes the offering's
/// contribution but leaves `kind` untouched, so switching back restores the
/// prior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    /// Display name ("1:1 Personal Training", "Park Classes", ...)
    pub name: String,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(flatten)]
    pub kind: OfferingKind,
}

fn default_active() -> bool {
    true
}

impl Offering {
    pub fn new(name: impl Into<String>, kind: OfferingKind) -> Self {
        Self {
            name: name.into(),
            active: true,
            kind,
        }
    }

    pub fn one_to_one(name: impl Into<String>, client_count: f64, weekly_price: f64, hours_per_client: f64) -> Self {
        Self::new(name, OfferingKind::OneToOne { client_count, weekly_price, hours_per_client })
    }

    pub fn class(
        name: impl Into<String>,
        sessions_per_week: f64,
        attendees_per_session: f64,
        drop_in_price: f64,
        hours_per_session: f64,
    ) -> Self {
        Self::new(
            name,
            OfferingKind::Class {
                sessions_per_week,
                attendees_per_session,
                drop_in_price,
                hours_per_session,
            },
        )
    }

    pub fn group(
        name: impl Into<String>,
        group_count: f64,
        people_per_group: f64,
        weekly_price_per_person: f64,
        hours_per_session: f64,
        free_host_slot: bool,
    ) -> Self {
        Self::new(
            name,
            OfferingKind::Group {
                group_count,
                people_per_group,
                weekly_price_per_person,
                hours_per_session,
                free_host_slot,
            },
        )
    }

    pub fn remote(name: impl Into<String>, client_count: f64, weekly_price: f64, hours_per_client: f64) -> Self {
        Self::new(name, OfferingKind::Remote { client_count, weekly_price, hours_per_client })
    }

    /// Builder-style toggle, mainly for presets
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Flip the active flag, keeping the configuration
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_host_slot_asymmetry() {
        let pods = OfferingKind::Group {
            group_count: 4.0,
            people_per_group: 4.0,
            weekly_price_per_person: 100.0,
            hours_per_session: 2.0,
            free_host_slot: true,
        };

        assert_eq!(pods.weekly_revenue(), 1200.0); // 4 groups x 3 paying x $100
        assert_eq!(pods.client_count(), 16.0);
        assert_eq!(pods.paying_client_count(), 12.0);
        assert_eq!(pods.host_slots(), 4.0);
        assert_eq!(pods.weekly_hours(), 8.0);
    }

    #[test]
    fn test_empty_group_with_host_slot_bills_nothing() {
        let pods = OfferingKind::Group {
            group_count: 3.0,
            people_per_group: 0.0,
            weekly_price_per_person: 100.0,
            hours_per_session: 1.0,
            free_host_slot: true,
        };

        assert_eq!(pods.weekly_revenue(), 0.0);
        assert_eq!(pods.client_count(), 0.0);
    }

    #[test]
    fn test_class_headcount_is_sessions_times_attendees() {
        let park = OfferingKind::Class {
            sessions_per_week: 3.0,
            attendees_per_session: 8.0,
            drop_in_price: 25.0,
            hours_per_session: 1.5,
        };

        assert_eq!(park.weekly_revenue(), 600.0);
        assert_eq!(park.weekly_hours(), 4.5);
        assert_eq!(park.client_count(), 24.0);
        assert_eq!(park.host_slots(), 0.0);
    }

    #[test]
    fn test_toggle_keeps_configuration() {
        let mut pt = Offering::one_to_one("1:1", 6.0, 150.0, 2.0);
        let before = pt.kind.clone();

        pt.toggle();
        assert!(!pt.active);
        pt.toggle();
        assert!(pt.active);
        assert_eq!(pt.kind, before);
    }

    #[test]
    fn test_deserialize_tagged_offering() {
        let json = r#"{
            "name": "Pods",
            "type": "group",
            "group_count": 5,
            "people_per_group": 4,
            "weekly_price_per_person": 100,
            "hours_per_session": 2,
            "free_host_slot": true
        }"#;

        let offering: Offering = serde_json::from_str(json).unwrap();
        assert!(offering.active);
        assert_eq!(offering.kind.weekly_revenue(), 1500.0);
        assert_eq!(offering.kind.label(), "group");
    }
}

//! Projection output structures

use serde::{Deserialize, Serialize};

/// Months shown as milestones under the growth chart
pub const MILESTONE_MONTHS: [u32; 3] = [3, 6, 12];

/// A single month of projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-indexed month
    pub month_index: u32,
    /// Clients on the books (one decimal when rounded)
    pub client_count: f64,
    /// Monthly revenue (whole dollars when rounded)
    pub revenue: f64,
    /// Monthly profit (whole dollars when rounded); may be negative
    pub profit: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// One point per month, in order, covering the full horizon
    pub points: Vec<ProjectionPoint>,

    /// First month whose profit reached the income goal
    pub month_to_goal: Option<u32>,
}

impl ProjectionResult {
    pub fn with_capacity(months: usize) -> Self {
        Self {
            points: Vec::with_capacity(months),
            month_to_goal: None,
        }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Point for a 1-indexed month
    pub fn month(&self, month_index: u32) -> Option<&ProjectionPoint> {
        month_index
            .checked_sub(1)
            .and_then(|i| self.points.get(i as usize))
    }

    /// Points at months 3, 6 and 12, where the horizon reaches them
    pub fn milestones(&self) -> Vec<&ProjectionPoint> {
        MILESTONE_MONTHS.iter().filter_map(|&m| self.month(m)).collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.points.iter().map(|p| p.revenue).sum();
        let total_profit: f64 = self.points.iter().map(|p| p.profit).sum();
        let peak_clients = self.points.iter().map(|p| p.client_count).fold(0.0, f64::max);

        let final_clients = self.points.last().map(|p| p.client_count).unwrap_or(0.0);
        let final_profit = self.points.last().map(|p| p.profit).unwrap_or(0.0);

        ProjectionSummary {
            total_months: self.points.len() as u32,
            final_clients,
            peak_clients,
            final_profit,
            total_revenue,
            total_profit,
            month_to_goal: self.month_to_goal,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub final_clients: f64,
    pub peak_clients: f64,
    pub final_profit: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub month_to_goal: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month_index: u32, client_count: f64, revenue: f64, profit: f64) -> ProjectionPoint {
        ProjectionPoint { month_index, client_count, revenue, profit }
    }

    #[test]
    fn test_month_lookup_is_one_indexed() {
        let mut result = ProjectionResult::with_capacity(2);
        result.add_point(point(1, 1.8, 276.0, -519.0));
        result.add_point(point(2, 3.5, 530.0, -265.0));

        assert_eq!(result.month(1).unwrap().client_count, 1.8);
        assert_eq!(result.month(2).unwrap().profit, -265.0);
        assert!(result.month(0).is_none());
        assert!(result.month(3).is_none());
    }

    #[test]
    fn test_milestones_skip_months_beyond_horizon() {
        let mut result = ProjectionResult::with_capacity(6);
        for m in 1..=6 {
            result.add_point(point(m, m as f64, 100.0 * m as f64, 0.0));
        }

        let milestones: Vec<u32> = result.milestones().iter().map(|p| p.month_index).collect();
        assert_eq!(milestones, vec![3, 6]);
    }

    #[test]
    fn test_summary() {
        let mut result = ProjectionResult::with_capacity(3);
        result.add_point(point(1, 2.0, 300.0, -500.0));
        result.add_point(point(2, 4.0, 600.0, -200.0));
        result.add_point(point(3, 3.0, 450.0, -350.0));
        result.month_to_goal = None;

        let summary = result.summary();
        assert_eq!(summary.total_months, 3);
        assert_eq!(summary.final_clients, 3.0);
        assert_eq!(summary.peak_clients, 4.0);
        assert_eq!(summary.final_profit, -350.0);
        assert_eq!(summary.total_revenue, 1350.0);
        assert_eq!(summary.total_profit, -1050.0);
        assert_eq!(summary.month_to_goal, None);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionResult::with_capacity(0).summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.final_clients, 0.0);
        assert_eq!(summary.peak_clients, 0.0);
    }
}

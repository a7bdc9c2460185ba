//! Running client state for the growth projection

/// Client book at a point in the projection
///
/// `clients` is never rounded: display rounding happens when a point is
/// emitted and must not feed back into the next month.
#[derive(Debug, Clone)]
pub struct GrowthState {
    /// Current projection month (1-indexed; 0 before the first step)
    pub month: u32,

    /// Clients on the books, unrounded
    pub clients: f64,

    /// Clients lost to churn in the current month
    pub churned: f64,
}

impl GrowthState {
    /// Every projection starts from an empty book
    pub fn initial() -> Self {
        Self {
            month: 0,
            clients: 0.0,
            churned: 0.0,
        }
    }

    pub fn advance_month(&mut self) {
        self.month += 1;
        self.churned = 0.0;
    }

    /// Add the month's new sign-ups
    pub fn acquire(&mut self, new_clients: f64) {
        self.clients += new_clients;
    }

    /// Apply churn to the post-acquisition book, so this month's sign-ups
    /// churn too. Never goes below zero.
    pub fn churn(&mut self, churn_fraction: f64) {
        self.churned = self.clients * churn_fraction;
        self.clients = (self.clients - self.churned).max(0.0);
    }

    /// Hold the book at configured capacity
    pub fn cap(&mut self, capacity: f64) {
        self.clients = self.clients.min(capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_churn_applies_after_acquisition() {
        let mut state = GrowthState::initial();
        state.advance_month();
        state.acquire(2.0);
        state.churn(0.08);

        assert_eq!(state.month, 1);
        assert_relative_eq!(state.churned, 0.16);
        assert_relative_eq!(state.clients, 1.84);
    }

    #[test]
    fn test_churn_over_100_percent_floors_at_zero() {
        let mut state = GrowthState::initial();
        state.acquire(5.0);
        state.churn(1.5);

        assert_eq!(state.clients, 0.0);
    }

    #[test]
    fn test_cap() {
        let mut state = GrowthState::initial();
        state.acquire(30.0);
        state.cap(22.0);
        assert_eq!(state.clients, 22.0);

        state.cap(0.0);
        assert_eq!(state.clients, 0.0);
    }
}

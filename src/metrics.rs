use crate::types::event::LiftEvent;

/// Fleet-wide accumulator for travel distance and serviced requests.
///
/// Passed by reference into the drivers instead of living in process
/// globals, so runs can reset it between simulations and tests can read it
/// back. Totals always equal the sums of the per-lift counters.
#[derive(Debug, Default)]
pub struct Metrics {
    total_distance: u64,
    serviced_requests: u64,
}

impl Metrics {
    pub fn new() -> Metrics {
        Metrics::default()
    }

    pub fn reset(&mut self) {
        self.total_distance = 0;
        self.serviced_requests = 0;
    }

    pub fn add_distance(&mut self, floors: u64) {
        self.total_distance += floors;
    }

    pub fn add_serviced(&mut self, count: u64) {
        self.serviced_requests += count;
    }

    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }

    pub fn serviced_requests(&self) -> u64 {
        self.serviced_requests
    }

    /// Fold one step event into the totals.
    pub fn record(&mut self, event: &LiftEvent) {
        match event {
            LiftEvent::Moved { from, to, .. } => {
                self.add_distance(u64::from(to.abs_diff(*from)));
            }
            LiftEvent::Serviced { .. } => self.add_serviced(1),
        }
    }

    /// Serviced requests per simulation step.
    pub fn throughput(&self, steps: u64) -> f64 {
        if steps == 0 {
            return 0.0;
        }
        self.serviced_requests as f64 / steps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_and_resets() {
        let mut metrics = Metrics::new();
        metrics.add_distance(5);
        metrics.add_distance(3);
        metrics.add_serviced(2);
        assert_eq!(metrics.total_distance(), 8);
        assert_eq!(metrics.serviced_requests(), 2);

        metrics.reset();
        assert_eq!(metrics.total_distance(), 0);
        assert_eq!(metrics.serviced_requests(), 0);
    }

    #[test]
    fn records_events() {
        use crate::types::direction::Direction;

        let mut metrics = Metrics::new();
        metrics.record(&LiftEvent::Moved {
            lift: 0,
            from: 2,
            to: 3,
            direction: Direction::Up,
        });
        metrics.record(&LiftEvent::Serviced { lift: 0, floor: 3 });
        assert_eq!(metrics.total_distance(), 1);
        assert_eq!(metrics.serviced_requests(), 1);
        assert_eq!(metrics.throughput(2), 0.5);
    }
}

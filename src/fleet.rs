use tracing::{debug, info, warn};

use crate::config::{Algorithm, SimConfig};
use crate::lift::Lift;
use crate::metrics::Metrics;
use crate::strategies::mylift::WaitTable;
use crate::strategies::{look, mylift, scan};
use crate::types::event::LiftEvent;
use crate::types::request::Request;

/// A bank of independently scheduled lifts sharing one dispatch policy.
///
/// Each lift owns its queue and counters; the fleet only decides which lift
/// a new request lands on (least-loaded, ties to the lowest id) and fans
/// ticks out to every car.
#[derive(Debug)]
pub struct Fleet {
    lifts: Vec<Lift>,
    waits: Vec<WaitTable>,
    algorithm: Algorithm,
}

impl Fleet {
    /// Build the fleet and distribute the configured requests across it.
    /// Invalid requests are logged and skipped; they never halt the run.
    pub fn prepare(config: &SimConfig) -> Fleet {
        let lifts = (0..config.num_lifts)
            .map(|id| Lift::new(id, 1, config.num_floors))
            .collect::<Vec<_>>();
        let waits = (0..config.num_lifts).map(|_| WaitTable::new()).collect();
        let mut fleet = Fleet {
            lifts,
            waits,
            algorithm: config.algorithm,
        };

        for (&origin, destinations) in &config.requests {
            for &destination in destinations {
                match Request::new(origin, destination, config.num_floors) {
                    Ok(request) => fleet.assign(request),
                    Err(err) => warn!(%err, "skipping request"),
                }
            }
        }

        info!(
            lifts = fleet.lifts.len(),
            algorithm = %fleet.algorithm,
            "prepared fleet and assigned requests"
        );
        fleet
    }

    /// Hand a request to the lift with the fewest pending floors.
    pub fn assign(&mut self, request: Request) {
        let Some(lift) = self.lifts.iter_mut().min_by_key(|l| l.pending_count()) else {
            warn!("no lifts to assign request to");
            return;
        };
        debug!(
            lift = lift.id(),
            destination = request.destination(),
            "assigned request"
        );
        lift.add_request(request.destination());
    }

    pub fn lifts(&self) -> &[Lift] {
        &self.lifts
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn is_drained(&self) -> bool {
        self.lifts.iter().all(Lift::is_idle)
    }

    /// Advance every lift by exactly one dispatch step and report what
    /// changed. Idle lifts are skipped.
    pub fn tick(&mut self) -> Vec<LiftEvent> {
        let algorithm = self.algorithm;
        let mut events = Vec::new();
        for (lift, waits) in self.lifts.iter_mut().zip(self.waits.iter_mut()) {
            let floor_before = lift.current_floor();
            let serviced_before = lift.serviced_count();

            let advanced = match algorithm {
                Algorithm::Scan => scan::step(lift),
                Algorithm::Look => look::step(lift),
                Algorithm::Mylift => mylift::step(lift, waits),
            };
            if !advanced {
                continue;
            }

            if lift.current_floor() != floor_before {
                events.push(LiftEvent::Moved {
                    lift: lift.id(),
                    from: floor_before,
                    to: lift.current_floor(),
                    direction: lift.direction(),
                });
            }
            if lift.serviced_count() > serviced_before {
                events.push(LiftEvent::Serviced {
                    lift: lift.id(),
                    floor: lift.current_floor(),
                });
            }
        }
        events
    }
}

/// Drain the fleet tick by tick, folding events into `metrics`. Returns the
/// number of steps taken; stops early once the advisory budget is spent.
pub fn run_batch(fleet: &mut Fleet, metrics: &mut Metrics, budget: u64) -> u64 {
    let mut steps = 0;
    while !fleet.is_drained() {
        if steps >= budget {
            warn!(budget, "step budget exhausted before the fleet drained");
            break;
        }
        for event in fleet.tick() {
            debug!("{event}");
            metrics.record(&event);
        }
        steps += 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn config_with_requests(requests: BTreeMap<u8, Vec<u8>>) -> SimConfig {
        SimConfig {
            requests,
            ..SimConfig::default()
        }
    }

    #[test]
    fn distributes_requests_least_loaded_first() {
        let config = config_with_requests(BTreeMap::from([(1, vec![3, 5]), (2, vec![4])]));
        let fleet = Fleet::prepare(&config);

        let sizes: Vec<usize> = fleet.lifts().iter().map(Lift::pending_count).collect();
        assert_eq!(sizes.iter().sum::<usize>(), 3);
        assert!(sizes.iter().all(|&s| s <= 2), "got {sizes:?}");
        // (1,3) -> lift 0, (1,5) -> lift 1, (2,4) -> tie broken to lift 0
        assert_eq!(fleet.lifts()[0].requests(), &[3, 4]);
        assert_eq!(fleet.lifts()[1].requests(), &[5]);
    }

    #[test]
    fn skips_same_floor_requests() {
        let config = config_with_requests(BTreeMap::from([(2, vec![2]), (1, vec![3])]));
        let fleet = Fleet::prepare(&config);

        let total: usize = fleet.lifts().iter().map(Lift::pending_count).sum();
        assert_eq!(total, 1);
        assert!(fleet.lifts().iter().all(|l| !l.requests().contains(&2)));
    }

    #[test]
    fn skips_out_of_range_requests() {
        let config = config_with_requests(BTreeMap::from([(1, vec![9, 3])]));
        let fleet = Fleet::prepare(&config);

        let total: usize = fleet.lifts().iter().map(Lift::pending_count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn all_lifts_start_at_the_ground_floor() {
        let fleet = Fleet::prepare(&SimConfig::default());
        assert!(fleet.lifts().iter().all(|l| l.current_floor() == 1));
    }

    #[test]
    fn batch_run_drains_the_fleet() {
        let mut fleet = Fleet::prepare(&SimConfig::default());
        let mut metrics = Metrics::new();

        let steps = run_batch(&mut fleet, &mut metrics, 100);

        assert!(fleet.is_drained());
        assert!(steps > 0);
        assert_eq!(metrics.serviced_requests(), 4);
        let per_lift: u64 = fleet
            .lifts()
            .iter()
            .map(|l| u64::from(l.floors_traveled()))
            .sum();
        assert_eq!(metrics.total_distance(), per_lift);
    }

    #[test]
    fn batch_run_respects_the_step_budget() {
        let mut fleet = Fleet::prepare(&SimConfig::default());
        let mut metrics = Metrics::new();

        let steps = run_batch(&mut fleet, &mut metrics, 1);

        assert_eq!(steps, 1);
        assert!(!fleet.is_drained());
    }

    #[test]
    fn every_algorithm_drains_the_same_requests() {
        for algorithm in [Algorithm::Scan, Algorithm::Look, Algorithm::Mylift] {
            let config = SimConfig {
                algorithm,
                ..SimConfig::default()
            };
            let mut fleet = Fleet::prepare(&config);
            let mut metrics = Metrics::new();

            run_batch(&mut fleet, &mut metrics, 100);

            assert!(fleet.is_drained(), "{algorithm} left requests pending");
            assert_eq!(metrics.serviced_requests(), 4, "{algorithm}");
        }
    }
}

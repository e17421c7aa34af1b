//! Directional nearest-target sweep (LOOK).
//!
//! Same partitioning and reversal as SCAN, but travel in a direction is
//! capped at the nearest pending floor on that side, so the car never
//! overshoots the furthest request toward an empty boundary.

use crate::lift::Lift;
use crate::strategies::sweep::{Gate, sweep_step};

/// Advance the lift by exactly one LOOK step. No-op on an empty queue.
pub fn step(lift: &mut Lift) -> bool {
    sweep_step(lift, Gate::NearestTarget)
}

/// Run LOOK until the lift's queue is drained.
pub fn run(lift: &mut Lift) {
    while step(lift) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_on_highest_requested_floor() {
        let mut lift = Lift::new(0, 2, 5);
        lift.add_request(4);
        lift.add_request(5);

        run(&mut lift);

        assert!(lift.is_idle());
        assert_eq!(lift.current_floor(), 5);
        assert_eq!(lift.serviced_count(), 2);
        assert_eq!(lift.floors_traveled(), 3);
    }

    #[test]
    fn never_travels_past_the_furthest_request() {
        let mut lift = Lift::new(0, 1, 10);
        lift.add_request(3);

        let mut highest = lift.current_floor();
        while step(&mut lift) {
            highest = highest.max(lift.current_floor());
        }

        assert_eq!(highest, 3);
        assert_eq!(lift.current_floor(), 3);
    }

    #[test]
    fn never_travels_below_the_lowest_request() {
        let mut lift = Lift::new(0, 8, 10);
        lift.add_request(4);
        lift.add_request(6);

        let mut lowest = lift.current_floor();
        while step(&mut lift) {
            lowest = lowest.min(lift.current_floor());
        }

        assert_eq!(lowest, 4);
        assert_eq!(lift.serviced_count(), 2);
    }

    #[test]
    fn sweeps_up_then_back_down() {
        let mut lift = Lift::new(0, 3, 9);
        for floor in [5, 7, 1] {
            lift.add_request(floor);
        }

        run(&mut lift);

        assert!(lift.is_idle());
        assert_eq!(lift.serviced_count(), 3);
        assert_eq!(lift.current_floor(), 1);
    }
}

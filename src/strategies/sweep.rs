use crate::lift::Lift;
use crate::types::direction::Direction;

/// How far a directional sweep will travel before it has to reverse.
///
/// The two sweep policies share all partitioning and reversal logic and
/// differ only in this bound: `Boundary` keeps going until the building
/// limit, `NearestTarget` refuses to travel past the closest pending floor
/// in the current direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gate {
    Boundary,
    NearestTarget,
}

/// Advance one sweep step: move at most one floor, reversing direction when
/// nothing is pending ahead (a single step may both reverse and move), then
/// service the current floor. Returns false if the queue is empty.
pub(crate) fn sweep_step(lift: &mut Lift, gate: Gate) -> bool {
    if lift.is_idle() {
        return false;
    }

    match lift.direction() {
        Direction::Up => {
            if let Some(target) = lift.nearest_above() {
                advance_up(lift, gate, target);
            } else {
                lift.reverse();
                if let Some(target) = lift.nearest_below() {
                    advance_down(lift, gate, target);
                }
            }
        }
        Direction::Down => {
            if let Some(target) = lift.nearest_below() {
                advance_down(lift, gate, target);
            } else {
                lift.reverse();
                if let Some(target) = lift.nearest_above() {
                    advance_up(lift, gate, target);
                }
            }
        }
    }

    lift.service_current();
    true
}

fn advance_up(lift: &mut Lift, gate: Gate, target: u8) {
    match gate {
        Gate::Boundary => {
            lift.move_up();
        }
        Gate::NearestTarget => {
            if lift.current_floor() < target {
                lift.move_up();
            }
        }
    }
}

fn advance_down(lift: &mut Lift, gate: Gate, target: u8) {
    match gate {
        Gate::Boundary => {
            lift.move_down();
        }
        Gate::NearestTarget => {
            if lift.current_floor() > target {
                lift.move_down();
            }
        }
    }
}

//! Priority-weighted heuristic (MYLIFT).
//!
//! Each step scores every pending floor as `distance - wait_time` and chases
//! the lowest score, so nearby floors win until a request has waited long
//! enough to take over. Strict comparison keeps ties on the first floor
//! queued.

use std::collections::HashMap;

use crate::lift::Lift;
use crate::types::direction::Direction;

/// Steps waited per pending floor. Entries appear lazily at 0 and are pruned
/// once the floor is serviced.
pub type WaitTable = HashMap<u8, u32>;

/// Advance the lift one floor toward the highest-priority pending floor.
/// No-op on an empty queue.
pub fn step(lift: &mut Lift, waits: &mut WaitTable) -> bool {
    let Some(target) = select_target(lift, waits) else {
        return false;
    };

    if target > lift.current_floor() {
        lift.set_direction(Direction::Up);
        lift.move_up();
    } else if target < lift.current_floor() {
        lift.set_direction(Direction::Down);
        lift.move_down();
    }

    if lift.current_floor() == target {
        if let Some(floor) = lift.service_current() {
            waits.remove(&floor);
        }
    }

    for &floor in lift.requests() {
        *waits.entry(floor).or_insert(0) += 1;
    }
    true
}

/// Run the heuristic until the lift's queue is drained.
pub fn run(lift: &mut Lift, waits: &mut WaitTable) {
    while step(lift, waits) {}
}

fn select_target(lift: &Lift, waits: &WaitTable) -> Option<u8> {
    let mut best: Option<(i64, u8)> = None;
    for &floor in lift.requests() {
        let distance = i64::from(floor.abs_diff(lift.current_floor()));
        let waited = i64::from(waits.get(&floor).copied().unwrap_or(0));
        let priority = distance - waited;
        if best.is_none_or(|(lowest, _)| priority < lowest) {
            best = Some((priority, floor));
        }
    }
    best.map(|(_, floor)| floor)
}

//! Exhaustive directional sweep (SCAN).
//!
//! The car keeps moving in its current direction while any request remains
//! on that side, bounded only by the building limits, and reverses when the
//! side ahead is empty.

use crate::lift::Lift;
use crate::strategies::sweep::{Gate, sweep_step};

/// Advance the lift by exactly one SCAN step. No-op on an empty queue.
pub fn step(lift: &mut Lift) -> bool {
    sweep_step(lift, Gate::Boundary)
}

/// Run SCAN until the lift's queue is drained.
pub fn run(lift: &mut Lift) {
    while step(lift) {}
}

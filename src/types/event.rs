use std::fmt;
use std::fmt::Display;

use crate::types::direction::Direction;

/// One discrete unit of simulated time. Each tick advances every lift by
/// exactly one dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// State change produced by a single dispatch step of one lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftEvent {
    Moved {
        lift: usize,
        from: u8,
        to: u8,
        direction: Direction,
    },
    Serviced {
        lift: usize,
        floor: u8,
    },
}

impl Display for LiftEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiftEvent::Moved {
                lift,
                from,
                to,
                direction,
            } => write!(f, "lift {lift} moved {direction} from {from} to {to}"),
            LiftEvent::Serviced { lift, floor } => {
                write!(f, "lift {lift} serviced floor {floor}")
            }
        }
    }
}

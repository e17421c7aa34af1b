use thiserror::Error;

use crate::types::direction::Direction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("origin {origin} and destination {destination} are the same floor")]
    SameFloor { origin: u8, destination: u8 },

    #[error("floor {floor} is outside the building range 1..={top}")]
    OutOfRange { floor: u8, top: u8 },
}

/// A travel request from an origin floor to a destination floor.
///
/// Construction is where request validation happens; anything that makes it
/// past [`Request::new`] is serviceable by a lift in a building of the given
/// height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    origin: u8,
    destination: u8,
    direction: Direction,
}

impl Request {
    pub fn new(origin: u8, destination: u8, top_floor: u8) -> Result<Request, RequestError> {
        if origin == destination {
            return Err(RequestError::SameFloor {
                origin,
                destination,
            });
        }
        for floor in [origin, destination] {
            if floor < 1 || floor > top_floor {
                return Err(RequestError::OutOfRange {
                    floor,
                    top: top_floor,
                });
            }
        }
        let direction = if destination > origin {
            Direction::Up
        } else {
            Direction::Down
        };
        Ok(Request {
            origin,
            destination,
            direction,
        })
    }

    pub fn origin(&self) -> u8 {
        self.origin
    }

    pub fn destination(&self) -> u8 {
        self.destination
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

use tracing::debug;

use crate::types::direction::Direction;

/// A single lift car: position, travel direction, and its own queue of
/// requested floors.
///
/// Floors are numbered from 1 at the bottom to `top_floor` at the top.
/// `current_floor` never leaves that range; movement past either boundary is
/// clamped to a no-op. The pending queue keeps insertion order and rejects
/// duplicates, so `serviced_count` is exactly the number of distinct floors
/// the car has arrived at.
#[derive(Debug)]
pub struct Lift {
    id: usize,
    current_floor: u8,
    top_floor: u8,
    direction: Direction,
    requests: Vec<u8>,
    floors_traveled: u32,
    serviced_count: u32,
}

impl Lift {
    pub fn new(id: usize, start_floor: u8, top_floor: u8) -> Lift {
        Lift {
            id,
            current_floor: start_floor.clamp(1, top_floor),
            top_floor,
            direction: Direction::Up,
            requests: Vec::new(),
            floors_traveled: 0,
            serviced_count: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn top_floor(&self) -> u8 {
        self.top_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
    }

    pub fn requests(&self) -> &[u8] {
        &self.requests
    }

    pub fn pending_count(&self) -> usize {
        self.requests.len()
    }

    pub fn is_idle(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn floors_traveled(&self) -> u32 {
        self.floors_traveled
    }

    pub fn serviced_count(&self) -> u32 {
        self.serviced_count
    }

    /// Queue a destination floor. Duplicates are dropped. The floor is not
    /// checked against `top_floor` here; callers validate ranges before
    /// queueing (see `Request::new`).
    pub fn add_request(&mut self, floor: u8) -> bool {
        if self.requests.contains(&floor) {
            debug!(lift = self.id, floor, "request already queued");
            return false;
        }
        self.requests.push(floor);
        true
    }

    /// Lowest pending floor strictly above the car.
    pub fn nearest_above(&self) -> Option<u8> {
        self.requests
            .iter()
            .copied()
            .filter(|&f| f > self.current_floor)
            .min()
    }

    /// Highest pending floor strictly below the car.
    pub fn nearest_below(&self) -> Option<u8> {
        self.requests
            .iter()
            .copied()
            .filter(|&f| f < self.current_floor)
            .max()
    }

    /// Move one floor up, clamped at the top of the building. Returns whether
    /// the car actually moved; a clamped move adds no travel distance.
    pub fn move_up(&mut self) -> bool {
        if self.current_floor >= self.top_floor {
            debug!(lift = self.id, floor = self.current_floor, "at top floor, holding");
            return false;
        }
        self.current_floor += 1;
        self.floors_traveled += 1;
        debug!(
            lift = self.id,
            floor = self.current_floor,
            traveled = self.floors_traveled,
            "moved up"
        );
        true
    }

    /// Move one floor down, clamped at floor 1.
    pub fn move_down(&mut self) -> bool {
        if self.current_floor <= 1 {
            debug!(lift = self.id, floor = self.current_floor, "at bottom floor, holding");
            return false;
        }
        self.current_floor -= 1;
        self.floors_traveled += 1;
        debug!(
            lift = self.id,
            floor = self.current_floor,
            traveled = self.floors_traveled,
            "moved down"
        );
        true
    }

    /// Service a pending request at the current floor, if there is one.
    pub fn service_current(&mut self) -> Option<u8> {
        let position = self
            .requests
            .iter()
            .position(|&f| f == self.current_floor)?;
        let floor = self.requests.remove(position);
        self.serviced_count += 1;
        Some(floor)
    }
}

pub mod config;
pub mod fleet;
pub mod lift;
pub mod metrics;
pub mod services;
pub mod strategies;
pub mod strategy;
pub mod types;

pub use config::{Algorithm, SimConfig};
pub use fleet::{Fleet, run_batch};
pub use lift::Lift;
pub use metrics::Metrics;
pub use strategy::{FleetStrategy, Strategy};
pub use types::direction::Direction;
pub use types::event::{LiftEvent, Tick};
pub use types::request::{Request, RequestError};

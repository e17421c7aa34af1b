use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::fleet::Fleet;
use crate::types::event::LiftEvent;
use crate::types::request::Request;

/// Seam between the tick-driven service pipeline and the dispatch core:
/// `handle` feeds work in, `step` advances the simulation by one unit of
/// time and reports what changed. `None` means there is nothing left to do.
#[async_trait]
pub trait Strategy<Req, Ev>: Send + Sync {
    async fn handle(&self, request: Req);
    async fn step(&self) -> Option<VecDeque<Ev>>;
}

/// Drives a shared [`Fleet`] one tick at a time.
#[derive(Debug, Clone)]
pub struct FleetStrategy {
    fleet: Arc<Mutex<Fleet>>,
}

impl FleetStrategy {
    pub fn new(fleet: Arc<Mutex<Fleet>>) -> Self {
        Self { fleet }
    }
}

#[async_trait]
impl Strategy<Request, LiftEvent> for FleetStrategy {
    async fn handle(&self, request: Request) {
        let mut fleet = self.fleet.lock().await;
        fleet.assign(request);
    }

    async fn step(&self) -> Option<VecDeque<LiftEvent>> {
        let mut fleet = self.fleet.lock().await;
        if fleet.is_drained() {
            debug!("fleet drained, nothing to schedule");
            return None;
        }
        Some(fleet.tick().into_iter().collect())
    }
}

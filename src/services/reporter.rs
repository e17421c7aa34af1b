use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::sync::Mutex;
use tower::Service;
use tracing::{debug, info};

use crate::metrics::Metrics;
use crate::types::event::LiftEvent;

/// Terminal service of the pipeline: logs each lift event and folds it into
/// the shared metrics accumulator. Observability only, never control flow.
pub struct ReporterService {
    metrics: Arc<Mutex<Metrics>>,
}

impl ReporterService {
    pub fn new(metrics: Arc<Mutex<Metrics>>) -> Self {
        ReporterService { metrics }
    }
}

impl Service<LiftEvent> for ReporterService {
    type Response = ();
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, event: LiftEvent) -> Self::Future {
        let metrics = Arc::clone(&self.metrics);
        Box::pin(async move {
            match event {
                LiftEvent::Moved { .. } => debug!("{event}"),
                LiftEvent::Serviced { .. } => info!("{event}"),
            }
            metrics.lock().await.record(&event);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::fleet::Fleet;
    use crate::services::scheduler::SchedulerLayer;
    use crate::strategy::FleetStrategy;
    use crate::types::event::Tick;
    use tower::{Layer, Service, ServiceExt};

    // Ticking the full pipeline must account for exactly what the per-lift
    // counters say happened.
    #[tokio::test]
    async fn pipeline_metrics_match_per_lift_counters() {
        let fleet = Arc::new(Mutex::new(Fleet::prepare(&SimConfig::default())));
        let metrics = Arc::new(Mutex::new(Metrics::new()));

        let strategy = FleetStrategy::new(Arc::clone(&fleet));
        let mut svc =
            SchedulerLayer::new(strategy).layer(ReporterService::new(Arc::clone(&metrics)));

        while !fleet.lock().await.is_drained() {
            svc.ready().await.unwrap();
            svc.call(Tick).await.unwrap();
        }

        let metrics = metrics.lock().await;
        let fleet = fleet.lock().await;
        let distance: u64 = fleet
            .lifts()
            .iter()
            .map(|l| u64::from(l.floors_traveled()))
            .sum();
        let serviced: u64 = fleet
            .lifts()
            .iter()
            .map(|l| u64::from(l.serviced_count()))
            .sum();
        assert_eq!(metrics.total_distance(), distance);
        assert_eq!(metrics.serviced_requests(), serviced);
        assert_eq!(serviced, 4);
    }
}

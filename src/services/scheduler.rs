use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::sync::Mutex;
use tower::{Layer, Service};
use tracing::debug;

use crate::strategy::Strategy;
use crate::types::event::{LiftEvent, Tick};
use crate::types::request::Request;

/// Tower service that turns one [`Tick`] into a batch of lift events by
/// stepping the wrapped strategy, then feeds each event to the inner
/// reporting service.
pub struct SchedulerService<S, ST> {
    inner: Arc<Mutex<S>>,
    strategy: ST,
}

impl<S, ST> SchedulerService<S, ST> {
    fn new(inner: S, strategy: ST) -> Self {
        SchedulerService {
            inner: Arc::new(Mutex::new(inner)),
            strategy,
        }
    }
}

pub struct SchedulerLayer<ST> {
    strategy: ST,
}

impl<ST> SchedulerLayer<ST> {
    pub fn new(strategy: ST) -> Self {
        Self { strategy }
    }
}

impl<S, ST> Layer<S> for SchedulerLayer<ST>
where
    ST: Clone,
{
    type Service = SchedulerService<S, ST>;

    fn layer(&self, inner: S) -> Self::Service {
        SchedulerService::new(inner, self.strategy.clone())
    }
}

impl<S, ST> Service<Tick> for SchedulerService<S, ST>
where
    S: Service<LiftEvent, Response = (), Error = anyhow::Error> + Send + 'static,
    S::Future: Send + 'static,
    ST: Clone + Strategy<Request, LiftEvent> + Send + 'static,
{
    type Response = ();
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _tick: Tick) -> Self::Future {
        let inner = self.inner.clone();
        let strategy = self.strategy.clone();

        Box::pin(async move {
            let Some(mut events) = strategy.step().await else {
                debug!("no events scheduled this tick");
                return Ok(());
            };
            while let Some(event) = events.pop_front() {
                inner.lock().await.call(event).await?;
            }
            Ok(())
        })
    }
}

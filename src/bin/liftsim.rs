use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::Mutex;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use liftsim::services::reporter::ReporterService;
use liftsim::services::scheduler::SchedulerLayer;
use liftsim::{Algorithm, Fleet, FleetStrategy, Metrics, SimConfig, Tick, run_batch};

#[derive(Parser, Debug)]
#[command(name = "liftsim", about = "Multi-lift dispatch simulator")]
struct Args {
    /// Input file describing the building and its floor requests.
    input: Option<PathBuf>,

    /// Dispatch policy to run.
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Number of lifts in the fleet.
    #[arg(long)]
    lifts: Option<usize>,

    /// Step budget for the run.
    #[arg(long)]
    steps: Option<u64>,

    /// Drain all requests immediately instead of pacing ticks on a timer.
    #[arg(long)]
    batch: bool,

    /// Tick interval in milliseconds for the paced mode.
    #[arg(long, default_value_t = 200)]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("liftsim=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.input {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(lifts) = args.lifts {
        config.num_lifts = lifts;
    }
    if let Some(steps) = args.steps {
        config.simulation_time = steps;
    }
    info!(
        floors = config.num_floors,
        lifts = config.num_lifts,
        algorithm = %config.algorithm,
        "starting simulation"
    );

    let steps = if args.batch {
        let mut fleet = Fleet::prepare(&config);
        let mut metrics = Metrics::new();
        let steps = run_batch(&mut fleet, &mut metrics, config.simulation_time);
        report(&metrics, &fleet, steps);
        steps
    } else {
        run_paced(&config, args.tick_ms).await?
    };
    info!(steps, "simulation complete");
    Ok(())
}

/// Tick-driven mode: a timer stands in for the animation loop, advancing
/// every lift by one dispatch step per tick through the service pipeline.
async fn run_paced(config: &SimConfig, tick_ms: u64) -> anyhow::Result<u64> {
    let fleet = Arc::new(Mutex::new(Fleet::prepare(config)));
    let metrics = Arc::new(Mutex::new(Metrics::new()));

    let strategy = FleetStrategy::new(Arc::clone(&fleet));
    let mut svc = ServiceBuilder::new()
        .layer(SchedulerLayer::new(strategy))
        .service(ReporterService::new(Arc::clone(&metrics)));

    let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
    let mut steps = 0;
    loop {
        if fleet.lock().await.is_drained() {
            break;
        }
        if steps >= config.simulation_time {
            warn!(
                budget = config.simulation_time,
                "step budget exhausted before the fleet drained"
            );
            break;
        }
        interval.tick().await;
        svc.ready().await?;
        svc.call(Tick).await?;
        steps += 1;
    }

    report(&*metrics.lock().await, &*fleet.lock().await, steps);
    Ok(steps)
}

fn report(metrics: &Metrics, fleet: &Fleet, steps: u64) {
    for lift in fleet.lifts() {
        info!(
            lift = lift.id(),
            floor = lift.current_floor(),
            traveled = lift.floors_traveled(),
            serviced = lift.serviced_count(),
            "final lift state"
        );
    }
    info!(steps, "total simulation time");
    info!(floors = metrics.total_distance(), "total travel distance");
    info!(
        requests = metrics.serviced_requests(),
        "total serviced requests"
    );
    info!(
        requests_per_step = metrics.throughput(steps),
        "throughput"
    );
}

use std::error::Error;
use std::io;

use dotenv::dotenv;
use tracing::{info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::console::CustomerSource;
use crate::config::constant::{MAX_SIMULATED_DISTANCE, SEED, SIMULATED_CUSTOMERS};
use crate::config::{Mode, Settings};
use crate::dispatch::engine::AssignmentEngine;
use crate::domain::types::Customer;
use crate::fixtures::data_generator::generate_random_customers;
use crate::setup::init::{load_fleet, load_roster};
use crate::utils::{print_delivery, print_failure, print_pool_summary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub delivered: usize,
    pub failed: usize,
}

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    // `.env` has to be loaded before the filter reads RUST_LOG.
    dotenv().ok();
    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(io::stderr))
        .try_init()?;
    Ok(())
}

/// Run every customer through the engine, printing one line per customer.
/// Failures are reported and the next customer is served from the unchanged pool.
pub fn dispatch_all<I>(engine: &mut AssignmentEngine, customers: I) -> RunStats
where
    I: IntoIterator<Item = Customer>,
{
    let mut stats = RunStats::default();
    for customer in customers {
        match engine.deliver(&customer) {
            Ok(delivery) => {
                stats.delivered += 1;
                print_delivery(&delivery);
            }
            Err(e) => {
                stats.failed += 1;
                warn!("Delivery for {} failed: {}", customer.name, e);
                print_failure(&customer.name, &e);
            }
        }
    }
    stats
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;
    let settings = Settings::from_env();

    let employees = load_roster(settings.roster_path.as_deref())?;
    let vehicles = load_fleet(settings.fleet_path.as_deref())?;
    let mut engine = AssignmentEngine::with_settings(employees, vehicles, settings.dispatch)?;

    let stats = match settings.mode {
        Mode::Interactive => {
            let span = span!(Level::INFO, "interactive");
            let _guard = span.enter();
            let stdin = io::stdin();
            let source = CustomerSource::new(stdin.lock(), io::stdout());
            dispatch_all(&mut engine, source)
        }
        Mode::Simulate => {
            let span = span!(Level::INFO, "simulate", customers = SIMULATED_CUSTOMERS);
            let _guard = span.enter();
            let customers =
                generate_random_customers(SIMULATED_CUSTOMERS, MAX_SIMULATED_DISTANCE, SEED as u64);
            dispatch_all(&mut engine, customers)
        }
    };

    info!(
        "Session finished: {} delivered, {} failed",
        stats.delivered, stats.failed
    );
    print_pool_summary(engine.pool());

    Ok(())
}

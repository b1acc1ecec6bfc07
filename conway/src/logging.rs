// logging.rs - tracing subscriber setup shared by the front-ends

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::SimulationConfig;

/// Installs a fmt subscriber. `RUST_LOG` wins over the config's level.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init(config: &SimulationConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}

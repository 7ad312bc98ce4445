//! Tracing subscriber setup.
//!
//! Seed units report progress through the `log` macros; `LogTracer`
//! forwards those records into the same tracing subscriber so the whole
//! run shares one output format.

use crate::config::AppConfig;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

pub fn init_subscriber(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = tracing_log::LogTracer::init();

    if config.log_format == "json" {
        let subscriber = Registry::default().with(filter).with(fmt::layer().json());
        tracing::subscriber::set_global_default(subscriber)
            .expect("failed to set global default subscriber");
    } else {
        let subscriber = Registry::default().with(filter).with(fmt::layer());
        tracing::subscriber::set_global_default(subscriber)
            .expect("failed to set global default subscriber");
    }
}

use std::sync::Arc;

use tempcheck_core::thermal::TemperatureMonitor;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Nothing here
/// is mutated after startup, so no synchronization is needed.
#[derive(Clone)]
pub struct AppState {
    /// On-demand temperature evaluator.
    pub monitor: Arc<TemperatureMonitor>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Host identity reported in temperature responses.
    pub hostname: String,
}

impl AppState {
    /// Build the state, capturing the host name once at startup.
    pub fn new(monitor: Arc<TemperatureMonitor>, config: Arc<ServerConfig>) -> Self {
        let hostname = sysinfo::System::host_name().unwrap_or_else(|| "unknown".into());
        Self {
            monitor,
            config,
            hostname,
        }
    }
}

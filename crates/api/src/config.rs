use tempcheck_core::thermal::Thresholds;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local use. Non-numeric
/// values panic at startup with a clear message -- we want
/// misconfiguration to fail fast, not surface mid-request.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8888`).
    pub port: u16,
    /// Classification thresholds handed to the core once at startup.
    pub thresholds: Thresholds,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `8888`    |
    /// | `TEMP_WARNING`         | `70`      |
    /// | `TEMP_CRITICAL`        | `80`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8888".into())
            .parse()
            .expect("PORT must be a valid u16");

        let warning: i64 = std::env::var("TEMP_WARNING")
            .unwrap_or_else(|_| "70".into())
            .parse()
            .expect("TEMP_WARNING must be an integer");

        let critical: i64 = std::env::var("TEMP_CRITICAL")
            .unwrap_or_else(|_| "80".into())
            .parse()
            .expect("TEMP_CRITICAL must be an integer");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            thresholds: Thresholds::new(warning as f64, critical as f64),
            request_timeout_secs,
        }
    }
}

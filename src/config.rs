use clap::Parser;

/// Exporter configuration. Every option can be given as a flag or through
/// the matching environment variable; a `.env` file is loaded before
/// parsing (see `main.rs`).
#[derive(Parser, Debug, Clone)]
#[command(name = "spot-exporter", version, about = "Prometheus exporter for Rackspace Spot")]
pub struct Config {
    /// Long-lived refresh token used for the OAuth token exchange
    #[arg(long, env = "SPOT_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: String,

    /// Organization id, used as the API namespace and the `namespace` label
    #[arg(long, env = "SPOT_ORG_NAMESPACE")]
    pub org_namespace: String,

    /// Base URL of the Spot API
    #[arg(long, env = "SPOT_API_URL", default_value = "https://spot.rackspace.com")]
    pub api_url: String,

    /// Base URL of the auth service
    #[arg(long, env = "SPOT_AUTH_URL", default_value = "https://login.spot.rackspace.com")]
    pub auth_url: String,

    /// Port to serve metrics on
    #[arg(long, env = "SPOT_EXPORTER_PORT", default_value_t = 9090)]
    pub port: u16,

    /// HTTP path the metrics are exposed on
    #[arg(long, env = "SPOT_METRICS_PATH", default_value = "/metrics")]
    pub metrics_path: String,

    /// Seconds between collection passes
    #[arg(long, env = "SPOT_SCRAPE_INTERVAL", default_value_t = 60)]
    pub scrape_interval: u64,
}

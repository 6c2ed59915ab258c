use {
    anyhow::Result,
    clap::Parser,
    dotenv::dotenv,
    log::info,
    rackspace_spot_exporter::{
        api::ApiClient,
        auth::{Credentials, TokenAuthenticator},
        metrics::{MetricsCollector, MetricsExporter, SpotMetrics},
        Config,
    },
    std::{sync::Arc, time::Duration},
};

/// Bound on every outbound request so a hung upstream cannot stall a
/// collection pass indefinitely.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    info!(
        "starting {} v{} for namespace {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.org_namespace
    );

    let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    let authenticator = Arc::new(TokenAuthenticator::new(
        http.clone(),
        Credentials {
            refresh_token: config.refresh_token.clone(),
            auth_base_url: config.auth_url.clone(),
        },
    ));
    let api = ApiClient::new(http, authenticator, config.api_url.clone());

    let metrics = Arc::new(SpotMetrics::new()?);
    let collector = MetricsCollector::new(api, metrics.clone(), config.org_namespace.clone());

    let exporter = MetricsExporter::new(
        collector,
        metrics,
        config.port,
        config.metrics_path.clone(),
        Duration::from_secs(config.scrape_interval),
    );
    exporter.start().await
}

use {
    super::{collector::MetricsCollector, types::SpotMetrics},
    anyhow::Result,
    log::{error, info, warn},
    prometheus::{Encoder, TextEncoder},
    std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    tokio::time::{interval, Duration, MissedTickBehavior},
    warp::{path::FullPath, Filter, Rejection, Reply},
};

/// Single-pass guard owned by the scheduler. A tick that cannot acquire it
/// is skipped entirely; the in-flight pass is never queued behind or
/// cancelled.
#[derive(Default)]
pub struct PassGuard(AtomicBool);

impl PassGuard {
    pub fn try_acquire(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Serves the metrics/health HTTP surface and drives the periodic
/// collection loop.
pub struct MetricsExporter {
    collector: Arc<MetricsCollector>,
    metrics: Arc<SpotMetrics>,
    port: u16,
    metrics_path: String,
    scrape_interval: Duration,
}

impl MetricsExporter {
    pub fn new(
        collector: MetricsCollector,
        metrics: Arc<SpotMetrics>,
        port: u16,
        metrics_path: String,
        scrape_interval: Duration,
    ) -> Self {
        Self {
            collector: Arc::new(collector),
            metrics,
            port,
            metrics_path,
            scrape_interval,
        }
    }

    pub async fn start(self) -> Result<()> {
        let _collection_loop = spawn_collection_loop(self.collector.clone(), self.scrape_interval);

        let routes = routes(self.metrics.clone(), self.metrics_path.clone());
        let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(
            ([0, 0, 0, 0], self.port),
            async {
                let _ = tokio::signal::ctrl_c().await;
                info!("shutdown signal received");
            },
        );

        info!("serving metrics on http://{}{}", addr, self.metrics_path);
        server.await;

        Ok(())
    }
}

/// Spawns the collection loop: one pass immediately at startup, then one
/// per interval. Failures are logged and swallowed; the next tick is the
/// only retry mechanism.
pub fn spawn_collection_loop(
    collector: Arc<MetricsCollector>,
    scrape_interval: Duration,
) -> tokio::task::JoinHandle<()> {
    let guard = Arc::new(PassGuard::default());

    tokio::spawn(async move {
        let mut ticker = interval(scrape_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            if !guard.try_acquire() {
                warn!("previous collection pass still running, skipping tick");
                continue;
            }

            let collector = collector.clone();
            let guard = guard.clone();
            tokio::spawn(async move {
                if let Err(e) = collector.collect().await {
                    error!("{}", e);
                }
                guard.release();
            });
        }
    })
}

fn routes(
    metrics: Arc<SpotMetrics>,
    metrics_path: String,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let want = metrics_path.trim_matches('/').to_string();
    let metrics_route = warp::get()
        .and(warp::path::full())
        .and_then(move |full: FullPath| {
            let metrics = metrics.clone();
            let want = want.clone();
            async move {
                if full.as_str().trim_matches('/') == want {
                    Ok(render_metrics(&metrics))
                } else {
                    Err(warp::reject::not_found())
                }
            }
        })
        .map(|body: String| {
            warp::reply::with_header(body, "Content-Type", "text/plain; version=0.0.4")
        });

    let health = probe_route("health")
        .or(probe_route("healthz"))
        .or(probe_route("ready"))
        .or(probe_route("readyz"));

    let index_path = metrics_path;
    let index = warp::get()
        .and(warp::path::end())
        .map(move || warp::reply::html(status_page(&index_path)));

    health.or(index).or(metrics_route)
}

/// Liveness/readiness endpoint: succeeds whenever the process is up,
/// independent of API reachability.
fn probe_route(
    name: &'static str,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::get()
        .and(warp::path(name))
        .and(warp::path::end())
        .map(|| "OK")
}

/// Text exposition of the exporter's registry plus the process default
/// metrics from the global registry.
fn render_metrics(metrics: &SpotMetrics) -> String {
    let mut families = metrics.registry.gather();
    families.extend(prometheus::gather());

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&families, &mut buffer) {
        error!("failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

fn status_page(metrics_path: &str) -> String {
    format!(
        "<html><head><title>Rackspace Spot Exporter</title></head>\
         <body><h1>Rackspace Spot Exporter</h1>\
         <p>{} v{}</p>\
         <p><a href=\"{}\">Metrics</a></p>\
         </body></html>",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        metrics_path
    )
}

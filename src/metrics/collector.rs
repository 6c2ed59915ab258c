use {
    super::types::SpotMetrics,
    crate::{
        api::{
            types::{CloudSpace, OnDemandNodePool, SpotNodePool},
            ApiClient,
        },
        error::ExporterError,
    },
    log::debug,
    std::sync::Arc,
};

const UNKNOWN: &str = "unknown";

fn label_or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN)
}

/// Runs one collection pass: fetch the three resource lists and rewrite the
/// gauge families from them.
pub struct MetricsCollector {
    api: ApiClient,
    metrics: Arc<SpotMetrics>,
    namespace: String,
}

impl MetricsCollector {
    pub fn new(api: ApiClient, metrics: Arc<SpotMetrics>, namespace: String) -> Self {
        Self {
            api,
            metrics,
            namespace,
        }
    }

    /// Fetches all three families concurrently and updates their gauges.
    /// Any failed fetch aborts the pass before gauges are written; label
    /// combinations from earlier passes are never cleared.
    pub async fn collect(&self) -> Result<(), ExporterError> {
        let (cloudspaces, spot_pools, ondemand_pools) = tokio::try_join!(
            self.api.list_cloudspaces(&self.namespace),
            self.api.list_spotnodepools(&self.namespace),
            self.api.list_ondemandnodepools(&self.namespace),
        )
        .map_err(ExporterError::into_collection)?;

        debug!(
            "collected {} cloudspaces, {} spot pools, {} on-demand pools",
            cloudspaces.len(),
            spot_pools.len(),
            ondemand_pools.len()
        );

        self.record_cloudspaces(&cloudspaces);
        self.record_spotnodepools(&spot_pools);
        self.record_ondemandnodepools(&ondemand_pools);

        Ok(())
    }

    fn record_cloudspaces(&self, cloudspaces: &[CloudSpace]) {
        for cs in cloudspaces {
            let name = label_or_unknown(&cs.metadata.name);
            let region = label_or_unknown(&cs.spec.region);
            self.metrics
                .cloudspace_nodes_total
                .with_label_values(&[self.namespace.as_str(), name, region])
                .set(cs.status.assigned_servers.len() as i64);
        }
    }

    fn record_spotnodepools(&self, pools: &[SpotNodePool]) {
        for pool in pools {
            let name = label_or_unknown(&pool.metadata.name);
            let cloudspace = label_or_unknown(&pool.spec.cloud_space);
            let serverclass = label_or_unknown(&pool.spec.server_class);

            self.metrics
                .spotnodepool_desired
                .with_label_values(&[self.namespace.as_str(), cloudspace, name, serverclass])
                .set(pool.spec.desired.unwrap_or(0));

            let bid_status = label_or_unknown(&pool.status.bid_status);
            self.metrics
                .spotnodepool_won_count
                .with_label_values(&[self.namespace.as_str(), cloudspace, name, serverclass, bid_status])
                .set(pool.status.won_count.unwrap_or(0));
        }
    }

    fn record_ondemandnodepools(&self, pools: &[OnDemandNodePool]) {
        for pool in pools {
            let name = label_or_unknown(&pool.metadata.name);
            let cloudspace = label_or_unknown(&pool.spec.cloud_space);
            let serverclass = label_or_unknown(&pool.spec.server_class);

            self.metrics
                .ondemandnodepool_desired
                .with_label_values(&[self.namespace.as_str(), cloudspace, name, serverclass])
                .set(pool.spec.desired.unwrap_or(0));

            let reserved_status = label_or_unknown(&pool.status.reserved_status);
            self.metrics
                .ondemandnodepool_reserved_count
                .with_label_values(&[
                    self.namespace.as_str(),
                    cloudspace,
                    name,
                    serverclass,
                    reserved_status,
                ])
                .set(pool.status.reserved_count.unwrap_or(0));
        }
    }
}

use prometheus::{IntGaugeVec, Opts, Registry};

/// The exporter's gauge families, registered once into an owned registry.
///
/// Each family is keyed by a fixed label name set. `collect()` only ever
/// sets values for label combinations seen in the current pass; earlier
/// combinations keep their last value until the process restarts.
pub struct SpotMetrics {
    pub registry: Registry,

    pub cloudspace_nodes_total: IntGaugeVec,
    pub spotnodepool_desired: IntGaugeVec,
    pub spotnodepool_won_count: IntGaugeVec,
    pub ondemandnodepool_desired: IntGaugeVec,
    pub ondemandnodepool_reserved_count: IntGaugeVec,
}

impl SpotMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let cloudspace_nodes_total = IntGaugeVec::new(
            Opts::new(
                "rackspace_spot_cloudspace_nodes_total",
                "Number of servers assigned to a cloudspace",
            ),
            &["namespace", "cloudspace", "cloudspace_region"],
        )?;

        let spotnodepool_desired = IntGaugeVec::new(
            Opts::new(
                "rackspace_spot_spotnodepool_desired",
                "Desired number of nodes in a spot node pool",
            ),
            &["namespace", "cloudspace", "nodepool", "serverclass"],
        )?;

        let spotnodepool_won_count = IntGaugeVec::new(
            Opts::new(
                "rackspace_spot_spotnodepool_won_count",
                "Number of nodes won at auction for a spot node pool",
            ),
            &["namespace", "cloudspace", "nodepool", "serverclass", "bid_status"],
        )?;

        let ondemandnodepool_desired = IntGaugeVec::new(
            Opts::new(
                "rackspace_spot_ondemandnodepool_desired",
                "Desired number of nodes in an on-demand node pool",
            ),
            &["namespace", "cloudspace", "nodepool", "serverclass"],
        )?;

        let ondemandnodepool_reserved_count = IntGaugeVec::new(
            Opts::new(
                "rackspace_spot_ondemandnodepool_reserved_count",
                "Number of nodes reserved for an on-demand node pool",
            ),
            &["namespace", "cloudspace", "nodepool", "serverclass", "reserved_status"],
        )?;

        registry.register(Box::new(cloudspace_nodes_total.clone()))?;
        registry.register(Box::new(spotnodepool_desired.clone()))?;
        registry.register(Box::new(spotnodepool_won_count.clone()))?;
        registry.register(Box::new(ondemandnodepool_desired.clone()))?;
        registry.register(Box::new(ondemandnodepool_reserved_count.clone()))?;

        Ok(Self {
            registry,
            cloudspace_nodes_total,
            spotnodepool_desired,
            spotnodepool_won_count,
            ondemandnodepool_desired,
            ondemandnodepool_reserved_count,
        })
    }
}

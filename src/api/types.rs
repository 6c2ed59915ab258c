//! Loosely-typed records for the Spot API payloads.
//!
//! Every field the provider may omit is optional or container-defaulted;
//! absence never fails deserialization. Defaults for labels and values are
//! applied at the metrics mapping boundary, not here.

use {
    serde::Deserialize,
    std::collections::HashMap,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResourceList<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObjectMeta {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CloudSpace {
    pub metadata: ObjectMeta,
    pub spec: CloudSpaceSpec,
    pub status: CloudSpaceStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CloudSpaceSpec {
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudSpaceStatus {
    /// Map of server name to assignment details; only the key count matters.
    pub assigned_servers: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpotNodePool {
    pub metadata: ObjectMeta,
    pub spec: NodePoolSpec,
    pub status: SpotNodePoolStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodePoolSpec {
    pub cloud_space: Option<String>,
    pub server_class: Option<String>,
    pub desired: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpotNodePoolStatus {
    pub won_count: Option<i64>,
    pub bid_status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OnDemandNodePool {
    pub metadata: ObjectMeta,
    pub spec: NodePoolSpec,
    pub status: OnDemandNodePoolStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnDemandNodePoolStatus {
    pub reserved_count: Option<i64>,
    pub reserved_status: Option<String>,
}

//! Prometheus exporter for Rackspace Spot.
//!
//! Polls the Spot API for cloudspaces, spot node pools, and on-demand node
//! pools in one organization namespace, and republishes that state as
//! labeled gauges on an HTTP endpoint.
//!
//! - [`auth`] - OAuth refresh-token exchange with proactive renewal
//! - [`api`] - authenticated read-only client over the list endpoints
//! - [`metrics`] - gauge families, the collection pass, and the HTTP surface
//! - [`config`] - flag/env configuration
//! - [`error`] - error types

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod metrics;

pub use config::Config;
pub use error::ExporterError;

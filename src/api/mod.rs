pub mod types;

use {
    crate::{auth::TokenAuthenticator, error::ExporterError},
    log::debug,
    reqwest::Client,
    serde::de::DeserializeOwned,
    std::sync::Arc,
    self::types::{CloudSpace, OnDemandNodePool, ResourceList, SpotNodePool},
};

const API_GROUP: &str = "apis/ngpc.rxt.io/v1";

/// Read-only client over the Spot collection endpoints. Obtains a bearer
/// token from the authenticator before every request.
pub struct ApiClient {
    http: Client,
    authenticator: Arc<TokenAuthenticator>,
    api_base_url: String,
}

impl ApiClient {
    pub fn new(http: Client, authenticator: Arc<TokenAuthenticator>, api_base_url: String) -> Self {
        Self {
            http,
            authenticator,
            api_base_url,
        }
    }

    pub async fn list_cloudspaces(
        &self,
        namespace: &str,
    ) -> Result<Vec<CloudSpace>, ExporterError> {
        self.list(namespace, "cloudspaces").await
    }

    pub async fn list_spotnodepools(
        &self,
        namespace: &str,
    ) -> Result<Vec<SpotNodePool>, ExporterError> {
        self.list(namespace, "spotnodepools").await
    }

    pub async fn list_ondemandnodepools(
        &self,
        namespace: &str,
    ) -> Result<Vec<OnDemandNodePool>, ExporterError> {
        self.list(namespace, "ondemandnodepools").await
    }

    async fn list<T: DeserializeOwned + Default>(
        &self,
        namespace: &str,
        plural: &str,
    ) -> Result<Vec<T>, ExporterError> {
        let token = self.authenticator.ensure_valid_token().await?;
        let path = format!("/{}/namespaces/{}/{}", API_GROUP, namespace, plural);
        let url = format!("{}{}", self.api_base_url, path);

        debug!("GET {}", path);
        let response = self.http.get(&url).bearer_auth(&token).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExporterError::Api {
                path,
                status: status.as_u16(),
                body: decode_error_body(&body),
            });
        }

        let list: ResourceList<T> = response.json().await?;
        Ok(list.items)
    }
}

/// Best-effort decode of an API error body: prefer the `message` field of a
/// Kubernetes-style Status object, fall back to the raw text.
fn decode_error_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

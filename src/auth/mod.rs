use {
    crate::error::ExporterError,
    log::{debug, info},
    reqwest::Client,
    serde::Deserialize,
    std::time::{Duration, Instant},
    tokio::sync::Mutex,
};

/// Fixed public client identifier of the Spot console application.
pub const SPOT_CLIENT_ID: &str = "mwG3lUMV8KyeMqHe4fJ5Bb3nM1vBvRNa";

/// A cached token is treated as absent once within this window of expiry.
const RENEWAL_SKEW: Duration = Duration::from_secs(60);

/// Immutable inputs for the token exchange.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub refresh_token: String,
    pub auth_base_url: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    id_token: String,
    expires_in: u64,
}

struct TokenState {
    bearer: String,
    expires_at: Instant,
}

/// Exchanges a long-lived refresh token for a short-lived bearer token and
/// caches it until shortly before expiry.
///
/// The upstream provider expects the `id_token` from the exchange as the
/// bearer credential, not the `access_token`. That quirk is load-bearing.
pub struct TokenAuthenticator {
    http: Client,
    credentials: Credentials,
    state: Mutex<Option<TokenState>>,
}

impl TokenAuthenticator {
    pub fn new(http: Client, credentials: Credentials) -> Self {
        Self {
            http,
            credentials,
            state: Mutex::new(None),
        }
    }

    /// Returns a usable bearer token, refreshing it first if the cached one
    /// is missing or inside the renewal window.
    ///
    /// The state lock is held across the exchange, so concurrent callers
    /// share a single in-flight refresh.
    pub async fn ensure_valid_token(&self) -> Result<String, ExporterError> {
        let mut state = self.state.lock().await;

        if let Some(cached) = state.as_ref() {
            if Instant::now() + RENEWAL_SKEW < cached.expires_at {
                debug!("reusing cached bearer token");
                return Ok(cached.bearer.clone());
            }
        }

        let fresh = self.exchange_refresh_token().await?;
        info!(
            "obtained new bearer token, valid for {}s",
            fresh.expires_in
        );

        let bearer = fresh.id_token.clone();
        *state = Some(TokenState {
            bearer: fresh.id_token,
            expires_at: Instant::now() + Duration::from_secs(fresh.expires_in),
        });

        Ok(bearer)
    }

    async fn exchange_refresh_token(&self) -> Result<TokenResponse, ExporterError> {
        let url = format!("{}/oauth/token", self.credentials.auth_base_url);
        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", SPOT_CLIENT_ID),
            ("refresh_token", self.credentials.refresh_token.as_str()),
        ];

        let response = self.http.post(&url).form(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExporterError::Authentication {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

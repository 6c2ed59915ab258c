use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExporterError {
    /// Non-2xx response from the OAuth token endpoint. Fatal for the
    /// in-flight caller; never retried internally.
    #[error("Failed to authenticate: HTTP {status}: {body}")]
    Authentication { status: u16, body: String },

    /// Non-2xx response from a list endpoint, body decoded best-effort.
    #[error("API request to {path} failed: HTTP {status}: {body}")]
    Api {
        path: String,
        status: u16,
        body: String,
    },

    /// A collection pass failed; wraps whichever error stopped the pass.
    #[error("collection pass failed: {0}")]
    Collection(#[source] Box<ExporterError>),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ExporterError {
    pub(crate) fn into_collection(self) -> ExporterError {
        ExporterError::Collection(Box::new(self))
    }
}

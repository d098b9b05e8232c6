use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Unsupported HTTP method '{value}'. Use GET, POST, PUT, or DELETE.")]
    UnsupportedMethod { value: String },
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Base URL '{url}' must use http or https.")]
    UnsupportedScheme { url: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to decode JSON from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::debug;

use crate::error::HttpError;

use super::{ApiRequest, ApiResponse, ApiTransport, HttpMethod};

pub const USER_AGENT: &str = concat!("timeline-e2e/", env!("CARGO_PKG_VERSION"));

const JSON_MIME: &str = "application/json";

/// reqwest-backed transport rooted at a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for `base_url`. A trailing `/` is dropped so paths
    /// can be appended verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is not an absolute http(s) URL or the
    /// underlying client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        let parsed = Url::parse(&base_url).map_err(|err| HttpError::InvalidBaseUrl {
            url: base_url.clone(),
            source: err,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HttpError::UnsupportedScheme { url: base_url });
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| HttpError::BuildClient { source: err })?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request given the verb by name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::UnsupportedMethod`] before any I/O when `method`
    /// is not GET/POST/PUT/DELETE, otherwise whatever [`ApiTransport::send`]
    /// returns.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        query: &[(&str, String)],
    ) -> Result<ApiResponse, HttpError> {
        let method: HttpMethod = method.parse()?;
        let mut request = ApiRequest::new(method, path);
        for (key, value) in query {
            request = request.with_query(key, value.as_str());
        }
        if let Some(body) = body {
            request = request.with_body(body);
        }
        self.send(request).await
    }
}

#[async_trait]
impl ApiTransport for ApiClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, HttpError> {
        let url = self.endpoint(&request.path);
        let method = request.method;
        debug!("{} {}", method, url);

        let mut builder = self.client.request(method.to_reqwest(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| HttpError::Transport {
            method: method.as_str(),
            url: url.clone(),
            source: err,
        })?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|err| HttpError::Transport {
            method: method.as_str(),
            url,
            source: err,
        })?;

        Ok(ApiResponse::new(request.path, status, body.to_vec()))
    }
}

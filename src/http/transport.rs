use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HttpError;

use super::HttpMethod;

/// A request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    #[must_use]
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Put, path).with_body(body)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    /// Bodies are only kept for POST and PUT.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        if self.method.accepts_body() {
            self.body = Some(body);
        }
        self
    }
}

/// Status code plus the raw body of a completed exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    path: String,
    status: u16,
    body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(path: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not valid JSON.
    pub fn json(&self) -> Result<Value, HttpError> {
        self.json_as()
    }

    /// Parses the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error when the body does not deserialize into `T`.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_slice(&self.body).map_err(|err| HttpError::Decode {
            path: self.path.clone(),
            source: err,
        })
    }
}

/// Sends requests to the API under test.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends one request and returns the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error when the exchange cannot complete (connect failure,
    /// timeout, DNS, or a broken body stream).
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, HttpError>;
}

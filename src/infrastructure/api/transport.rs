use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::domain::ConsoleError;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
pub const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One outbound backend call, independent of the transport that carries it
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Resource path below the configured base URL, e.g. `/pipelines`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Correlation identifier, freshly generated per call by the client
    pub request_id: String,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            body: Some(body),
            ..Self::new(Method::Post, path)
        }
    }

    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            body: Some(body),
            ..Self::new(Method::Put, path)
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            request_id: String::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a query pair only when a value is present; absent filters are
    /// omitted from the request rather than sent empty.
    pub fn with_optional_query(
        mut self,
        key: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> Self {
        if let Some(value) = value {
            self.query.push((key.into(), value.into()));
        }
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }
}

/// Trait for the HTTP boundary (for mocking)
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Issue the request and return the parsed JSON body.
    ///
    /// Any HTTP response with a well-formed JSON body resolves `Ok`,
    /// including error statuses - the envelope carries the failure. Only
    /// transport failures (no response, timeout, unparseable body) error.
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, ConsoleError>;
}

/// Real transport backed by reqwest, with base URL, default headers and a
/// fixed 30-second timeout bound at construction
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl AsRef<str>,
    ) -> Result<Self, ConsoleError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(api_key.as_ref())
                .map_err(|e| ConsoleError::configuration(format!("Invalid API key: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                ConsoleError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, ConsoleError> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, &url)
            .header(REQUEST_ID_HEADER, &request.request_id);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ConsoleError::Timeout
            } else {
                ConsoleError::transport(format!("Request failed: {}", e))
            }
        })?;

        response
            .json()
            .await
            .map_err(|e| ConsoleError::decode(format!("Failed to parse response body: {}", e)))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Scripted transport that records every request it receives
    #[derive(Debug, Default)]
    pub struct MockTransport {
        responses: RwLock<HashMap<String, serde_json::Value>>,
        errors: RwLock<HashMap<String, String>>,
        requests: RwLock<Vec<ApiRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(self, path: impl Into<String>, response: serde_json::Value) -> Self {
            self.responses
                .write()
                .unwrap()
                .insert(path.into(), response);
            self
        }

        pub fn with_error(self, path: impl Into<String>, error: impl Into<String>) -> Self {
            self.errors.write().unwrap().insert(path.into(), error.into());
            self
        }

        pub fn recorded_requests(&self) -> Vec<ApiRequest> {
            self.requests.read().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, ConsoleError> {
            let path = request.path.clone();
            self.requests.write().unwrap().push(request);

            if let Some(error) = self.errors.read().unwrap().get(&path) {
                return Err(ConsoleError::transport(error));
            }

            self.responses
                .read()
                .unwrap()
                .get(&path)
                .cloned()
                .ok_or_else(|| ConsoleError::transport(format!("No mock response for {}", path)))
        }
    }
}

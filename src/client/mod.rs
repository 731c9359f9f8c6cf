pub mod endpoint;
pub mod method;
pub mod response;

pub use endpoint::Endpoint;
pub use method::HttpMethod;
pub use response::ResponseSnapshot;

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::HarnessConfig;
use crate::error::HarnessError;

/// Header carrying the service API key, when one is configured.
const API_KEY_HEADER: &str = "x-api-key";

/// Thin adapter over `reqwest` bound to a single base URL.
///
/// Bodies are always sent `application/x-www-form-urlencoded`; the demo
/// service parses form fields, not JSON documents. Every call is a real
/// network round trip and nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &HarnessConfig) -> Result<Self, HarnessError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| HarnessError::Config(format!("invalid API key header value: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| HarnessError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the request described by `endpoint` and decode the response.
    pub async fn send(&self, endpoint: &Endpoint) -> Result<ResponseSnapshot, HarnessError> {
        let url = endpoint.url(&self.base_url);
        let network_error = |source: reqwest::Error| HarnessError::Network {
            method: endpoint.method.to_string(),
            url: url.clone(),
            source,
        };

        let mut req = self.http.request(endpoint.method.into(), &url);
        if !endpoint.query.is_empty() {
            req = req.query(&endpoint.query);
        }
        if !endpoint.form.is_empty() {
            req = req.form(&endpoint.form);
        }

        let started = Instant::now();
        let response = req.send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(network_error)?;

        tracing::debug!(
            method = %endpoint.method,
            url = %url,
            status,
            size_bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );

        ResponseSnapshot::from_parts(status, headers, &bytes)
    }

    /// Build and send one request from borrowed pairs.
    pub async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<ResponseSnapshot, HarnessError> {
        let endpoint = Endpoint::new(method, path).with_query(query).with_form(form);
        self.send(&endpoint).await
    }

    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<ResponseSnapshot, HarnessError> {
        self.call(HttpMethod::Get, path, query, form).await
    }

    pub async fn post(
        &self,
        path: &str,
        query: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<ResponseSnapshot, HarnessError> {
        self.call(HttpMethod::Post, path, query, form).await
    }

    pub async fn put(
        &self,
        path: &str,
        query: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<ResponseSnapshot, HarnessError> {
        self.call(HttpMethod::Put, path, query, form).await
    }

    pub async fn patch(
        &self,
        path: &str,
        query: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<ResponseSnapshot, HarnessError> {
        self.call(HttpMethod::Patch, path, query, form).await
    }

    pub async fn delete(
        &self,
        path: &str,
        query: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<ResponseSnapshot, HarnessError> {
        self.call(HttpMethod::Delete, path, query, form).await
    }
}

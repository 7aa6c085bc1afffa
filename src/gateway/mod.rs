mod endpoints;

pub use endpoints::Resource;

use crate::{Error, Result};
use reqwest::{Method, StatusCode, header};
use serde_json::Value;
use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, warn};

/// JSON-over-HTTP wrapper for one service origin.
///
/// Performs a single request under a bounded wait and normalizes every
/// failure into one [`Error`] classification. No retries, no caching.
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    // Content hashes of mutations currently on the wire.
    in_flight: Arc<Mutex<HashSet<u64>>>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one request and returns the parsed JSON body, or `None` for a
    /// `204 No Content` response. The body is returned as-is; callers own
    /// schema interpretation.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        // Identical mutations may not overlap; a rapid double invocation
        // collapses to one network call. Reads are never guarded.
        let _permit = if method == Method::GET {
            None
        } else {
            Some(self.claim_in_flight(&method, &url, body)?)
        };

        let mut builder = self.client.request(method, &url).timeout(self.timeout);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify_transport(&e, &url))?;
        let status = response.status();
        debug!("Response {} from {}", status, url);

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !status.is_success() {
            let message = match response.json::<Value>().await {
                Ok(body) => extract_error_message(&body)
                    .unwrap_or_else(|| format!("HTTP Error {}", status.as_u16())),
                Err(_) => format!("HTTP Error {}", status.as_u16()),
            };
            warn!("Error {} from {}: {}", status, url, message);
            return Err(Error::http(status.as_u16(), message));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("application/json") {
            let preview: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(200)
                .collect();
            warn!("Non-JSON response from {}: {}", url, preview);
            return Err(Error::invalid_response("non-JSON response from server"));
        }

        let data = response
            .json::<Value>()
            .await
            .map_err(|_| Error::invalid_response("malformed JSON body"))?;
        Ok(Some(data))
    }

    /// GET expecting a JSON body.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None)
            .await?
            .ok_or_else(|| Error::invalid_response("expected a body, got no content"))
    }

    /// POST with a JSON body, expecting a JSON body back.
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, path, Some(body))
            .await?
            .ok_or_else(|| Error::invalid_response("expected a body, got no content"))
    }

    /// PUT with a JSON body, expecting a JSON body back.
    pub async fn put_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::PUT, path, Some(body))
            .await?
            .ok_or_else(|| Error::invalid_response("expected a body, got no content"))
    }

    /// DELETE, tolerating either 204 or a JSON body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, None).await.map(|_| ())
    }

    fn claim_in_flight(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<InFlightPermit> {
        let mut hasher = DefaultHasher::new();
        method.as_str().hash(&mut hasher);
        url.hash(&mut hasher);
        if let Some(body) = body {
            body.to_string().hash(&mut hasher);
        }
        let key = hasher.finish();

        let mut in_flight = lock_set(&self.in_flight);
        if !in_flight.insert(key) {
            warn!("Duplicate mutation suppressed: {} {}", method, url);
            return Err(Error::DuplicateRequest(url.to_string()));
        }

        Ok(InFlightPermit {
            set: Arc::clone(&self.in_flight),
            key,
        })
    }
}

/// Releases the mutation key when the request completes or is dropped.
struct InFlightPermit {
    set: Arc<Mutex<HashSet<u64>>>,
    key: u64,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        lock_set(&self.set).remove(&self.key);
    }
}

fn lock_set(set: &Mutex<HashSet<u64>>) -> MutexGuard<'_, HashSet<u64>> {
    match set.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn classify_transport(err: &reqwest::Error, url: &str) -> Error {
    if err.is_timeout() {
        warn!("Request timeout for {}", url);
        Error::Timeout(url.to_string())
    } else {
        warn!("Request failed for {}: {}", url, err);
        Error::Unreachable(url.to_string())
    }
}

fn extract_error_message(body: &Value) -> Option<String> {
    ["error", "message", "detail"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str).map(str::to_string))
}

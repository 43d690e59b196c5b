//! Request dispatcher for the ManyChat API.
//!
//! Low-level HTTP layer that owns the bearer token and base URL, issues
//! GET/POST requests and decodes the vendor's JSON envelope. The fluent
//! namespace accessors in [`crate::fb`] all forward here.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::{ManyChatError, Result};

/// Production API base URL.
pub const API_URL: &str = "https://api.manychat.com";

const USER_AGENT: &str = concat!("manychat/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout, fixed at construction.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP verb used for an API method.
///
/// The vendor API only ever uses these two; using an enum instead of a raw
/// request-type constant makes an unknown verb unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Method arguments, keyed by the vendor's parameter names.
///
/// `serde_json` is built with `preserve_order`, so GET query strings keep
/// the insertion order of keys.
pub type Params = serde_json::Map<String, Value>;

/// A decoded API response envelope: `{"status": "success", ...payload}`.
pub type ApiResponse = serde_json::Map<String, Value>;

/// Low-level ManyChat API dispatcher.
///
/// Holds the bearer token and base URL and performs one independent
/// request/response cycle per call. No retries, no caching.
///
/// Cheaply cloneable; clones share the same connection pool and token, so a
/// [`set_token`](BaseApi::set_token) through any clone is visible to all of
/// them on their next call.
#[derive(Clone)]
pub struct BaseApi {
    inner: Arc<ApiInner>,
}

struct ApiInner {
    http: Client,
    base_url: Url,
    token: RwLock<String>,
}

impl std::fmt::Debug for BaseApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseApi")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl BaseApi {
    /// Create a dispatcher with the provided token and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so Url::join keeps any path prefix
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ManyChatError::Config(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(ApiInner {
                http,
                base_url,
                token: RwLock::new(token.to_string()),
            }),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the current API token.
    pub fn token(&self) -> String {
        self.inner
            .token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Replace the API token. The next call through any clone of this
    /// dispatcher sends the new bearer header.
    pub fn set_token(&self, token: &str) {
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(|e| e.into_inner()) = token.to_string();
    }

    /// Call the API method at `path` with `args` and HTTP verb `method`.
    ///
    /// `path` is the slash-joined method address, e.g. `/fb/page/getInfo`.
    /// GET arguments go into the query string in insertion order; POST
    /// arguments are sent as a JSON body.
    ///
    /// # Errors
    ///
    /// * [`ManyChatError::Transport`] on connection-level failure
    /// * [`ManyChatError::NotFound`] on HTTP 404 (body is not parsed)
    /// * [`ManyChatError::Status`] on any other non-2xx status
    /// * [`ManyChatError::Decode`] if the 2xx body is not a JSON object
    /// * [`ManyChatError::CallFailed`] if the envelope status is not
    ///   `"success"`, carrying the vendor `message` when present
    #[tracing::instrument(skip(self, args))]
    pub async fn call_method(
        &self,
        path: &str,
        args: &Params,
        method: Method,
    ) -> Result<ApiResponse> {
        self.call_method_with_headers(path, args, method, HeaderMap::new())
            .await
    }

    /// Like [`call_method`](BaseApi::call_method), with extra per-call
    /// headers. On a key conflict with the default headers (including
    /// `Authorization`), the per-call header wins.
    #[tracing::instrument(skip(self, args, headers))]
    pub async fn call_method_with_headers(
        &self,
        path: &str,
        args: &Params,
        method: Method,
        headers: HeaderMap,
    ) -> Result<ApiResponse> {
        let url = self.inner.base_url.join(path.trim_start_matches('/'))?;

        let request = match method {
            Method::Get => {
                let mut url = url;
                if !args.is_empty() {
                    url.set_query(Some(&query_string(args)));
                }
                self.inner.http.get(url)
            }
            Method::Post => self.inner.http.post(url).json(args),
        };

        let response = request
            .bearer_auth(self.token())
            .headers(headers)
            .send()
            .await
            .map_err(ManyChatError::Transport)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ManyChatError::NotFound {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ManyChatError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(ManyChatError::Transport)?;
        Self::decode_envelope(path, &body)
    }

    /// Parse the response body and check the vendor's `status` field.
    ///
    /// A body that is valid JSON but not an object is as malformed as
    /// invalid JSON, so both surface as `Decode`.
    fn decode_envelope(path: &str, body: &str) -> Result<ApiResponse> {
        let envelope: ApiResponse =
            serde_json::from_str(body).map_err(|source| ManyChatError::Decode {
                path: path.to_string(),
                source,
            })?;

        let succeeded = envelope
            .get("status")
            .and_then(Value::as_str)
            .map(|s| s == "success")
            .unwrap_or(false);
        if !succeeded {
            let message = envelope
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Err(ManyChatError::CallFailed {
                path: path.to_string(),
                message,
            });
        }

        Ok(envelope)
    }
}

/// Encode GET arguments as a query string, keeping insertion order.
///
/// String values are encoded verbatim; other JSON values use their compact
/// JSON rendering (`1`, `true`, ...).
fn query_string(args: &Params) -> String {
    let mut pairs = Vec::with_capacity(args.len());
    for (key, value) in args {
        let rendered = match value {
            Value::String(s) => urlencoding::encode(s).into_owned(),
            other => urlencoding::encode(&other.to_string()).into_owned(),
        };
        pairs.push(format!("{}={}", urlencoding::encode(key), rendered));
    }
    pairs.join("&")
}

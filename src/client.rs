//! Top-level ManyChat client.
//!
//! Construct one [`ManyChat`] per token and pass it (or clones of it) to
//! whatever needs API access. There is no global instance.

use crate::api::{BaseApi, API_URL};
use crate::error::Result;
use crate::fb::Fb;

/// ManyChat API client.
///
/// Holds the dispatcher and the eagerly built `/fb` namespace tree.
/// Cheaply cloneable; clones share the connection pool and token.
///
/// # Example
///
/// ```no_run
/// use manychat::ManyChat;
///
/// # async fn example() -> manychat::Result<()> {
/// let client = ManyChat::new("your-api-token")?;
/// let info = client.fb.page.get_info().await?;
/// println!("page info: {:?}", info.get("data"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ManyChat {
    api: BaseApi,
    /// The `/fb` API namespace.
    pub fb: Fb,
}

impl ManyChat {
    /// Create a client for the production API with the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, API_URL)
    }

    /// Create a client against a non-production base URL (staging, mock
    /// server in tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let api = BaseApi::new(token, base_url)?;
        Ok(Self {
            fb: Fb::new(api.clone()),
            api,
        })
    }

    /// Get the current API token.
    pub fn token(&self) -> String {
        self.api.token()
    }

    /// Replace the API token; the next call through any namespace accessor
    /// sends the new bearer header.
    pub fn set_token(&self, token: &str) {
        self.api.set_token(token);
    }

    /// The underlying dispatcher, for calling endpoints that have no
    /// declared accessor.
    pub fn api(&self) -> &BaseApi {
        &self.api
    }
}

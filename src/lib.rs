//! ManyChat API client library.
//!
//! A Rust library for the ManyChat REST API. The vendor's namespace tree is
//! mirrored as a fluent accessor surface: `client.fb.page.get_info()` issues
//! `GET /fb/page/getInfo` with bearer-token auth and returns the decoded
//! JSON envelope.
//!
//! # Quick Start
//!
//! ```no_run
//! use manychat::ManyChat;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> manychat::Result<()> {
//!     let client = ManyChat::new("your-api-token")?;
//!
//!     // Page-level data
//!     let info = client.fb.page.get_info().await?;
//!     println!("page: {:?}", info.get("data"));
//!
//!     // Tag a subscriber
//!     client.fb.subscriber.add_tag_by_name(12345, "vip").await?;
//!
//!     // Push content
//!     let data = json!({
//!         "version": "v2",
//!         "content": { "messages": [{ "type": "text", "text": "hello" }] }
//!     });
//!     client.fb.sending.send_content(12345, data, "ACCOUNT_UPDATE").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Two layers:
//!
//! - [`BaseApi`] — the request dispatcher. Owns the token and base URL,
//!   issues GET/POST, decodes the `{"status": ...}` envelope and maps
//!   failures onto [`ManyChatError`].
//! - [`ApiStructure`] — path accessor nodes. Each node knows its name and
//!   parent; invoking a method joins the chain into `/fb/page/getInfo` style
//!   paths. The documented namespaces are declared statically on
//!   [`ManyChat::fb`]; undeclared endpoints stay reachable through
//!   [`ApiStructure::child`].
//!
//! Calls are plain request/response cycles: no retries, no caching, no rate
//! limiting. Callers own their concurrency limits against the vendor's
//! rate limits.

mod api;
mod client;
mod error;
mod structure;

pub mod fb;

// Re-export core types
pub use api::{ApiResponse, BaseApi, Method, Params, API_URL};
pub use client::ManyChat;
pub use error::{ManyChatError, Result};
pub use structure::ApiStructure;

// Re-export namespace accessors
pub use fb::{Fb, Page, Sending, Subscriber};

//! The `/fb` namespace of the ManyChat API.
//!
//! Mirrors the vendor's namespace tree as statically declared accessors:
//! `fb.page`, `fb.sending` and `fb.subscriber`, each exposing one method per
//! documented endpoint. The tree is built once, eagerly, when the client is
//! constructed, with every node wired to the same dispatcher.

mod page;
mod sending;
mod subscriber;

pub use page::Page;
pub use sending::Sending;
pub use subscriber::Subscriber;

use serde_json::Value;

use crate::api::{BaseApi, Params};
use crate::structure::ApiStructure;

/// Root of the `/fb` API namespace.
#[derive(Debug, Clone)]
pub struct Fb {
    node: ApiStructure,
    /// `/fb/page` endpoints.
    pub page: Page,
    /// `/fb/sending` endpoints.
    pub sending: Sending,
    /// `/fb/subscriber` endpoints.
    pub subscriber: Subscriber,
}

impl Fb {
    pub(crate) fn new(api: BaseApi) -> Self {
        let node = ApiStructure::root("fb", api);
        Self {
            page: Page::new(&node),
            sending: Sending::new(&node),
            subscriber: Subscriber::new(&node),
            node,
        }
    }

    /// Accessor for an undeclared child namespace under `/fb`, for vendor
    /// endpoints that have no typed wrapper yet.
    pub fn child(&self, name: &str) -> ApiStructure {
        self.node.child(name)
    }
}

/// Assemble method arguments from (name, value) pairs, keeping order.
pub(crate) fn params<const N: usize>(entries: [(&str, Value); N]) -> Params {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

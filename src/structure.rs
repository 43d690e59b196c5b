//! Path accessor nodes mirroring the vendor's API namespace.
//!
//! Each node remembers its name and its parent; invoking a method on a node
//! builds the slash-joined path from the root down to the method name and
//! forwards it to the dispatcher. The documented namespaces (`fb.page`,
//! `fb.sending`, `fb.subscriber`) are declared statically in [`crate::fb`];
//! this type also lets callers reach vendor endpoints that have no declared
//! wrapper yet, via [`child`](ApiStructure::child).

use std::sync::Arc;

use crate::api::{ApiResponse, BaseApi, Method, Params};
use crate::error::Result;

/// One node of the API namespace tree.
///
/// Immutable after construction; `child` returns a fresh node rather than
/// mutating the tree. Cloning is cheap and shares the underlying node.
#[derive(Debug, Clone)]
pub struct ApiStructure {
    inner: Arc<Node>,
}

#[derive(Debug)]
struct Node {
    name: String,
    api: BaseApi,
    parent: Option<ApiStructure>,
}

impl ApiStructure {
    /// Create a root node named `name`, wired to `api`.
    pub(crate) fn root(name: &str, api: BaseApi) -> Self {
        Self {
            inner: Arc::new(Node {
                name: name.to_string(),
                api,
                parent: None,
            }),
        }
    }

    /// Create a child node named `name`, parented to this node and wired to
    /// the same dispatcher. Pure: the receiver is unchanged.
    pub fn child(&self, name: &str) -> Self {
        Self {
            inner: Arc::new(Node {
                name: name.to_string(),
                api: self.inner.api.clone(),
                parent: Some(self.clone()),
            }),
        }
    }

    /// This node's name (one path segment).
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub(crate) fn api(&self) -> &BaseApi {
        &self.inner.api
    }

    /// Full method address for `method` under this node, e.g. a node `page`
    /// under root `fb` yields `/fb/page/getInfo` for method `getInfo`.
    pub fn method_path(&self, method: &str) -> String {
        let mut segments = vec![method.to_string()];
        let mut node = Some(self);
        while let Some(current) = node {
            segments.push(current.inner.name.clone());
            node = current.inner.parent.as_ref();
        }
        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    /// Invoke the vendor method `method` on this node with `args` and HTTP
    /// verb `verb`, returning the dispatcher's result unchanged.
    ///
    /// An empty `args` map is valid: the call is issued with no query string
    /// (GET) or an empty JSON object body (POST).
    pub async fn invoke(
        &self,
        method: &str,
        args: Params,
        verb: Method,
    ) -> Result<ApiResponse> {
        let path = self.method_path(method);
        self.inner.api.call_method(&path, &args, verb).await
    }
}

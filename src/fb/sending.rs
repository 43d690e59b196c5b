//! `/fb/sending` endpoints: pushing content and flows to subscribers.

use serde_json::{json, Value};

use crate::api::{ApiResponse, Method};
use crate::error::Result;
use crate::structure::ApiStructure;

use super::params;

/// Accessor for the `/fb/sending` namespace.
#[derive(Debug, Clone)]
pub struct Sending {
    node: ApiStructure,
}

impl Sending {
    pub(crate) fn new(parent: &ApiStructure) -> Self {
        Self {
            node: parent.child("sending"),
        }
    }

    /// Send `data` (a vendor content object) to subscriber `subscriber_id`
    /// under the given message tag.
    pub async fn send_content(
        &self,
        subscriber_id: i64,
        data: Value,
        message_tag: &str,
    ) -> Result<ApiResponse> {
        let args = params([
            ("subscriber_id", json!(subscriber_id)),
            ("data", data),
            ("message_tag", json!(message_tag)),
        ]);
        self.node.invoke("sendContent", args, Method::Post).await
    }

    /// Send `data` to the user identified by `user_ref`.
    pub async fn send_content_by_user_ref(
        &self,
        user_ref: i64,
        data: Value,
    ) -> Result<ApiResponse> {
        let args = params([("user_ref", json!(user_ref)), ("data", data)]);
        self.node
            .invoke("sendContentByUserRef", args, Method::Post)
            .await
    }

    /// Trigger the flow `flow_ns` for subscriber `subscriber_id`.
    pub async fn send_flow(&self, subscriber_id: i64, flow_ns: &str) -> Result<ApiResponse> {
        let args = params([
            ("subscriber_id", json!(subscriber_id)),
            ("flow_ns", json!(flow_ns)),
        ]);
        self.node.invoke("sendFlow", args, Method::Post).await
    }
}

//! `/fb/subscriber` endpoints: subscriber lookup, tags and custom fields.

use serde_json::{json, Value};

use crate::api::{ApiResponse, Method};
use crate::error::Result;
use crate::structure::ApiStructure;

use super::params;

/// Accessor for the `/fb/subscriber` namespace.
#[derive(Debug, Clone)]
pub struct Subscriber {
    node: ApiStructure,
}

impl Subscriber {
    pub(crate) fn new(parent: &ApiStructure) -> Self {
        Self {
            node: parent.child("subscriber"),
        }
    }

    /// Get information about subscriber `subscriber_id`.
    pub async fn get_info(&self, subscriber_id: i64) -> Result<ApiResponse> {
        let args = params([("subscriber_id", json!(subscriber_id))]);
        self.node.invoke("getInfo", args, Method::Get).await
    }

    /// Find subscribers by name.
    pub async fn find_by_name(&self, name: &str) -> Result<ApiResponse> {
        let args = params([("name", json!(name))]);
        self.node.invoke("findByName", args, Method::Get).await
    }

    /// Get information about the user identified by `user_ref`.
    pub async fn get_info_by_user_ref(&self, user_ref: i64) -> Result<ApiResponse> {
        let args = params([("user_ref", json!(user_ref))]);
        self.node.invoke("getInfoByUserRef", args, Method::Get).await
    }

    /// Find subscribers whose custom field `field_id` equals `field_value`.
    pub async fn find_by_custom_field(
        &self,
        field_id: i64,
        field_value: &str,
    ) -> Result<ApiResponse> {
        let args = params([
            ("field_id", json!(field_id)),
            ("field_value", json!(field_value)),
        ]);
        self.node.invoke("findByCustomField", args, Method::Get).await
    }

    /// Add the tag `tag_id` to subscriber `subscriber_id`.
    pub async fn add_tag(&self, subscriber_id: i64, tag_id: i64) -> Result<ApiResponse> {
        let args = params([
            ("subscriber_id", json!(subscriber_id)),
            ("tag_id", json!(tag_id)),
        ]);
        self.node.invoke("addTag", args, Method::Post).await
    }

    /// Add the tag named `tag_name` to subscriber `subscriber_id`.
    pub async fn add_tag_by_name(
        &self,
        subscriber_id: i64,
        tag_name: &str,
    ) -> Result<ApiResponse> {
        let args = params([
            ("subscriber_id", json!(subscriber_id)),
            ("tag_name", json!(tag_name)),
        ]);
        self.node.invoke("addTagByName", args, Method::Post).await
    }

    /// Remove the tag `tag_id` from subscriber `subscriber_id`.
    pub async fn remove_tag(&self, subscriber_id: i64, tag_id: i64) -> Result<ApiResponse> {
        let args = params([
            ("subscriber_id", json!(subscriber_id)),
            ("tag_id", json!(tag_id)),
        ]);
        self.node.invoke("removeTag", args, Method::Post).await
    }

    /// Remove the tag named `tag_name` from subscriber `subscriber_id`.
    pub async fn remove_tag_by_name(
        &self,
        subscriber_id: i64,
        tag_name: &str,
    ) -> Result<ApiResponse> {
        let args = params([
            ("subscriber_id", json!(subscriber_id)),
            ("tag_name", json!(tag_name)),
        ]);
        self.node.invoke("removeTagByName", args, Method::Post).await
    }

    /// Set the custom field `field_id` of subscriber `subscriber_id`.
    pub async fn set_custom_field(
        &self,
        subscriber_id: i64,
        field_id: i64,
        field_value: Value,
    ) -> Result<ApiResponse> {
        let args = params([
            ("subscriber_id", json!(subscriber_id)),
            ("field_id", json!(field_id)),
            ("field_value", field_value),
        ]);
        self.node.invoke("setCustomField", args, Method::Post).await
    }

    /// Set the custom field named `field_name` of subscriber `subscriber_id`.
    pub async fn set_custom_field_by_name(
        &self,
        subscriber_id: i64,
        field_name: &str,
        field_value: Value,
    ) -> Result<ApiResponse> {
        let args = params([
            ("subscriber_id", json!(subscriber_id)),
            ("field_name", json!(field_name)),
            ("field_value", field_value),
        ]);
        self.node
            .invoke("setCustomFieldByName", args, Method::Post)
            .await
    }

    /// Verify a subscriber against a signed request blob.
    pub async fn verify_by_signed_request(
        &self,
        subscriber_id: i64,
        signed_request: &str,
    ) -> Result<ApiResponse> {
        let args = params([
            ("subscriber_id", json!(subscriber_id)),
            ("signed_request", json!(signed_request)),
        ]);
        self.node
            .invoke("verifyBySignedRequest", args, Method::Post)
            .await
    }
}

//! `/fb/page` endpoints: page info, tags, custom fields, bot fields,
//! widgets, growth tools, flows and OTN topics.

use serde_json::{json, Value};

use crate::api::{ApiResponse, Method, Params};
use crate::error::Result;
use crate::structure::ApiStructure;

use super::params;

/// Accessor for the `/fb/page` namespace.
#[derive(Debug, Clone)]
pub struct Page {
    node: ApiStructure,
}

impl Page {
    pub(crate) fn new(parent: &ApiStructure) -> Self {
        Self {
            node: parent.child("page"),
        }
    }

    /// Get information about the current page.
    pub async fn get_info(&self) -> Result<ApiResponse> {
        self.node.invoke("getInfo", Params::new(), Method::Get).await
    }

    /// Create the tag `name`.
    pub async fn create_tag(&self, name: &str) -> Result<ApiResponse> {
        let args = params([("name", json!(name))]);
        self.node.invoke("createTag", args, Method::Post).await
    }

    /// List the page's tags.
    pub async fn get_tags(&self) -> Result<ApiResponse> {
        self.node.invoke("getTags", Params::new(), Method::Get).await
    }

    /// Remove the tag with ID `tag_id`.
    pub async fn remove_tag(&self, tag_id: i64) -> Result<ApiResponse> {
        let args = params([("tag_id", json!(tag_id))]);
        self.node.invoke("removeTag", args, Method::Post).await
    }

    /// Remove the tag named `tag_name`.
    pub async fn remove_tag_by_name(&self, tag_name: &str) -> Result<ApiResponse> {
        let args = params([("tag_name", json!(tag_name))]);
        self.node.invoke("removeTagByName", args, Method::Post).await
    }

    /// List the page's growth widgets.
    pub async fn get_widgets(&self) -> Result<ApiResponse> {
        self.node.invoke("getWidgets", Params::new(), Method::Get).await
    }

    /// Create a custom user field. `description` is omitted from the request
    /// when `None`.
    pub async fn create_custom_field(
        &self,
        caption: &str,
        field_type: &str,
        description: Option<&str>,
    ) -> Result<ApiResponse> {
        let mut args = params([("caption", json!(caption)), ("type", json!(field_type))]);
        if let Some(description) = description {
            args.insert("description".to_string(), json!(description));
        }
        self.node.invoke("createCustomField", args, Method::Post).await
    }

    /// List the page's growth tools.
    pub async fn get_growth_tools(&self) -> Result<ApiResponse> {
        self.node.invoke("getGrowthTools", Params::new(), Method::Get).await
    }

    /// List the page's flows.
    pub async fn get_flows(&self) -> Result<ApiResponse> {
        self.node.invoke("getFlows", Params::new(), Method::Get).await
    }

    /// List the page's custom user fields.
    pub async fn get_custom_fields(&self) -> Result<ApiResponse> {
        self.node.invoke("getCustomFields", Params::new(), Method::Get).await
    }

    /// List the page's one-time-notification topics.
    pub async fn get_otn_topics(&self) -> Result<ApiResponse> {
        self.node.invoke("getOtnTopics", Params::new(), Method::Get).await
    }

    /// List the page's bot fields.
    pub async fn get_bot_fields(&self) -> Result<ApiResponse> {
        self.node.invoke("getBotFields", Params::new(), Method::Get).await
    }

    /// Create a bot field.
    pub async fn create_bot_field(
        &self,
        name: &str,
        field_type: &str,
        description: &str,
    ) -> Result<ApiResponse> {
        let args = params([
            ("name", json!(name)),
            ("type", json!(field_type)),
            ("description", json!(description)),
        ]);
        self.node.invoke("createBotField", args, Method::Post).await
    }

    /// Set the bot field `field_id` to `field_value`.
    pub async fn set_bot_field(&self, field_id: i64, field_value: Value) -> Result<ApiResponse> {
        let args = params([("field_id", json!(field_id)), ("field_value", field_value)]);
        self.node.invoke("setBotField", args, Method::Post).await
    }

    /// Set the bot field named `field_name` to `field_value`.
    pub async fn set_bot_field_by_name(
        &self,
        field_name: &str,
        field_value: Value,
    ) -> Result<ApiResponse> {
        let args = params([("field_name", json!(field_name)), ("field_value", field_value)]);
        self.node.invoke("setBotFieldByName", args, Method::Post).await
    }
}

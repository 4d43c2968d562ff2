use serde::{Deserialize, Serialize};

use super::auth::AuthInput;
use super::enums::WebhookType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookInput {
    #[serde(rename = "type")]
    pub webhook_type: WebhookType,
    pub url: String,
    pub auth: Option<AuthInput>,
}

impl WebhookInput {
    pub fn new(webhook_type: WebhookType, url: impl Into<String>) -> Self {
        Self {
            webhook_type,
            url: url.into(),
            auth: None,
        }
    }
}

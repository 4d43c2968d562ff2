use serde::{Deserialize, Serialize};

use super::auth::AuthInput;
use super::enums::{DocumentFormat, FetchMode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    pub title: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub description: String,
    pub format: DocumentFormat,
    pub kind: Option<String>,
    pub data: Option<String>,
    #[serde(rename = "fetchRequest")]
    pub fetch_request: Option<FetchRequestInput>,
}

impl DocumentInput {
    pub fn new(
        title: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        format: DocumentFormat,
    ) -> Self {
        Self {
            title: title.into(),
            display_name: display_name.into(),
            description: description.into(),
            format,
            kind: None,
            data: None,
            fetch_request: None,
        }
    }
}

/// Where and how to download content that is not given inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchRequestInput {
    pub url: String,
    pub auth: Option<AuthInput>,
    pub mode: Option<FetchMode>,
    pub filter: Option<String>,
}

impl FetchRequestInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: None,
            mode: None,
            filter: None,
        }
    }
}

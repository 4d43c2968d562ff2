//! API and event API definitions with their specifications and versions.

use serde::{Deserialize, Serialize};

use super::auth::AuthInput;
use super::document::FetchRequestInput;
use super::enums::{ApiSpecType, EventSpecType, SpecFormat};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDefinitionInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "targetURL")]
    pub target_url: String,
    pub group: Option<String>,
    pub spec: Option<ApiSpecInput>,
    pub version: Option<VersionInput>,
    #[serde(rename = "defaultAuth")]
    pub default_auth: Option<AuthInput>,
}

impl ApiDefinitionInput {
    pub fn new(name: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            target_url: target_url.into(),
            group: None,
            spec: None,
            version: None,
            default_auth: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSpecInput {
    pub data: Option<String>,
    #[serde(rename = "type")]
    pub spec_type: ApiSpecType,
    pub format: SpecFormat,
    #[serde(rename = "fetchRequest")]
    pub fetch_request: Option<FetchRequestInput>,
}

impl ApiSpecInput {
    pub fn new(spec_type: ApiSpecType, format: SpecFormat) -> Self {
        Self {
            data: None,
            spec_type,
            format,
            fetch_request: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventApiDefinitionInput {
    pub name: String,
    pub description: Option<String>,
    pub spec: EventApiSpecInput,
    pub group: Option<String>,
    pub version: Option<VersionInput>,
}

impl EventApiDefinitionInput {
    pub fn new(name: impl Into<String>, spec: EventApiSpecInput) -> Self {
        Self {
            name: name.into(),
            description: None,
            spec,
            group: None,
            version: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventApiSpecInput {
    pub data: Option<String>,
    #[serde(rename = "eventSpecType")]
    pub event_spec_type: EventSpecType,
    #[serde(rename = "fetchRequest")]
    pub fetch_request: Option<FetchRequestInput>,
    pub format: SpecFormat,
}

impl EventApiSpecInput {
    pub fn new(event_spec_type: EventSpecType, format: SpecFormat) -> Self {
        Self {
            data: None,
            event_spec_type,
            fetch_request: None,
            format,
        }
    }
}

/// Version metadata. The boolean flags are tri-state: absent, `true` or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInput {
    pub value: String,
    pub deprecated: Option<bool>,
    #[serde(rename = "deprecatedSince")]
    pub deprecated_since: Option<String>,
    #[serde(rename = "forRemoval")]
    pub for_removal: Option<bool>,
}

impl VersionInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            deprecated: None,
            deprecated_since: None,
            for_removal: None,
        }
    }
}

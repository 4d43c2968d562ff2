//! Applications, application templates, runtimes and integration systems.

use serde::{Deserialize, Serialize};

use super::api::{ApiDefinitionInput, EventApiDefinitionInput};
use super::document::DocumentInput;
use super::enums::ApplicationTemplateAccessLevel;
use super::maps::Labels;
use super::webhook::WebhookInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCreateInput {
    pub name: String,
    pub description: Option<String>,
    pub labels: Option<Labels>,
    #[serde(default)]
    pub webhooks: Vec<WebhookInput>,
    #[serde(rename = "healthCheckURL")]
    pub health_check_url: Option<String>,
    #[serde(default)]
    pub apis: Vec<ApiDefinitionInput>,
    #[serde(rename = "eventAPIs", default)]
    pub event_apis: Vec<EventApiDefinitionInput>,
    #[serde(default)]
    pub documents: Vec<DocumentInput>,
    #[serde(rename = "integrationSystemID")]
    pub integration_system_id: Option<String>,
}

impl ApplicationCreateInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            labels: None,
            webhooks: Vec::new(),
            health_check_url: None,
            apis: Vec::new(),
            event_apis: Vec::new(),
            documents: Vec::new(),
            integration_system_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationUpdateInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "healthCheckURL")]
    pub health_check_url: Option<String>,
    #[serde(rename = "integrationSystemID")]
    pub integration_system_id: Option<String>,
}

impl ApplicationUpdateInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            health_check_url: None,
            integration_system_id: None,
        }
    }
}

/// A reusable application blueprint with named placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationTemplateInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "applicationInput")]
    pub application_input: ApplicationCreateInput,
    #[serde(default)]
    pub placeholders: Vec<PlaceholderDefinitionInput>,
    #[serde(rename = "accessLevel")]
    pub access_level: ApplicationTemplateAccessLevel,
}

impl ApplicationTemplateInput {
    pub fn new(
        name: impl Into<String>,
        application_input: ApplicationCreateInput,
        access_level: ApplicationTemplateAccessLevel,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            application_input,
            placeholders: Vec::new(),
            access_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderDefinitionInput {
    pub name: String,
    pub description: Option<String>,
}

impl PlaceholderDefinitionInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Registers an application from a template, filling its placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFromTemplateInput {
    #[serde(rename = "templateName")]
    pub template_name: String,
    #[serde(default)]
    pub values: Vec<TemplateValueInput>,
}

impl ApplicationFromTemplateInput {
    pub fn new(template_name: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
            values: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateValueInput {
    pub placeholder: String,
    pub value: String,
}

impl TemplateValueInput {
    pub fn new(placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInput {
    pub name: String,
    pub description: Option<String>,
    pub labels: Option<Labels>,
}

impl RuntimeInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            labels: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSystemInput {
    pub name: String,
    pub description: Option<String>,
}

impl IntegrationSystemInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

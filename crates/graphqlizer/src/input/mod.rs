//! Typed input values.
//!
//! Each struct mirrors one GraphQL input type of the director API. Field names
//! serialize under their GraphQL spelling (`healthCheckURL`, `eventAPIs`, …)
//! so the same values can be handed to query-document templates and passed
//! back through the function registry.
//!
//! Optional fields are `Option<T>`; a `None` field is never emitted.

mod api;
mod application;
mod auth;
mod document;
mod enums;
mod label;
mod maps;
mod webhook;

pub use api::{ApiDefinitionInput, ApiSpecInput, EventApiDefinitionInput, EventApiSpecInput, VersionInput};
pub use application::{
    ApplicationCreateInput, ApplicationFromTemplateInput, ApplicationTemplateInput,
    ApplicationUpdateInput, IntegrationSystemInput, PlaceholderDefinitionInput, RuntimeInput,
    TemplateValueInput,
};
pub use auth::{
    AuthInput, BasicCredentialDataInput, CredentialDataInput, CredentialRequestAuthInput,
    CsrfTokenCredentialRequestAuthInput, OAuthCredentialDataInput,
};
pub use document::{DocumentInput, FetchRequestInput};
pub use enums::{
    ApiSpecType, ApplicationTemplateAccessLevel, DocumentFormat, EventSpecType, FetchMode,
    SpecFormat, WebhookType,
};
pub use label::{JsonSchema, LabelDefinitionInput, LabelFilter};
pub use maps::{HttpHeaders, Labels, QueryParams};
pub use webhook::WebhookInput;

//! Rendering rules, one per input type.
//!
//! Field order follows the director schema. Nested values are rendered by
//! their own rule, so each rule only decides which of its own fields are
//! present.

use crate::error::Result;
use crate::input::*;
use crate::kind::InputKind;
use crate::literal::{LiteralWriter, ToGraphql};

impl ToGraphql for ApplicationCreateInput {
    fn kind(&self) -> InputKind {
        InputKind::ApplicationCreate
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("name", &self.name);
            o.opt_string("description", self.description.as_deref());
            o.opt_nested("labels", self.labels.as_ref())?;
            o.list("webhooks", &self.webhooks)?;
            o.opt_string("healthCheckURL", self.health_check_url.as_deref());
            o.list("apis", &self.apis)?;
            o.list("eventAPIs", &self.event_apis)?;
            o.list("documents", &self.documents)?;
            o.opt_string("integrationSystemID", self.integration_system_id.as_deref());
            Ok(())
        })
    }
}

impl ToGraphql for ApplicationUpdateInput {
    fn kind(&self) -> InputKind {
        InputKind::ApplicationUpdate
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("name", &self.name);
            o.opt_string("description", self.description.as_deref());
            o.opt_string("healthCheckURL", self.health_check_url.as_deref());
            o.opt_string("integrationSystemID", self.integration_system_id.as_deref());
            Ok(())
        })
    }
}

impl ToGraphql for ApplicationTemplateInput {
    fn kind(&self) -> InputKind {
        InputKind::ApplicationTemplate
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("name", &self.name);
            o.opt_string("description", self.description.as_deref());
            o.nested("applicationInput", &self.application_input)?;
            o.list("placeholders", &self.placeholders)?;
            o.token("accessLevel", self.access_level);
            Ok(())
        })
    }
}

impl ToGraphql for PlaceholderDefinitionInput {
    fn kind(&self) -> InputKind {
        InputKind::PlaceholderDefinition
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("name", &self.name);
            o.opt_string("description", self.description.as_deref());
            Ok(())
        })
    }
}

impl ToGraphql for ApplicationFromTemplateInput {
    fn kind(&self) -> InputKind {
        InputKind::ApplicationFromTemplate
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("templateName", &self.template_name);
            o.list("values", &self.values)
        })
    }
}

impl ToGraphql for TemplateValueInput {
    fn kind(&self) -> InputKind {
        InputKind::TemplateValue
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("placeholder", &self.placeholder);
            o.string("value", &self.value);
            Ok(())
        })
    }
}

impl ToGraphql for DocumentInput {
    fn kind(&self) -> InputKind {
        InputKind::Document
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("title", &self.title);
            o.string("displayName", &self.display_name);
            o.string("description", &self.description);
            o.token("format", self.format);
            o.opt_string("kind", self.kind.as_deref());
            o.opt_string("data", self.data.as_deref());
            o.opt_nested("fetchRequest", self.fetch_request.as_ref())
        })
    }
}

impl ToGraphql for FetchRequestInput {
    fn kind(&self) -> InputKind {
        InputKind::FetchRequest
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("url", &self.url);
            o.opt_nested("auth", self.auth.as_ref())?;
            o.opt_token("mode", self.mode);
            o.opt_string("filter", self.filter.as_deref());
            Ok(())
        })
    }
}

impl ToGraphql for CredentialRequestAuthInput {
    fn kind(&self) -> InputKind {
        InputKind::CredentialRequestAuth
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| o.opt_nested("csrf", self.csrf.as_ref()))
    }
}

impl ToGraphql for CredentialDataInput {
    fn kind(&self) -> InputKind {
        InputKind::CredentialData
    }

    // basic and oauth have no input kind of their own; they are written inline.
    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            if let Some(basic) = &self.basic {
                o.field("basic").object(|b| {
                    b.string("username", &basic.username);
                    b.string("password", &basic.password);
                    Ok(())
                })?;
            }
            if let Some(oauth) = &self.oauth {
                o.field("oauth").object(|a| {
                    a.string("clientId", &oauth.client_id);
                    a.string("clientSecret", &oauth.client_secret);
                    a.string("url", &oauth.url);
                    Ok(())
                })?;
            }
            Ok(())
        })
    }
}

impl ToGraphql for CsrfTokenCredentialRequestAuthInput {
    fn kind(&self) -> InputKind {
        InputKind::CsrfTokenCredentialRequestAuth
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("tokenEndpointURL", &self.token_endpoint_url);
            o.nested("credential", &self.credential)?;
            o.opt_nested("additionalHeaders", self.additional_headers.as_ref())?;
            o.opt_nested("additionalQueryParams", self.additional_query_params.as_ref())
        })
    }
}

impl ToGraphql for AuthInput {
    fn kind(&self) -> InputKind {
        InputKind::Auth
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.nested("credential", &self.credential)?;
            o.opt_nested("additionalHeaders", self.additional_headers.as_ref())?;
            o.opt_nested("additionalQueryParams", self.additional_query_params.as_ref())?;
            o.opt_nested("requestAuth", self.request_auth.as_ref())
        })
    }
}

impl ToGraphql for Labels {
    fn kind(&self) -> InputKind {
        InputKind::Labels
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.string_list_map(self)
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl ToGraphql for HttpHeaders {
    fn kind(&self) -> InputKind {
        InputKind::HttpHeaders
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.string_list_map(self)
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl ToGraphql for QueryParams {
    fn kind(&self) -> InputKind {
        InputKind::QueryParams
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.string_list_map(self)
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl ToGraphql for WebhookInput {
    fn kind(&self) -> InputKind {
        InputKind::Webhook
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.token("type", self.webhook_type);
            o.string("url", &self.url);
            o.opt_nested("auth", self.auth.as_ref())
        })
    }
}

impl ToGraphql for ApiDefinitionInput {
    fn kind(&self) -> InputKind {
        InputKind::ApiDefinition
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("name", &self.name);
            o.opt_string("description", self.description.as_deref());
            o.string("targetURL", &self.target_url);
            o.opt_string("group", self.group.as_deref());
            o.opt_nested("spec", self.spec.as_ref())?;
            o.opt_nested("version", self.version.as_ref())?;
            o.opt_nested("defaultAuth", self.default_auth.as_ref())
        })
    }
}

impl ToGraphql for EventApiDefinitionInput {
    fn kind(&self) -> InputKind {
        InputKind::EventApiDefinition
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("name", &self.name);
            o.opt_string("description", self.description.as_deref());
            o.nested("spec", &self.spec)?;
            o.opt_string("group", self.group.as_deref());
            o.opt_nested("version", self.version.as_ref())
        })
    }
}

impl ToGraphql for EventApiSpecInput {
    fn kind(&self) -> InputKind {
        InputKind::EventApiSpec
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.opt_string("data", self.data.as_deref());
            o.token("eventSpecType", self.event_spec_type);
            o.opt_nested("fetchRequest", self.fetch_request.as_ref())?;
            o.token("format", self.format);
            Ok(())
        })
    }
}

impl ToGraphql for ApiSpecInput {
    fn kind(&self) -> InputKind {
        InputKind::ApiSpec
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.opt_string("data", self.data.as_deref());
            o.token("type", self.spec_type);
            o.token("format", self.format);
            o.opt_nested("fetchRequest", self.fetch_request.as_ref())
        })
    }
}

impl ToGraphql for VersionInput {
    fn kind(&self) -> InputKind {
        InputKind::Version
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("value", &self.value);
            o.opt_token("deprecated", self.deprecated);
            o.opt_string("deprecatedSince", self.deprecated_since.as_deref());
            o.opt_token("forRemoval", self.for_removal);
            Ok(())
        })
    }
}

impl ToGraphql for RuntimeInput {
    fn kind(&self) -> InputKind {
        InputKind::Runtime
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("name", &self.name);
            o.opt_string("description", self.description.as_deref());
            o.opt_nested("labels", self.labels.as_ref())
        })
    }
}

impl ToGraphql for LabelDefinitionInput {
    fn kind(&self) -> InputKind {
        InputKind::LabelDefinition
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("key", &self.key);
            o.opt_raw("schema", self.schema.as_ref().map(JsonSchema::as_str));
            Ok(())
        })
    }
}

impl ToGraphql for LabelFilter {
    fn kind(&self) -> InputKind {
        InputKind::LabelFilter
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("key", &self.key);
            o.opt_string("query", self.query.as_deref());
            Ok(())
        })
    }
}

impl ToGraphql for IntegrationSystemInput {
    fn kind(&self) -> InputKind {
        InputKind::IntegrationSystem
    }

    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
        out.object(|o| {
            o.string("name", &self.name);
            o.opt_string("description", self.description.as_deref());
            Ok(())
        })
    }
}

//! The entry point used by test code.

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::input::*;
use crate::literal::ToGraphql;
use crate::template::{FunctionRegistry, TemplateConfig, TemplateEngine};

/// Converts typed inputs into GraphQL literals and renders query documents.
///
/// A `Graphqlizer` is cheap to share: it holds a read-only registry and a
/// template engine, and every method takes `&self`.
///
/// ```rust
/// use graphqlizer::Graphqlizer;
/// use graphqlizer::input::{Labels, RuntimeInput};
///
/// let gqlizer = Graphqlizer::new();
/// let mut runtime = RuntimeInput::new("kyma");
/// runtime.labels = Some(Labels::new().with("scenarios", ["DEFAULT"]));
///
/// assert_eq!(
///     gqlizer.runtime_input_to_gql(&runtime).unwrap(),
///     r#"{name: "kyma", labels: {scenarios: ["DEFAULT"]}}"#
/// );
/// ```
pub struct Graphqlizer {
    engine: TemplateEngine,
}

macro_rules! to_gql_methods {
    ($($method:ident($ty:ty),)+) => {
        $(
            #[doc = concat!("Renders a [`", stringify!($ty), "`] literal.")]
            pub fn $method(&self, input: &$ty) -> Result<String> {
                self.to_literal(input)
            }
        )+
    };
}

impl Graphqlizer {
    /// Creates a graphqlizer over the shared built-in registry.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(FunctionRegistry::shared()),
        }
    }

    /// Creates a graphqlizer with a custom registry and configuration.
    pub fn with_registry(registry: FunctionRegistry, config: TemplateConfig) -> Self {
        Self {
            engine: TemplateEngine::with_config(Arc::new(registry), config),
        }
    }

    pub fn registry(&self) -> &FunctionRegistry {
        self.engine.registry()
    }

    /// Renders any input as a literal.
    pub fn to_literal<T: ToGraphql + ?Sized>(&self, input: &T) -> Result<String> {
        input.to_gql()
    }

    /// Renders a query document. See [`TemplateEngine::render`].
    pub fn render<T: Serialize + ?Sized>(&self, template: &str, value: &T) -> Result<String> {
        self.engine.render(template, value)
    }

    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.engine.add_template(name, source)
    }

    pub fn render_named<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<String> {
        self.engine.render_named(name, value)
    }

    to_gql_methods! {
        application_create_input_to_gql(ApplicationCreateInput),
        application_update_input_to_gql(ApplicationUpdateInput),
        application_template_input_to_gql(ApplicationTemplateInput),
        placeholder_definition_input_to_gql(PlaceholderDefinitionInput),
        application_from_template_input_to_gql(ApplicationFromTemplateInput),
        template_value_input_to_gql(TemplateValueInput),
        document_input_to_gql(DocumentInput),
        fetch_request_input_to_gql(FetchRequestInput),
        credential_request_auth_input_to_gql(CredentialRequestAuthInput),
        credential_data_input_to_gql(CredentialDataInput),
        csrf_token_credential_request_auth_input_to_gql(CsrfTokenCredentialRequestAuthInput),
        auth_input_to_gql(AuthInput),
        labels_to_gql(Labels),
        http_headers_to_gql(HttpHeaders),
        query_params_to_gql(QueryParams),
        webhook_input_to_gql(WebhookInput),
        api_definition_input_to_gql(ApiDefinitionInput),
        event_api_definition_input_to_gql(EventApiDefinitionInput),
        event_api_spec_input_to_gql(EventApiSpecInput),
        api_spec_input_to_gql(ApiSpecInput),
        version_input_to_gql(VersionInput),
        runtime_input_to_gql(RuntimeInput),
        label_definition_input_to_gql(LabelDefinitionInput),
        label_filter_to_gql(LabelFilter),
        integration_system_input_to_gql(IntegrationSystemInput),
    }
}

impl Default for Graphqlizer {
    fn default() -> Self {
        Self::new()
    }
}

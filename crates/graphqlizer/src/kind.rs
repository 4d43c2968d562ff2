//! The closed set of input kinds.
//!
//! [`InputKind`] names every input type the crate can render and [`Input`]
//! holds a value of any of them. Both are generated from a single table, and
//! every dispatch over them is a total `match`: adding a type without a
//! rendering rule or a registry entry does not compile.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{GraphqlizeError, Result};
use crate::input::*;
use crate::literal::{LiteralWriter, ToGraphql};

macro_rules! input_kinds {
    ($($variant:ident($ty:ty) => $name:literal,)+) => {
        /// Identifies one input type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum InputKind {
            $($variant,)+
        }

        impl InputKind {
            /// Every input kind, in declaration order.
            pub const ALL: &'static [InputKind] = &[$(InputKind::$variant,)+];

            /// The name this kind is registered under in the function registry.
            pub fn function_name(self) -> &'static str {
                match self {
                    $(InputKind::$variant => $name,)+
                }
            }

            /// Looks a kind up by its registry name.
            pub fn from_function_name(name: &str) -> Option<InputKind> {
                match name {
                    $($name => Some(InputKind::$variant),)+
                    _ => None,
                }
            }

            /// Renders a JSON value as this kind.
            ///
            /// The value is first decoded into the typed input, so a value of the
            /// wrong shape fails with [`GraphqlizeError::Deserialize`].
            pub fn render_value(self, value: &serde_json::Value) -> Result<String> {
                match self {
                    $(InputKind::$variant => render_as::<$ty>(self, value),)+
                }
            }
        }

        /// A value of any input kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Input {
            $($variant($ty),)+
        }

        $(
            impl From<$ty> for Input {
                fn from(value: $ty) -> Self {
                    Input::$variant(value)
                }
            }
        )+

        impl ToGraphql for Input {
            fn kind(&self) -> InputKind {
                match self {
                    $(Input::$variant(_) => InputKind::$variant,)+
                }
            }

            fn write_gql(&self, out: &mut LiteralWriter) -> Result<()> {
                match self {
                    $(Input::$variant(value) => value.write_gql(out),)+
                }
            }

            fn is_absent(&self) -> bool {
                match self {
                    $(Input::$variant(value) => value.is_absent(),)+
                }
            }
        }
    };
}

input_kinds! {
    ApplicationCreate(ApplicationCreateInput) => "application_create_input",
    ApplicationUpdate(ApplicationUpdateInput) => "application_update_input",
    ApplicationTemplate(ApplicationTemplateInput) => "application_template_input",
    PlaceholderDefinition(PlaceholderDefinitionInput) => "placeholder_definition_input",
    ApplicationFromTemplate(ApplicationFromTemplateInput) => "application_from_template_input",
    TemplateValue(TemplateValueInput) => "template_value_input",
    Document(DocumentInput) => "document_input",
    FetchRequest(FetchRequestInput) => "fetch_request_input",
    CredentialRequestAuth(CredentialRequestAuthInput) => "credential_request_auth_input",
    CredentialData(CredentialDataInput) => "credential_data_input",
    CsrfTokenCredentialRequestAuth(CsrfTokenCredentialRequestAuthInput) => "csrf_token_credential_request_auth_input",
    Auth(AuthInput) => "auth_input",
    Labels(Labels) => "labels",
    HttpHeaders(HttpHeaders) => "http_headers",
    QueryParams(QueryParams) => "query_params",
    Webhook(WebhookInput) => "webhook_input",
    ApiDefinition(ApiDefinitionInput) => "api_definition_input",
    EventApiDefinition(EventApiDefinitionInput) => "event_api_definition_input",
    EventApiSpec(EventApiSpecInput) => "event_api_spec_input",
    ApiSpec(ApiSpecInput) => "api_spec_input",
    Version(VersionInput) => "version_input",
    Runtime(RuntimeInput) => "runtime_input",
    LabelDefinition(LabelDefinitionInput) => "label_definition_input",
    LabelFilter(LabelFilter) => "label_filter",
    IntegrationSystem(IntegrationSystemInput) => "integration_system_input",
}

fn render_as<T>(kind: InputKind, value: &serde_json::Value) -> Result<String>
where
    T: ToGraphql + DeserializeOwned,
{
    let input: T = serde_json::from_value(value.clone())
        .map_err(|source| GraphqlizeError::Deserialize { kind, source })?;
    input.to_gql()
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_function_names_are_unique_and_round_trip() {
        let names: HashSet<_> = InputKind::ALL.iter().map(|k| k.function_name()).collect();
        assert_eq!(names.len(), InputKind::ALL.len());
        for kind in InputKind::ALL {
            assert_eq!(InputKind::from_function_name(kind.function_name()), Some(*kind));
        }
        assert_eq!(InputKind::from_function_name("nope"), None);
    }

    #[test]
    fn test_render_value_decodes_typed_input() {
        let text = InputKind::LabelFilter
            .render_value(&json!({"key": "scenarios", "query": "$[*]"}))
            .unwrap();
        assert_eq!(text, r#"{key: "scenarios", query: "$[*]"}"#);
    }

    #[test]
    fn test_render_value_rejects_wrong_shape() {
        let err = InputKind::Version.render_value(&json!({"deprecated": true})).unwrap_err();
        assert!(matches!(
            err,
            GraphqlizeError::Deserialize { kind: InputKind::Version, .. }
        ));
    }

    #[test]
    fn test_input_enum_dispatch() {
        let input: Input = IntegrationSystemInput::new("sys").into();
        assert_eq!(input.kind(), InputKind::IntegrationSystem);
        assert_eq!(input.to_gql().unwrap(), r#"{name: "sys"}"#);
    }
}

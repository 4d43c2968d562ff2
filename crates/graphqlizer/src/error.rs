//! Error types for literal and template rendering.
//!
//! Every public operation returns [`GraphqlizeError`]. Failures from nested
//! input types are wrapped in [`GraphqlizeError::Input`] so the message reads
//! from the outermost type down to the field that failed, and the original
//! cause stays reachable through [`std::error::Error::source`].

use thiserror::Error;

use crate::kind::InputKind;

/// Errors that can occur while rendering literals or query templates.
#[derive(Debug, Error)]
pub enum GraphqlizeError {
    /// The template could not be parsed.
    #[error("while parsing template: {0}")]
    TemplateSyntax(#[source] minijinja::Error),

    /// The template parsed but failed while executing against a value.
    #[error("while executing template: {0}")]
    Render(#[source] minijinja::Error),

    /// A template or caller referenced a function that is not registered.
    #[error("function not found: {0}")]
    FunctionNotFound(String),

    /// A function with this name is already registered.
    #[error("function already registered: {0}")]
    DuplicateFunction(String),

    /// A named template was requested but never added.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// A map key cannot be emitted as a bare GraphQL name.
    #[error("invalid name {name:?}: keys must match [_A-Za-z][_0-9A-Za-z]*")]
    InvalidName { name: String },

    /// A nested input type failed to render.
    #[error("while rendering {kind}: {source}")]
    Input {
        kind: InputKind,
        #[source]
        source: Box<GraphqlizeError>,
    },

    /// A registry value does not have the shape of the requested input type.
    #[error("invalid {kind} value: {source}")]
    Deserialize {
        kind: InputKind,
        #[source]
        source: serde_json::Error,
    },

    /// The template context could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The YAML configuration could not be read.
    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl GraphqlizeError {
    /// Wraps this error with the input type that was being rendered.
    pub fn within(self, kind: InputKind) -> Self {
        GraphqlizeError::Input {
            kind,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping [`GraphqlizeError::Input`] wrappers.
    pub fn root_cause(&self) -> &GraphqlizeError {
        match self {
            GraphqlizeError::Input { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the chain of input types from the outermost to the innermost.
    pub fn kind_path(&self) -> Vec<InputKind> {
        let mut path = Vec::new();
        let mut current = self;
        while let GraphqlizeError::Input { kind, source } = current {
            path.push(*kind);
            current = source;
        }
        path
    }
}

/// Result type for graphqlizer operations.
pub type Result<T> = std::result::Result<T, GraphqlizeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = GraphqlizeError::FunctionNotFound("webhook_input".to_string());
        assert!(err.to_string().contains("function not found"));
        assert!(err.to_string().contains("webhook_input"));
    }

    #[test]
    fn test_within_keeps_cause() {
        let err = GraphqlizeError::InvalidName {
            name: "Content-Type".into(),
        }
        .within(InputKind::HttpHeaders)
        .within(InputKind::Auth);

        assert_eq!(err.kind_path(), vec![InputKind::Auth, InputKind::HttpHeaders]);
        assert!(matches!(
            err.root_cause(),
            GraphqlizeError::InvalidName { name } if name == "Content-Type"
        ));

        let source = err.source().expect("wrapped error has a source");
        assert!(source.to_string().contains("http_headers"));
        assert!(err.to_string().starts_with("while rendering auth_input"));
    }

    #[test]
    fn test_from_serde_yaml() {
        let yaml_err = serde_yaml::from_str::<bool>("[").unwrap_err();
        let err: GraphqlizeError = yaml_err.into();
        assert!(matches!(err, GraphqlizeError::Config(_)));
    }
}

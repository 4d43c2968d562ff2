//! Query-document template engine.
//!
//! [`TemplateEngine`] renders MiniJinja templates against any serializable
//! value. Every function in its [`FunctionRegistry`] is callable from the
//! template, so nested inputs are turned into literals by name:
//!
//! ```rust
//! use graphqlizer::input::ApplicationCreateInput;
//! use graphqlizer::template::{FunctionRegistry, TemplateEngine};
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new(FunctionRegistry::shared());
//! let app = ApplicationCreateInput::new("my-app");
//! let query = engine
//!     .render(
//!         "mutation { result: registerApplication(in: {{ application_create_input(app) }}) { id } }",
//!         &json!({ "app": app }),
//!     )
//!     .unwrap();
//! assert_eq!(
//!     query,
//!     r#"mutation { result: registerApplication(in: {name: "my-app"}) { id } }"#
//! );
//! ```
//!
//! Failures are reported by phase: [`GraphqlizeError::TemplateSyntax`] when
//! the source does not parse, [`GraphqlizeError::FunctionNotFound`] when it
//! calls an unregistered function and [`GraphqlizeError::Render`] for every
//! other execution failure. A failed render never returns partial output.

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind, Value};
use serde::Serialize;

use super::config::TemplateConfig;
use super::filters::register_filters;
use super::registry::FunctionRegistry;
use crate::error::{GraphqlizeError, Result};

/// MiniJinja environment with the registry's functions installed.
pub struct TemplateEngine {
    env: Environment<'static>,
    registry: Arc<FunctionRegistry>,
    config: TemplateConfig,
}

impl TemplateEngine {
    /// Creates an engine with the default [`TemplateConfig`].
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        Self::with_config(registry, TemplateConfig::default())
    }

    pub fn with_config(registry: Arc<FunctionRegistry>, config: TemplateConfig) -> Self {
        let mut env = Environment::new();
        config.apply(&mut env);
        register_filters(&mut env);
        register_functions(&mut env, &registry);
        Self {
            env,
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Renders a one-off template string.
    pub fn render<T: Serialize + ?Sized>(&self, template: &str, value: &T) -> Result<String> {
        let context = serde_json::to_value(value)?;
        log::debug!("rendering template ({} bytes)", template.len());
        self.env
            .render_str(template, Value::from_serialize(&context))
            .map_err(classify)
    }

    /// Adds a named template. The source is parsed immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        log::debug!("adding template {}", name);
        self.env
            .add_template_owned(name.to_string(), source.to_string())
            .map_err(GraphqlizeError::TemplateSyntax)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders a template previously added with [`add_template`](Self::add_template).
    pub fn render_named<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .map_err(|_| GraphqlizeError::TemplateNotFound(name.to_string()))?;
        let context = serde_json::to_value(value)?;
        log::debug!("rendering template {}", name);
        template
            .render(Value::from_serialize(&context))
            .map_err(classify)
    }
}

/// Renders `template` against `value` with the functions in `registry`.
///
/// This builds a throwaway engine; keep a [`TemplateEngine`] around when
/// rendering many documents.
pub fn render<T: Serialize + ?Sized>(
    template: &str,
    value: &T,
    registry: Arc<FunctionRegistry>,
) -> Result<String> {
    TemplateEngine::new(registry).render(template, value)
}

fn register_functions(env: &mut Environment<'static>, registry: &FunctionRegistry) {
    for (name, f) in registry.iter() {
        let f = Arc::clone(f);
        let fname = name.to_string();
        env.add_function(name.to_string(), move |value: Value| -> std::result::Result<Value, Error> {
            let json = serde_json::to_value(&value).map_err(|e| {
                Error::new(ErrorKind::BadSerialization, format!("argument of {}", fname)).with_source(e)
            })?;
            let literal = f(&json).map_err(|e| {
                Error::new(ErrorKind::InvalidOperation, format!("{} failed: {}", fname, e)).with_source(e)
            })?;
            Ok(Value::from_safe_string(literal))
        });
    }
}

fn classify(err: Error) -> GraphqlizeError {
    match err.kind() {
        ErrorKind::SyntaxError | ErrorKind::BadEscape => GraphqlizeError::TemplateSyntax(err),
        ErrorKind::UnknownFunction => {
            // minijinja reports "<name> is unknown".
            let name = err
                .detail()
                .map(|detail| detail.trim_end_matches(" is unknown").to_string())
                .unwrap_or_else(|| err.to_string());
            GraphqlizeError::FunctionNotFound(name)
        }
        _ => GraphqlizeError::Render(err),
    }
}

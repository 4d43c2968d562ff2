//! Function registry for query-document templates.
//!
//! A [`FunctionRegistry`] maps a function name to a [`RenderFn`]. Every input
//! kind is available under its [`InputKind::function_name`] in
//! [`FunctionRegistry::builtin`], and callers may add their own entries
//! before handing the registry to a [`TemplateEngine`](super::TemplateEngine).
//! Once an engine is built the registry is shared read-only.
//!
//! # Example
//!
//! ```rust
//! use graphqlizer::template::FunctionRegistry;
//! use serde_json::json;
//!
//! let registry = FunctionRegistry::builtin();
//! let text = registry
//!     .call("label_filter", &json!({"key": "scenarios"}))
//!     .unwrap();
//! assert_eq!(text, r#"{key: "scenarios"}"#);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{GraphqlizeError, Result};
use crate::kind::InputKind;

/// A rendering function callable from templates.
pub type RenderFn = Arc<dyn Fn(&serde_json::Value) -> Result<String> + Send + Sync>;

static SHARED: Lazy<Arc<FunctionRegistry>> = Lazy::new(|| Arc::new(FunctionRegistry::builtin()));

/// Name to rendering function table.
///
/// Names are unique; registering a name twice is an error rather than an
/// overwrite. Iteration is sorted by name.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, RenderFn>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding one function per input kind.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &kind in InputKind::ALL {
            registry
                .functions
                .insert(kind.function_name().to_string(), kind_fn(kind));
        }
        registry
    }

    /// The process-wide built-in registry, created on first use.
    pub fn shared() -> Arc<FunctionRegistry> {
        Arc::clone(&SHARED)
    }

    /// Registers `f` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlizeError::DuplicateFunction`] if the name is taken.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> Result<()>
    where
        F: Fn(&serde_json::Value) -> Result<String> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.functions.contains_key(&name) {
            return Err(GraphqlizeError::DuplicateFunction(name));
        }
        log::debug!("registering template function {}", name);
        self.functions.insert(name, Arc::new(f));
        Ok(())
    }

    /// Looks up the function registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<&RenderFn> {
        self.functions
            .get(name)
            .ok_or_else(|| GraphqlizeError::FunctionNotFound(name.to_string()))
    }

    /// Resolves `name` and calls it with `value`.
    pub fn call(&self, name: &str, value: &serde_json::Value) -> Result<String> {
        let f = self.resolve(name)?;
        log::trace!("calling template function {}", name);
        f(value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &RenderFn)> {
        self.functions.iter().map(|(name, f)| (name.as_str(), f))
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn kind_fn(kind: InputKind) -> RenderFn {
    Arc::new(move |value: &serde_json::Value| kind.render_value(value))
}

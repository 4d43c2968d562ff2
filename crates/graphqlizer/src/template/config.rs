//! Template engine configuration.
//!
//! ```rust
//! use graphqlizer::template::TemplateConfig;
//!
//! let config = TemplateConfig::from_yaml("strict_undefined: false").unwrap();
//! assert!(!config.strict_undefined);
//! assert!(config.trim_blocks);
//! ```

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whitespace and undefined-value handling for query-document templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Fail when a template reads a field the value does not have.
    pub strict_undefined: bool,
    /// Drop the first newline after a block tag.
    pub trim_blocks: bool,
    /// Strip leading whitespace before a block tag.
    pub lstrip_blocks: bool,
    /// Keep the final newline of the template source.
    pub keep_trailing_newline: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            strict_undefined: true,
            trim_blocks: true,
            lstrip_blocks: true,
            keep_trailing_newline: false,
        }
    }
}

impl TemplateConfig {
    /// Parses a configuration from YAML. Missing keys keep their defaults.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub(crate) fn apply(&self, env: &mut Environment<'static>) {
        env.set_undefined_behavior(if self.strict_undefined {
            UndefinedBehavior::Strict
        } else {
            UndefinedBehavior::Lenient
        });
        env.set_trim_blocks(self.trim_blocks);
        env.set_lstrip_blocks(self.lstrip_blocks);
        env.set_keep_trailing_newline(self.keep_trailing_newline);
        // Output is GraphQL, never HTML.
        env.set_auto_escape_callback(|_| AutoEscape::None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphqlizeError;

    #[test]
    fn test_defaults() {
        let config = TemplateConfig::default();
        assert!(config.strict_undefined);
        assert!(config.trim_blocks);
        assert!(config.lstrip_blocks);
        assert!(!config.keep_trailing_newline);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = TemplateConfig::from_yaml("keep_trailing_newline: true\n").unwrap();
        assert!(config.keep_trailing_newline);
        assert!(config.strict_undefined);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        let err = TemplateConfig::from_yaml("strict: true").unwrap_err();
        assert!(matches!(err, GraphqlizeError::Config(_)));
    }
}

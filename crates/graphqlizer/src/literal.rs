//! GraphQL literal writer.
//!
//! [`LiteralWriter`] is the output buffer every rendering rule writes into.
//! Objects are written through [`ObjectWriter`], which owns separator
//! placement: fields are joined with `, `, so a block never starts or ends
//! with a comma no matter which optional fields are absent.
//!
//! ```rust
//! use graphqlizer::literal::LiteralWriter;
//!
//! let mut out = LiteralWriter::new();
//! out.object(|o| {
//!     o.string("name", "foo");
//!     o.opt_string("description", None);
//!     o.token("format", "YAML");
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(out.finish(), r#"{name: "foo", format: YAML}"#);
//! ```
//!
//! String values are written between double quotes as given. Quotes,
//! backslashes and newlines inside the value are not escaped.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Write as _};

use crate::error::{GraphqlizeError, Result};
use crate::kind::InputKind;

/// A value that knows how to write itself as a GraphQL literal.
pub trait ToGraphql {
    /// The input kind this value renders as.
    fn kind(&self) -> InputKind;

    /// Writes the literal into `out`.
    fn write_gql(&self, out: &mut LiteralWriter) -> Result<()>;

    /// Whether an optional field holding this value should be skipped.
    ///
    /// Maps are absent when empty; every other input is present when `Some`.
    fn is_absent(&self) -> bool {
        false
    }

    /// Renders the literal into a fresh string.
    ///
    /// Errors are wrapped with this value's kind. No partial text is returned.
    fn to_gql(&self) -> Result<String> {
        let mut out = LiteralWriter::new();
        out.nested(self)?;
        let literal = out.finish();
        log::trace!("rendered {} literal ({} bytes)", self.kind(), literal.len());
        Ok(literal)
    }
}

/// Output buffer for GraphQL literals.
#[derive(Debug, Default)]
pub struct LiteralWriter {
    buf: String,
}

impl LiteralWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }

    /// Writes `s` unchanged.
    pub fn raw(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Writes `s` between double quotes.
    pub fn string(&mut self, s: &str) {
        self.buf.push('"');
        self.buf.push_str(s);
        self.buf.push('"');
    }

    /// Writes a bare token: an enum value, boolean or number.
    pub fn token(&mut self, value: impl Display) {
        // Writing into a String cannot fail.
        let _ = write!(self.buf, "{}", value);
    }

    /// Writes a `{ ... }` block. Fields are added through the [`ObjectWriter`].
    pub fn object<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ObjectWriter<'_>) -> Result<()>,
    {
        self.buf.push('{');
        {
            let mut object = ObjectWriter {
                out: &mut *self,
                first: true,
            };
            f(&mut object)?;
        }
        self.buf.push('}');
        Ok(())
    }

    /// Writes a nested value, wrapping any failure with its kind.
    pub fn nested<T: ToGraphql + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.write_gql(self).map_err(|e| e.within(value.kind()))
    }

    /// Writes `[a, b, ...]`, rendering each element with its own rule.
    pub fn list<T: ToGraphql>(&mut self, items: &[T]) -> Result<()> {
        self.buf.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(", ");
            }
            self.nested(item)?;
        }
        self.buf.push(']');
        Ok(())
    }

    /// Writes `["a", "b", ...]`.
    pub fn string_list(&mut self, items: &[String]) {
        self.buf.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(", ");
            }
            self.string(item);
        }
        self.buf.push(']');
    }

    /// Writes a key-to-string-list map as an object.
    ///
    /// Keys are emitted bare, so each must be a valid GraphQL name.
    pub fn string_list_map(&mut self, map: &BTreeMap<String, Vec<String>>) -> Result<()> {
        self.object(|o| {
            for (key, values) in map {
                if !is_graphql_name(key) {
                    return Err(GraphqlizeError::InvalidName { name: key.clone() });
                }
                o.field(key).string_list(values);
            }
            Ok(())
        })
    }
}

impl fmt::Display for LiteralWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Field-by-field writer for one `{ ... }` block.
pub struct ObjectWriter<'a> {
    out: &'a mut LiteralWriter,
    first: bool,
}

impl ObjectWriter<'_> {
    /// Starts a field and returns the writer positioned after `key: `.
    pub fn field(&mut self, key: &str) -> &mut LiteralWriter {
        if !self.first {
            self.out.buf.push_str(", ");
        }
        self.first = false;
        self.out.buf.push_str(key);
        self.out.buf.push_str(": ");
        &mut *self.out
    }

    pub fn string(&mut self, key: &str, value: &str) {
        self.field(key).string(value);
    }

    pub fn opt_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.string(key, value);
        }
    }

    pub fn token(&mut self, key: &str, value: impl Display) {
        self.field(key).token(value);
    }

    pub fn opt_token<V: Display>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.token(key, value);
        }
    }

    pub fn opt_raw(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.field(key).raw(value);
        }
    }

    /// Writes a required nested value.
    pub fn nested<T: ToGraphql>(&mut self, key: &str, value: &T) -> Result<()> {
        self.field(key).nested(value)
    }

    /// Writes a nested value when present and not absent (see [`ToGraphql::is_absent`]).
    pub fn opt_nested<T: ToGraphql>(&mut self, key: &str, value: Option<&T>) -> Result<()> {
        match value {
            Some(value) if !value.is_absent() => self.nested(key, value),
            _ => Ok(()),
        }
    }

    /// Writes a list field when it has at least one element.
    pub fn list<T: ToGraphql>(&mut self, key: &str, items: &[T]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.field(key).list(items)
    }
}

/// Whether `s` matches the GraphQL `Name` production.
pub fn is_graphql_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Labels, LabelFilter};

    #[test]
    fn test_object_separators_skip_absent_fields() {
        let mut out = LiteralWriter::new();
        out.object(|o| {
            o.opt_string("a", None);
            o.string("b", "1");
            o.opt_string("c", None);
            o.opt_token("d", Some(true));
            o.opt_string("e", None);
            Ok(())
        })
        .unwrap();
        assert_eq!(out.finish(), r#"{b: "1", d: true}"#);
    }

    #[test]
    fn test_empty_object() {
        let mut out = LiteralWriter::new();
        out.object(|_| Ok(())).unwrap();
        assert_eq!(out.as_str(), "{}");
    }

    #[test]
    fn test_list_separators() {
        let filters = vec![LabelFilter::new("a"), LabelFilter::new("b"), LabelFilter::new("c")];
        let mut out = LiteralWriter::new();
        out.list(&filters).unwrap();
        let text = out.finish();
        assert_eq!(text, r#"[{key: "a"}, {key: "b"}, {key: "c"}]"#);
        assert_eq!(text.matches("}, {").count(), 2);
    }

    #[test]
    fn test_empty_list_field_is_omitted() {
        let mut out = LiteralWriter::new();
        out.object(|o| {
            o.list::<LabelFilter>("filters", &[])?;
            o.string("key", "k");
            Ok(())
        })
        .unwrap();
        assert_eq!(out.finish(), r#"{key: "k"}"#);
    }

    #[test]
    fn test_empty_map_field_is_omitted() {
        let labels = Labels::new();
        let mut out = LiteralWriter::new();
        out.object(|o| {
            o.string("name", "n");
            o.opt_nested("labels", Some(&labels))
        })
        .unwrap();
        assert_eq!(out.finish(), r#"{name: "n"}"#);
    }

    #[test]
    fn test_string_list_map() {
        let labels = Labels::new().with("b", ["z"]).with("a", ["x", "y"]);
        let mut out = LiteralWriter::new();
        out.string_list_map(&labels).unwrap();
        assert_eq!(out.finish(), r#"{a: ["x", "y"], b: ["z"]}"#);
    }

    #[test]
    fn test_string_list_map_rejects_invalid_keys() {
        let labels = Labels::new().with("Content-Type", ["json"]);
        let mut out = LiteralWriter::new();
        let err = out.string_list_map(&labels).unwrap_err();
        assert!(matches!(err, GraphqlizeError::InvalidName { name } if name == "Content-Type"));
    }

    #[test]
    fn test_strings_are_not_escaped() {
        let mut out = LiteralWriter::new();
        out.string(r#"say "hi""#);
        assert_eq!(out.finish(), r#""say "hi"""#);
    }

    #[test]
    fn test_is_graphql_name() {
        assert!(is_graphql_name("scenarios"));
        assert!(is_graphql_name("_x9"));
        assert!(!is_graphql_name(""));
        assert!(!is_graphql_name("9lives"));
        assert!(!is_graphql_name("x-y"));
    }
}

//! MiniJinja filters for query documents.

use minijinja::{Environment, Value};

/// Registers the query-document filters on a minijinja environment.
pub fn register_filters(env: &mut Environment<'static>) {
    // Wraps a value in double quotes: {{ app.name | quote }} -> "my-app".
    // Like literal strings, the content is not escaped.
    env.add_filter("quote", |value: Value| -> Value {
        Value::from_safe_string(format!("\"{}\"", value))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_filter() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let out = env
            .render_str("{{ name | quote }}", minijinja::context! { name => "app" })
            .unwrap();
        assert_eq!(out, "\"app\"");
    }
}

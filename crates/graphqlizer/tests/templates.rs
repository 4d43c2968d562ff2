//! Query documents rendered through the template engine.

mod fixtures;

use std::sync::Arc;

use graphqlizer::input::*;
use graphqlizer::template::{self, FunctionRegistry, TemplateConfig, TemplateEngine};
use graphqlizer::{GraphqlizeError, Graphqlizer, ToGraphql};
use serde_json::json;

const REGISTER_APPLICATION: &str = r#"mutation {
  result: registerApplication(in: {{ application_create_input(app) }}) {
    id
  }
}"#;

#[test]
fn registry_function_matches_typed_rule() {
    let app = fixtures::full_application();
    let query = Graphqlizer::new()
        .render(REGISTER_APPLICATION, &json!({ "app": app }))
        .unwrap();

    let expected = format!(
        "mutation {{\n  result: registerApplication(in: {}) {{\n    id\n  }}\n}}",
        app.to_gql().unwrap()
    );
    assert_eq!(query, expected);
}

#[test]
fn loops_and_conditionals_over_inputs() {
    let filters = vec![
        LabelFilter::new("scenarios"),
        LabelFilter::with_query("group", "$[*]"),
    ];
    let source = "query { applications(filter: [\
        {%- for f in filters %}{% if not loop.first %}, {% endif %}{{ label_filter(f) }}{% endfor -%}\
        ]) { totalCount } }";

    let query = Graphqlizer::new()
        .render(source, &json!({ "filters": filters }))
        .unwrap();
    assert_eq!(
        query,
        r#"query { applications(filter: [{key: "scenarios"}, {key: "group", query: "$[*]"}]) { totalCount } }"#
    );
}

#[test]
fn unregistered_function_names_the_function() {
    let err = Graphqlizer::new()
        .render(
            "mutation { result: registerThing(in: {{ thing_input(app) }}) { id } }",
            &json!({ "app": {"name": "x"} }),
        )
        .unwrap_err();

    assert!(matches!(err, GraphqlizeError::FunctionNotFound(_)), "{err:?}");
    assert!(err.to_string().contains("thing_input"), "{err}");
}

#[test]
fn malformed_template_is_a_syntax_error() {
    let err = Graphqlizer::new()
        .render("{% for f in filters %}{{ label_filter(f) }}", &json!({ "filters": [] }))
        .unwrap_err();
    assert!(matches!(err, GraphqlizeError::TemplateSyntax(_)), "{err:?}");
}

#[test]
fn nested_failure_is_wrapped_as_render_error() {
    // The header key is not a GraphQL name.
    let auth = json!({
        "credential": {"basic": {"username": "u", "password": "p"}},
        "additionalHeaders": {"Content-Type": ["json"]}
    });
    let err = Graphqlizer::new()
        .render("{{ auth_input(auth) }}", &json!({ "auth": auth }))
        .unwrap_err();

    assert!(matches!(err, GraphqlizeError::Render(_)), "{err:?}");
    let message = err.to_string();
    assert!(message.contains("auth_input"), "{message}");
}

#[test]
fn named_query_documents() {
    let mut gqlizer = Graphqlizer::new();
    gqlizer
        .add_template(
            "update_application",
            "mutation { updateApplication(id: {{ id | quote }}, in: {{ application_update_input(update) }}) { id } }",
        )
        .unwrap();

    let mut update = ApplicationUpdateInput::new("renamed");
    update.description = Some("new".into());
    let query = gqlizer
        .render_named("update_application", &json!({ "id": "app-1", "update": update }))
        .unwrap();
    assert_eq!(
        query,
        r#"mutation { updateApplication(id: "app-1", in: {name: "renamed", description: "new"}) { id } }"#
    );
}

#[test]
fn free_render_function_uses_given_registry() {
    let registry = Arc::new(FunctionRegistry::builtin());
    let text = template::render(
        "{{ integration_system_input(sys) }}",
        &json!({ "sys": IntegrationSystemInput::new("sys") }),
        Arc::clone(&registry),
    )
    .unwrap();
    assert_eq!(text, r#"{name: "sys"}"#);

    let empty = Arc::new(FunctionRegistry::new());
    let err = template::render("{{ integration_system_input(sys) }}", &json!({ "sys": {} }), empty)
        .unwrap_err();
    assert!(matches!(err, GraphqlizeError::FunctionNotFound(_)));
}

#[test]
fn config_from_yaml_controls_whitespace() {
    let config = TemplateConfig::from_yaml("keep_trailing_newline: true\n").unwrap();
    let engine = TemplateEngine::with_config(FunctionRegistry::shared(), config);
    let out = engine
        .render("{{ labels(l) }}\n", &json!({ "l": {"env": ["dev"]} }))
        .unwrap();
    assert_eq!(out, "{env: [\"dev\"]}\n");

    let engine = TemplateEngine::new(FunctionRegistry::shared());
    let out = engine
        .render("{{ labels(l) }}\n", &json!({ "l": {"env": ["dev"]} }))
        .unwrap();
    assert_eq!(out, "{env: [\"dev\"]}");
}

#[test]
fn engine_is_shareable_across_threads() {
    let gqlizer = Arc::new(Graphqlizer::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let gqlizer = Arc::clone(&gqlizer);
            std::thread::spawn(move || {
                gqlizer
                    .render("{{ label_filter(f) }}", &json!({ "f": {"key": format!("k{}", i)} }))
                    .unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!(r#"{{key: "k{}"}}"#, i));
    }
}

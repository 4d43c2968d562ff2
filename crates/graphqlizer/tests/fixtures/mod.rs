//! Shared input fixtures.

#![allow(dead_code)]

use graphqlizer::input::*;

pub fn basic_auth() -> AuthInput {
    AuthInput::new(CredentialDataInput::basic("admin", "secret"))
}

pub fn fetch_request(url: &str) -> FetchRequestInput {
    let mut request = FetchRequestInput::new(url);
    request.auth = Some(basic_auth());
    request.mode = Some(FetchMode::Single);
    request
}

pub fn api(name: &str) -> ApiDefinitionInput {
    let mut spec = ApiSpecInput::new(ApiSpecType::OpenApi, SpecFormat::Yaml);
    spec.fetch_request = Some(fetch_request("http://specs/openapi.yaml"));

    let mut version = VersionInput::new("v1");
    version.deprecated = Some(false);

    let mut api = ApiDefinitionInput::new(name, "http://target");
    api.group = Some("group".into());
    api.spec = Some(spec);
    api.version = Some(version);
    api.default_auth = Some(basic_auth());
    api
}

pub fn event_api(name: &str) -> EventApiDefinitionInput {
    let mut spec = EventApiSpecInput::new(EventSpecType::AsyncApi, SpecFormat::Json);
    spec.data = Some("{}".into());
    EventApiDefinitionInput::new(name, spec)
}

pub fn document(title: &str) -> DocumentInput {
    let mut doc = DocumentInput::new(title, "Display", "Description", DocumentFormat::Markdown);
    doc.kind = Some("readme".into());
    doc.fetch_request = Some(fetch_request("http://docs/readme.md"));
    doc
}

/// An application touching every nesting level.
pub fn full_application() -> ApplicationCreateInput {
    let mut csrf = CsrfTokenCredentialRequestAuthInput::new(
        "http://token",
        CredentialDataInput::oauth("client", "secret", "http://oauth"),
    );
    csrf.additional_headers = Some(HttpHeaders::new().with("X_Csrf", ["fetch"]));

    let mut auth = basic_auth();
    auth.additional_query_params = Some(QueryParams::new().with("tenant", ["t1"]));
    auth.request_auth = Some(CredentialRequestAuthInput { csrf: Some(csrf) });

    let mut webhook = WebhookInput::new(WebhookType::ConfigurationChanged, "http://hook");
    webhook.auth = Some(auth);

    let mut app = ApplicationCreateInput::new("full-app");
    app.description = Some("everything set".into());
    app.labels = Some(
        Labels::new()
            .with("scenarios", ["DEFAULT", "E2E"])
            .with("group", ["production"]),
    );
    app.webhooks = vec![webhook];
    app.health_check_url = Some("http://health".into());
    app.apis = vec![api("api-1"), api("api-2")];
    app.event_apis = vec![event_api("events")];
    app.documents = vec![document("readme")];
    app.integration_system_id = Some("int-sys".into());
    app
}

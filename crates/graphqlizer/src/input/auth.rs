//! Authentication inputs.

use serde::{Deserialize, Serialize};

use super::maps::{HttpHeaders, QueryParams};

/// Credentials plus optional extras used when calling a protected endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthInput {
    pub credential: CredentialDataInput,
    #[serde(rename = "additionalHeaders")]
    pub additional_headers: Option<HttpHeaders>,
    #[serde(rename = "additionalQueryParams")]
    pub additional_query_params: Option<QueryParams>,
    #[serde(rename = "requestAuth")]
    pub request_auth: Option<CredentialRequestAuthInput>,
}

impl AuthInput {
    pub fn new(credential: CredentialDataInput) -> Self {
        Self {
            credential,
            additional_headers: None,
            additional_query_params: None,
            request_auth: None,
        }
    }
}

/// Either basic or OAuth credentials. Both may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDataInput {
    pub basic: Option<BasicCredentialDataInput>,
    pub oauth: Option<OAuthCredentialDataInput>,
}

impl CredentialDataInput {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            basic: Some(BasicCredentialDataInput {
                username: username.into(),
                password: password.into(),
            }),
            oauth: None,
        }
    }

    pub fn oauth(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            basic: None,
            oauth: Some(OAuthCredentialDataInput {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
                url: url.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicCredentialDataInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthCredentialDataInput {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
    pub url: String,
}

/// Auth performed before the actual request, e.g. fetching a CSRF token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialRequestAuthInput {
    pub csrf: Option<CsrfTokenCredentialRequestAuthInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrfTokenCredentialRequestAuthInput {
    #[serde(rename = "tokenEndpointURL")]
    pub token_endpoint_url: String,
    pub credential: CredentialDataInput,
    #[serde(rename = "additionalHeaders")]
    pub additional_headers: Option<HttpHeaders>,
    #[serde(rename = "additionalQueryParams")]
    pub additional_query_params: Option<QueryParams>,
}

impl CsrfTokenCredentialRequestAuthInput {
    pub fn new(token_endpoint_url: impl Into<String>, credential: CredentialDataInput) -> Self {
        Self {
            token_endpoint_url: token_endpoint_url.into(),
            credential,
            additional_headers: None,
            additional_query_params: None,
        }
    }
}

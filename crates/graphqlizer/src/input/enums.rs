//! Enumerated input values, emitted as bare GraphQL enum tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! gql_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// The GraphQL enum token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

gql_enum! {
    /// Event a webhook is triggered for.
    WebhookType { ConfigurationChanged => "CONFIGURATION_CHANGED" }
}

gql_enum! {
    /// How fetched specification content is interpreted.
    FetchMode {
        Single => "SINGLE",
        Package => "PACKAGE",
        Index => "INDEX",
    }
}

gql_enum! {
    /// Serialization format of an API or event specification.
    SpecFormat {
        Yaml => "YAML",
        Json => "JSON",
        Xml => "XML",
    }
}

gql_enum! {
    ApiSpecType {
        Odata => "ODATA",
        OpenApi => "OPEN_API",
    }
}

gql_enum! {
    EventSpecType { AsyncApi => "ASYNC_API" }
}

gql_enum! {
    DocumentFormat { Markdown => "MARKDOWN" }
}

gql_enum! {
    /// Visibility of an application template.
    ApplicationTemplateAccessLevel { Global => "GLOBAL" }
}

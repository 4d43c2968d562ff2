//! # Graphqlizer - typed inputs to GraphQL literals
//!
//! `graphqlizer` turns the director API's input types (applications, APIs,
//! event APIs, documents, webhooks, auth, labels, …) into GraphQL input-value
//! literals that end-to-end tests splice into query documents.
//!
//! ## Core Concepts
//!
//! - [`input`]: the typed input values. Optional fields are `Option<T>`.
//! - [`ToGraphql`]: the rendering rule every input type implements.
//! - [`InputKind`] / [`Input`]: the closed set of input types.
//! - [`Graphqlizer`]: one `…_to_gql` method per input type, plus query
//!   document rendering.
//! - [`template`]: MiniJinja query documents with every input kind callable
//!   as a function.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphqlizer::Graphqlizer;
//! use graphqlizer::input::{ApplicationCreateInput, WebhookInput, WebhookType};
//!
//! let gqlizer = Graphqlizer::new();
//!
//! let mut app = ApplicationCreateInput::new("my-app");
//! app.description = Some("test application".into());
//! app.webhooks.push(WebhookInput::new(WebhookType::ConfigurationChanged, "http://hook"));
//!
//! let literal = gqlizer.application_create_input_to_gql(&app).unwrap();
//! assert_eq!(
//!     literal,
//!     r#"{name: "my-app", description: "test application", webhooks: [{type: CONFIGURATION_CHANGED, url: "http://hook"}]}"#
//! );
//!
//! let query = format!("mutation {{ result: registerApplication(in: {}) {{ id }} }}", literal);
//! # let _ = query;
//! ```
//!
//! ## Output Rules
//!
//! - Absent optional fields, empty lists and empty maps emit nothing.
//! - Fields and list elements are separated by `, `; there are no trailing commas.
//! - Map keys are sorted and must be GraphQL names.
//! - Strings are quoted but not escaped.

pub mod error;
mod graphqlizer;
pub mod input;
mod kind;
pub mod literal;
mod rules;
pub mod template;

pub use error::{GraphqlizeError, Result};
pub use graphqlizer::Graphqlizer;
pub use kind::{Input, InputKind};
pub use literal::{LiteralWriter, ObjectWriter, ToGraphql};

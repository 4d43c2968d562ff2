//! Query-document templating.
//!
//! Literals produced by the rendering rules are usually spliced into a larger
//! GraphQL document. This module renders such documents with MiniJinja and
//! exposes the [`FunctionRegistry`] to them, so a template can turn any part
//! of its context into a literal by calling the input kind's function:
//!
//! ```jinja
//! mutation {
//!   result: registerApplication(in: {{ application_create_input(app) }}) { id }
//! }
//! ```
//!
//! ## Key Types
//!
//! - [`TemplateEngine`]: environment with the registry functions installed
//! - [`FunctionRegistry`]: name to rendering function table
//! - [`TemplateConfig`]: whitespace and undefined-value handling
//!
//! ## Filters
//!
//! - `quote`: wraps a value in double quotes, `{{ id | quote }}`

mod config;
mod engine;
pub mod filters;
mod registry;

pub use config::TemplateConfig;
pub use engine::{render, TemplateEngine};
pub use registry::{FunctionRegistry, RenderFn};

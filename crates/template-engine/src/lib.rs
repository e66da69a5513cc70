//! Legal document template engine
//!
//! This crate renders template bodies by substituting `{{...}}` placeholder
//! tokens from a per-session value map. It supports:
//!
//! - Direct lookups: `{{employer}}` — replaced by the field value, or left
//!   untouched when the field has no value yet
//! - Conditional expressions: `{{ status === 'active' ? 'Active' : 'Inactive' }}`
//!   — strict equality and ternary selection over the value map
//!
//! Conditional expressions run in a closed evaluator: the only names in
//! scope are the value-map entries. There is no access to engine internals
//! and no way to call out of the expression. A failing expression renders
//! as the empty string so one bad field can never break the document.
//!
//! Rendering is a single pass; substituted values are never re-scanned for
//! further placeholders.
//!
//! # Example
//!
//! ```
//! use shared_types::Values;
//! use template_engine::render;
//!
//! let mut values = Values::new();
//! values.insert("employer".to_string(), "ACME".into());
//!
//! let output = render("Employer: {{employer}}", &values);
//! assert_eq!(output, "Employer: ACME");
//! ```

pub mod error;
pub mod expr;
pub mod render;
pub mod templates;

pub use error::RenderError;
pub use render::{direct_tokens, preview, render};
pub use templates::{get_template, list_templates};

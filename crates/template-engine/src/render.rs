//! Placeholder substitution
//!
//! `render` scans the content once for `{{...}}` tokens. An expression
//! with no comparison operator and no ternary is a direct field lookup;
//! anything else goes through the conditional-expression pipeline.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use shared_types::{Template, Values};

use crate::expr::{evaluate, parse};

/// `{{ ... }}`, non-greedy, single line
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{(.*?)\}\}").unwrap());

/// Render a template body from a value map
///
/// Total over all inputs: unknown direct tokens are left unchanged,
/// failing conditional expressions substitute the empty string, and
/// substituted values are never re-scanned.
pub fn render(content: &str, values: &Values) -> String {
    TOKEN_RE
        .replace_all(content, |caps: &Captures| {
            substitute(caps[1].trim(), &caps[0], values)
        })
        .into_owned()
}

/// Render a template's content for on-screen preview
pub fn preview(template: &Template, values: &Values) -> String {
    render(&template.content, values)
}

/// The direct-lookup token names appearing in a content body
///
/// Used to audit catalog templates against their declared field lists.
pub fn direct_tokens(content: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let expr = caps[1].trim();
            if is_conditional(expr) {
                None
            } else {
                Some(expr.to_string())
            }
        })
        .collect()
}

/// A token is a conditional expression when it carries a comparison
/// operator or a ternary; everything else is a plain lookup key.
fn is_conditional(expr: &str) -> bool {
    expr.contains("===") || expr.contains("!==") || expr.contains('?')
}

fn substitute(expr: &str, token: &str, values: &Values) -> String {
    if !is_conditional(expr) {
        // Direct lookup. An unresolved field keeps its token text so the
        // author can see what is still missing.
        return match values.get(expr) {
            Some(value) => value.display(),
            None => token.to_string(),
        };
    }

    match parse(expr).and_then(|ast| evaluate(&ast, values)) {
        Ok(value) if value.is_truthy() => value.render(),
        Ok(_) => String::new(),
        Err(err) => {
            tracing::debug!(expression = expr, error = %err, "conditional placeholder failed");
            String::new()
        }
    }
}

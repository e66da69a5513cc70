//! Evaluator for parsed conditional expressions
//!
//! The only names in scope are the value-map entries. Referencing any
//! other identifier is an evaluation error; `render` recovers it to the
//! empty string.

use shared_types::{FieldValue, Values};

use crate::error::RenderError;

use super::parser::Expr;

/// Result of evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl Value {
    /// Falsy values substitute as the empty string
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Str(s) => !s.is_empty(),
            Value::Num(n) => *n != 0.0 && !n.is_nan(),
            Value::Bool(b) => *b,
        }
    }

    /// The text substituted into the document
    pub fn render(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Num(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
        }
    }

    /// Strict equality: values of different types are never equal
    fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Num(a), Value::Num(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&FieldValue> for Value {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => Value::Str(s.clone()),
            FieldValue::Number(n) => Value::Num(*n),
            FieldValue::Bool(b) => Value::Bool(*b),
        }
    }
}

/// Evaluate an expression against the value map
///
/// Ternary branches are evaluated lazily: only the taken branch runs, so
/// an unbound identifier in the other branch does not fail the expression.
pub fn evaluate(expr: &Expr, values: &Values) -> Result<Value, RenderError> {
    match expr {
        Expr::Str(s) => Ok(Value::Str(s.clone())),
        Expr::Num(n) => Ok(Value::Num(*n)),
        Expr::Bool(b) => Ok(Value::Bool(*b)),
        Expr::Var(name) => values
            .get(name)
            .map(Value::from)
            .ok_or_else(|| RenderError::UnknownVariable(name.clone())),
        Expr::Eq(left, right) => {
            let left = evaluate(left, values)?;
            let right = evaluate(right, values)?;
            Ok(Value::Bool(left.strict_eq(&right)))
        }
        Expr::Neq(left, right) => {
            let left = evaluate(left, values)?;
            let right = evaluate(right, values)?;
            Ok(Value::Bool(!left.strict_eq(&right)))
        }
        Expr::Ternary {
            cond,
            then_branch,
            else_branch,
        } => {
            if evaluate(cond, values)?.is_truthy() {
                evaluate(then_branch, values)
            } else {
                evaluate(else_branch, values)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse;

    fn values() -> Values {
        let mut values = Values::new();
        values.insert("status".to_string(), "active".into());
        values.insert("salary".to_string(), 250000.0.into());
        values.insert("probation".to_string(), true.into());
        values
    }

    fn eval(input: &str) -> Result<Value, RenderError> {
        evaluate(&parse(input).unwrap(), &values())
    }

    #[test]
    fn test_comparison_true() {
        assert_eq!(eval("status === 'active'"), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_comparison_strict_across_types() {
        // A numeric value never equals its textual spelling
        assert_eq!(eval("salary === '250000'"), Ok(Value::Bool(false)));
        assert_eq!(eval("salary === 250000"), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_negated_comparison() {
        assert_eq!(eval("status !== 'closed'"), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_ternary_selects_branch() {
        assert_eq!(
            eval("status === 'active' ? 'Active' : 'Inactive'"),
            Ok(Value::Str("Active".to_string()))
        );
    }

    #[test]
    fn test_unknown_variable_errors() {
        assert_eq!(
            eval("missing === 'x'"),
            Err(RenderError::UnknownVariable("missing".to_string()))
        );
    }

    #[test]
    fn test_untaken_branch_not_evaluated() {
        // `missing` is unbound, but the condition is true so the else
        // branch never runs
        assert_eq!(
            eval("status === 'active' ? 'ok' : missing"),
            Ok(Value::Str("ok".to_string()))
        );
    }

    #[test]
    fn test_bool_value_comparison() {
        assert_eq!(eval("probation === true"), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Str(String::new()).is_truthy());
        assert!(!Value::Num(0.0).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Str("x".to_string()).is_truthy());
        assert!(Value::Num(-1.0).is_truthy());
    }
}

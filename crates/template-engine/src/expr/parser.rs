//! Recursive-descent parser for conditional expressions

use crate::error::RenderError;

use super::lexer::{tokenize, SpannedToken, Token};

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Str(String),
    Num(f64),
    Bool(bool),
    Var(String),
    Eq(Box<Expr>, Box<Expr>),
    Neq(Box<Expr>, Box<Expr>),
    Ternary {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

/// Parse an expression string into an [`Expr`] tree
pub fn parse(input: &str) -> Result<Expr, RenderError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.ternary()?;

    // The whole input must be one expression
    if let Some(extra) = parser.peek() {
        return Err(RenderError::UnexpectedToken {
            found: extra.token.to_string(),
            pos: extra.pos,
        });
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> Result<(), RenderError> {
        match self.advance() {
            Some(spanned) if &spanned.token == expected => Ok(()),
            Some(spanned) => Err(RenderError::UnexpectedToken {
                found: spanned.token.to_string(),
                pos: spanned.pos,
            }),
            None => Err(RenderError::UnexpectedEnd),
        }
    }

    fn ternary(&mut self) -> Result<Expr, RenderError> {
        let cond = self.equality()?;

        if matches!(self.peek(), Some(spanned) if spanned.token == Token::Question) {
            self.advance();
            let then_branch = self.ternary()?;
            self.expect(&Token::Colon)?;
            let else_branch = self.ternary()?;
            return Ok(Expr::Ternary {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            });
        }

        Ok(cond)
    }

    fn equality(&mut self) -> Result<Expr, RenderError> {
        let mut left = self.primary()?;

        loop {
            let op = match self.peek() {
                Some(spanned) if spanned.token == Token::StrictEq => Token::StrictEq,
                Some(spanned) if spanned.token == Token::StrictNeq => Token::StrictNeq,
                _ => break,
            };
            self.advance();
            let right = self.primary()?;
            left = match op {
                Token::StrictEq => Expr::Eq(Box::new(left), Box::new(right)),
                _ => Expr::Neq(Box::new(left), Box::new(right)),
            };
        }

        Ok(left)
    }

    fn primary(&mut self) -> Result<Expr, RenderError> {
        let spanned = self.advance().ok_or(RenderError::UnexpectedEnd)?;
        match spanned.token {
            Token::Str(s) => Ok(Expr::Str(s)),
            Token::Num(n) => Ok(Expr::Num(n)),
            Token::Ident(name) => match name.as_str() {
                "true" => Ok(Expr::Bool(true)),
                "false" => Ok(Expr::Bool(false)),
                _ => Ok(Expr::Var(name)),
            },
            Token::LParen => {
                let inner = self.ternary()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            other => Err(RenderError::UnexpectedToken {
                found: other.to_string(),
                pos: spanned.pos,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_comparison() {
        assert_eq!(
            parse("status === 'active'").unwrap(),
            Expr::Eq(
                Box::new(Expr::Var("status".to_string())),
                Box::new(Expr::Str("active".to_string())),
            )
        );
    }

    #[test]
    fn test_parse_ternary_with_comparison_condition() {
        let expr = parse("status === 'active' ? 'Active' : 'Inactive'").unwrap();
        assert_eq!(
            expr,
            Expr::Ternary {
                cond: Box::new(Expr::Eq(
                    Box::new(Expr::Var("status".to_string())),
                    Box::new(Expr::Str("active".to_string())),
                )),
                then_branch: Box::new(Expr::Str("Active".to_string())),
                else_branch: Box::new(Expr::Str("Inactive".to_string())),
            }
        );
    }

    #[test]
    fn test_parse_nested_ternary_right_associative() {
        // a ? 1 : b ? 2 : 3 groups as a ? 1 : (b ? 2 : 3)
        let expr = parse("a ? 1 : b ? 2 : 3").unwrap();
        assert_eq!(
            expr,
            Expr::Ternary {
                cond: Box::new(Expr::Var("a".to_string())),
                then_branch: Box::new(Expr::Num(1.0)),
                else_branch: Box::new(Expr::Ternary {
                    cond: Box::new(Expr::Var("b".to_string())),
                    then_branch: Box::new(Expr::Num(2.0)),
                    else_branch: Box::new(Expr::Num(3.0)),
                }),
            }
        );
    }

    #[test]
    fn test_parse_true_false_keywords() {
        assert_eq!(
            parse("probation === true").unwrap(),
            Expr::Eq(
                Box::new(Expr::Var("probation".to_string())),
                Box::new(Expr::Bool(true)),
            )
        );
    }

    #[test]
    fn test_parse_parenthesized_condition() {
        let expr = parse("(kind === 'a') ? 'x' : 'y'").unwrap();
        assert!(matches!(expr, Expr::Ternary { .. }));
    }

    #[test]
    fn test_parse_rejects_trailing_tokens() {
        assert!(matches!(
            parse("a === 'x' 'y'"),
            Err(RenderError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        assert!(parse("a ? 'x'").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!(parse(""), Err(RenderError::UnexpectedEnd));
    }
}

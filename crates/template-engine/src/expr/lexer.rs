//! Tokenizer for conditional expressions

use crate::error::RenderError;

/// A lexical token inside a `{{...}}` conditional expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Str(String),
    Num(f64),
    Ident(String),
    /// `===`
    StrictEq,
    /// `!==`
    StrictNeq,
    Question,
    Colon,
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Str(s) => write!(f, "'{}'", s),
            Token::Num(n) => write!(f, "{}", n),
            Token::Ident(name) => write!(f, "{}", name),
            Token::StrictEq => write!(f, "==="),
            Token::StrictNeq => write!(f, "!=="),
            Token::Question => write!(f, "?"),
            Token::Colon => write!(f, ":"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// A token with the byte offset it started at
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub pos: usize,
}

/// Tokenize an expression into spanned tokens
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, RenderError> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        match c {
            c if c.is_whitespace() => {
                i += 1;
            }
            '(' => {
                tokens.push(SpannedToken { token: Token::LParen, pos });
                i += 1;
            }
            ')' => {
                tokens.push(SpannedToken { token: Token::RParen, pos });
                i += 1;
            }
            '?' => {
                tokens.push(SpannedToken { token: Token::Question, pos });
                i += 1;
            }
            ':' => {
                tokens.push(SpannedToken { token: Token::Colon, pos });
                i += 1;
            }
            '=' => {
                if matches!(chars.get(i + 1), Some((_, '='))) && matches!(chars.get(i + 2), Some((_, '='))) {
                    tokens.push(SpannedToken { token: Token::StrictEq, pos });
                    i += 3;
                } else {
                    return Err(RenderError::UnexpectedChar { ch: '=', pos });
                }
            }
            '!' => {
                if matches!(chars.get(i + 1), Some((_, '='))) && matches!(chars.get(i + 2), Some((_, '='))) {
                    tokens.push(SpannedToken { token: Token::StrictNeq, pos });
                    i += 3;
                } else {
                    return Err(RenderError::UnexpectedChar { ch: '!', pos });
                }
            }
            '\'' | '"' => {
                let (literal, next) = lex_string(&chars, i, c)?;
                tokens.push(SpannedToken { token: Token::Str(literal), pos });
                i = next;
            }
            '-' if matches!(chars.get(i + 1), Some((_, d)) if d.is_ascii_digit()) => {
                let (number, next) = lex_number(&chars, i);
                tokens.push(SpannedToken { token: Token::Num(number), pos });
                i = next;
            }
            c if c.is_ascii_digit() => {
                let (number, next) = lex_number(&chars, i);
                tokens.push(SpannedToken { token: Token::Num(number), pos });
                i = next;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let (name, next) = lex_ident(&chars, i);
                tokens.push(SpannedToken { token: Token::Ident(name), pos });
                i = next;
            }
            other => return Err(RenderError::UnexpectedChar { ch: other, pos }),
        }
    }

    Ok(tokens)
}

/// Lex a quoted string starting at `start`; returns the literal and the
/// index after the closing quote
fn lex_string(
    chars: &[(usize, char)],
    start: usize,
    quote: char,
) -> Result<(String, usize), RenderError> {
    let mut literal = String::new();
    let mut i = start + 1;

    while i < chars.len() {
        let (_, c) = chars[i];
        match c {
            c if c == quote => return Ok((literal, i + 1)),
            '\\' => {
                let escaped = chars
                    .get(i + 1)
                    .map(|&(_, e)| e)
                    .ok_or(RenderError::UnterminatedString(chars[start].0))?;
                literal.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    other => other,
                });
                i += 2;
            }
            other => {
                literal.push(other);
                i += 1;
            }
        }
    }

    Err(RenderError::UnterminatedString(chars[start].0))
}

/// Lex a number (optional leading minus, optional fraction)
fn lex_number(chars: &[(usize, char)], start: usize) -> (f64, usize) {
    let mut i = start;
    let mut text = String::new();

    if chars[i].1 == '-' {
        text.push('-');
        i += 1;
    }
    while i < chars.len() && chars[i].1.is_ascii_digit() {
        text.push(chars[i].1);
        i += 1;
    }
    if i < chars.len()
        && chars[i].1 == '.'
        && matches!(chars.get(i + 1), Some((_, d)) if d.is_ascii_digit())
    {
        text.push('.');
        i += 1;
        while i < chars.len() && chars[i].1.is_ascii_digit() {
            text.push(chars[i].1);
            i += 1;
        }
    }

    // The scanned text is digits with optional sign and fraction, so the
    // parse cannot fail.
    (text.parse().unwrap_or(0.0), i)
}

/// Lex an identifier
fn lex_ident(chars: &[(usize, char)], start: usize) -> (String, usize) {
    let mut i = start;
    let mut name = String::new();

    while i < chars.len() {
        let c = chars[i].1;
        if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
            i += 1;
        } else {
            break;
        }
    }

    (name, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input).unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_tokenize_comparison() {
        assert_eq!(
            kinds("status === 'active'"),
            vec![
                Token::Ident("status".to_string()),
                Token::StrictEq,
                Token::Str("active".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_ternary() {
        assert_eq!(
            kinds("a ? 1 : 2"),
            vec![
                Token::Ident("a".to_string()),
                Token::Question,
                Token::Num(1.0),
                Token::Colon,
                Token::Num(2.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_negative_and_fractional_numbers() {
        assert_eq!(kinds("-12 3.5"), vec![Token::Num(-12.0), Token::Num(3.5)]);
    }

    #[test]
    fn test_tokenize_string_escapes() {
        assert_eq!(
            kinds(r#""he said \"hi\"" 'it\'s'"#),
            vec![
                Token::Str("he said \"hi\"".to_string()),
                Token::Str("it's".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_equals_rejected() {
        assert_eq!(
            tokenize("a == b"),
            Err(RenderError::UnexpectedChar { ch: '=', pos: 2 })
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            tokenize("'open"),
            Err(RenderError::UnterminatedString(0))
        );
    }
}

// Path template parser

use crate::error::QueryError;

use super::ast::{PathTemplate, TemplatePart, Token};

/// Splits a path template into literal runs and `{...}` tokens.
///
/// Directory separators and file extensions are plain literal text, so
/// `/foo/{id}.js` and `\foo\{id}.js` yield the same tokens. Unbalanced
/// braces are rejected rather than guessed at.
pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str) -> Result<PathTemplate, QueryError> {
        let mut parser = Self {
            input: template,
            pos: 0,
        };
        parser.parse_template()
    }

    fn parse_template(&mut self) -> Result<PathTemplate, QueryError> {
        let mut parts = Vec::new();
        let mut literal_buf = String::new();

        while let Some(ch) = self.peek_char() {
            match ch {
                '{' => {
                    if !literal_buf.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal_buf)));
                    }
                    let token = self.parse_token()?;
                    parts.push(TemplatePart::Token(token));
                }
                '}' => {
                    return Err(QueryError::UnexpectedClosingBrace { position: self.pos });
                }
                _ => {
                    literal_buf.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }

        if !literal_buf.is_empty() {
            parts.push(TemplatePart::Literal(literal_buf));
        }

        Ok(PathTemplate::new(parts))
    }

    fn parse_token(&mut self) -> Result<Token, QueryError> {
        let open = self.pos;
        self.pos += 1; // consume {

        let start = self.pos;
        loop {
            match self.peek_char() {
                Some('}') => break,
                Some('{') => return Err(QueryError::NestedBrace { position: self.pos }),
                Some(ch) => self.pos += ch.len_utf8(),
                None => return Err(QueryError::UnclosedToken { position: open }),
            }
        }

        let raw = &self.input[start..self.pos];
        self.pos += 1; // consume }

        if raw.is_empty() {
            return Err(QueryError::EmptyToken { position: open });
        }

        Token::parse(raw)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}

/// Ordered token inner-strings of a template.
pub fn extract_tokens(template: &str) -> Result<Vec<String>, QueryError> {
    let parsed = TemplateParser::parse(template)?;
    Ok(parsed.tokens().into_iter().map(|t| t.raw.clone()).collect())
}

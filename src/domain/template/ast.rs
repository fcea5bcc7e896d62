// Abstract Syntax Tree types for path templates

use crate::error::QueryError;

/// Separator between field identifiers inside a token.
pub const FIELD_SEPARATOR: &str = "__";

/// Represents a parsed path template as a list of parts
#[derive(Debug, Clone, PartialEq)]
pub struct PathTemplate {
    pub parts: Vec<TemplatePart>,
}

impl PathTemplate {
    pub fn new(parts: Vec<TemplatePart>) -> Self {
        Self { parts }
    }

    /// Get all tokens in this template, left to right
    pub fn tokens(&self) -> Vec<&Token> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                TemplatePart::Token(token) => Some(token),
                _ => None,
            })
            .collect()
    }

    /// Field paths of every token, in token order
    pub fn field_paths(&self) -> Vec<&FieldPath> {
        self.tokens().into_iter().map(|t| &t.field_path).collect()
    }
}

/// A template consists of literal runs and `{...}` tokens
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Literal(String),
    Token(Token),
}

/// A placeholder token: the literal text between the braces and the
/// nested field path it names
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub raw: String,
    pub field_path: FieldPath,
}

impl Token {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        Ok(Self {
            raw: raw.to_string(),
            field_path: FieldPath::parse(raw)?,
        })
    }
}

/// Ordered, non-empty list of field identifiers, e.g. `fields__name`
/// becomes `[fields, name]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Split a token on `__`. Identifiers are not case-normalised or
    /// charset-checked, but none of them may be empty.
    pub fn parse(token: &str) -> Result<Self, QueryError> {
        let identifiers: Vec<String> = token
            .split(FIELD_SEPARATOR)
            .map(|s| s.to_string())
            .collect();

        if identifiers.iter().any(|id| id.is_empty()) {
            return Err(QueryError::EmptyFieldIdentifier(token.to_string()));
        }

        Ok(Self(identifiers))
    }

    pub fn identifiers(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

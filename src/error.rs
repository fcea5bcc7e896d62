// Error handling for pathql

use std::fmt;

/// Errors raised while parsing path templates, extracting route
/// parameters or materialising page paths.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    UnexpectedClosingBrace { position: usize },
    NestedBrace { position: usize },
    UnclosedToken { position: usize },
    EmptyToken { position: usize },
    EmptyFieldIdentifier(String),
    InvalidIdentifier { token: String, identifier: String },
    MissingField { token: String, field: String },
    MissingParameter(String),
    UnsupportedValue { token: String, kind: &'static str },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnexpectedClosingBrace { position } => {
                write!(f, "Unexpected closing brace at position {}", position)
            }
            QueryError::NestedBrace { position } => {
                write!(f, "Opening brace inside a token at position {}", position)
            }
            QueryError::UnclosedToken { position } => {
                write!(f, "Token opened at position {} is never closed", position)
            }
            QueryError::EmptyToken { position } => {
                write!(f, "Empty token at position {}", position)
            }
            QueryError::EmptyFieldIdentifier(token) => {
                write!(f, "Token '{}' contains an empty field identifier", token)
            }
            QueryError::InvalidIdentifier { token, identifier } => write!(
                f,
                "Invalid field identifier '{}' in token '{}': must match [_A-Za-z][_0-9A-Za-z]*",
                identifier, token
            ),
            QueryError::MissingField { token, field } => {
                write!(f, "Record has no field '{}' for token '{}'", field, token)
            }
            QueryError::MissingParameter(token) => {
                write!(f, "Missing parameter for token '{}'", token)
            }
            QueryError::UnsupportedValue { token, kind } => write!(
                f,
                "Cannot use {} value of token '{}' as a path segment",
                kind, token
            ),
        }
    }
}

impl std::error::Error for QueryError {}

/// Short name of a JSON value's type, used in error messages.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// Page path resolution from route parameters

use serde_json::Value;

use crate::domain::params::{reverse_lookup, ParameterMap};
use crate::error::{value_kind, QueryError};

use super::ast::{PathTemplate, TemplatePart};
use super::parser::TemplateParser;

/// Materialises concrete page paths from a path template and the route
/// parameters extracted for one record.
pub struct PathResolver;

impl PathResolver {
    /// Substitute every token with its percent-encoded parameter. The
    /// template's file extension is dropped and a trailing `index`
    /// segment collapses onto its directory.
    pub fn resolve(template: &PathTemplate, params: &ParameterMap) -> Result<String, QueryError> {
        let mut result = String::new();
        let last = template.parts.len().saturating_sub(1);

        for (i, part) in template.parts.iter().enumerate() {
            match part {
                TemplatePart::Literal(s) if i == last => result.push_str(strip_extension(s)),
                TemplatePart::Literal(s) => result.push_str(s),
                TemplatePart::Token(token) => {
                    let value = params
                        .get(&token.raw)
                        .ok_or_else(|| QueryError::MissingParameter(token.raw.clone()))?;
                    let segment = segment_text(&token.raw, value)?;
                    result.push_str(&urlencoding::encode(&segment));
                }
            }
        }

        let index_dir = result
            .strip_suffix("index")
            .filter(|dir| dir.ends_with(['/', '\\']))
            .map(str::len);
        if let Some(len) = index_dir {
            result.truncate(len);
        }

        Ok(result)
    }

    /// Reverse lookup followed by resolution: the page path a router
    /// would generate for `record`.
    pub fn page_path_for(record: &Value, template: &str) -> Result<String, QueryError> {
        let parsed = TemplateParser::parse(template)?;
        let params = reverse_lookup(record, &parsed)?;
        Self::resolve(&parsed, &params)
    }
}

/// Parse `template` and substitute `params` into it.
pub fn derive_path(template: &str, params: &ParameterMap) -> Result<String, QueryError> {
    let parsed = TemplateParser::parse(template)?;
    PathResolver::resolve(&parsed, params)
}

fn strip_extension(literal: &str) -> &str {
    let file_start = literal.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match literal[file_start..].rfind('.') {
        Some(dot) => &literal[..file_start + dot],
        None => literal,
    }
}

fn segment_text(token: &str, value: &Value) -> Result<String, QueryError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(QueryError::UnsupportedValue {
            token: token.to_string(),
            kind: value_kind(other),
        }),
    }
}

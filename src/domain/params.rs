// Route parameter recovery from fetched records

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::QueryError;

use super::template::{PathTemplate, Token};

/// Route parameters keyed by the literal token text (`fields__name`),
/// in template token order.
pub type ParameterMap = IndexMap<String, Value>;

/// Walk `record` along every token's field path and bind the value found
/// to the token text. Only token values are copied out of the record.
///
/// A missing key, or a non-object value part way down a path, is an
/// error: no value is ever fabricated. An explicit `null` is bound as is.
pub fn reverse_lookup(record: &Value, template: &PathTemplate) -> Result<ParameterMap, QueryError> {
    let mut params = ParameterMap::new();

    for token in template.tokens() {
        let value = lookup_token(record, token)?;
        params.insert(token.raw.clone(), value.clone());
    }

    Ok(params)
}

fn lookup_token<'v>(record: &'v Value, token: &Token) -> Result<&'v Value, QueryError> {
    token
        .field_path
        .identifiers()
        .iter()
        .try_fold(record, |current, field| {
            current.get(field.as_str()).ok_or_else(|| QueryError::MissingField {
                token: token.raw.clone(),
                field: field.clone(),
            })
        })
}

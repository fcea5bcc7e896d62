// Domain model for collection route queries
//
// A collection route is a page file path such as `/blog/{fields__slug}.js`.
// Its tokens name the record fields a page needs; the same tokens let us
// read the route parameters back out of a fetched record.

pub mod params;
pub mod query;
pub mod selection;
pub mod template;

use serde_json::Value;

use crate::error::QueryError;
use params::ParameterMap;
use query::QueryShape;
use selection::SelectionNode;
use template::TemplateParser;

/// Build the GraphQL query fetching every field the template's tokens name.
///
/// `skeleton` is a model name (`Thing`), a root expression with arguments
/// (`allThing(filter: ...)`), or a full query containing
/// `...CollectionPagesQueryFragment`.
pub fn generate_query_from_string(skeleton: &str, template: &str) -> Result<String, QueryError> {
    let parsed = TemplateParser::parse(template)?;
    let selection = SelectionNode::from_paths(parsed.field_paths());
    Ok(QueryShape::classify(skeleton).compose(&selection))
}

/// Recover the route parameters `template` was resolved with for `record`.
pub fn reverse_lookup_params(record: &Value, template: &str) -> Result<ParameterMap, QueryError> {
    let parsed = TemplateParser::parse(template)?;
    params::reverse_lookup(record, &parsed)
}

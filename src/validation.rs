// Validation functions for pathql
// Stricter checks than the parser applies, for templates loaded from config

use crate::domain::template::{PathTemplate, TemplateParser};
use crate::error::QueryError;

/// Parse a template and check that every field identifier is a GraphQL name
///
/// Returns the parsed template if valid, Err(QueryError) otherwise
pub fn validate_template(template: &str) -> Result<PathTemplate, QueryError> {
    let parsed = TemplateParser::parse(template)?;

    for token in parsed.tokens() {
        if let Some(bad) = token
            .field_path
            .identifiers()
            .iter()
            .find(|id| !is_valid_field_name(id))
        {
            return Err(QueryError::InvalidIdentifier {
                token: token.raw.clone(),
                identifier: bad.clone(),
            });
        }
    }

    Ok(parsed)
}

/// Check if a name matches /[_A-Za-z][_0-9A-Za-z]*/
fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_field_names() {
        assert!(is_valid_field_name("id"));
        assert!(is_valid_field_name("_private"));
        assert!(is_valid_field_name("frontmatter2"));
        assert!(is_valid_field_name("camelCase"));
    }

    #[test]
    fn test_invalid_field_names() {
        assert!(!is_valid_field_name(""));
        assert!(!is_valid_field_name("2fast"));
        assert!(!is_valid_field_name("kebab-case"));
        assert!(!is_valid_field_name("Product.name"));
        assert!(!is_valid_field_name("naïve"));
    }

    #[test]
    fn test_validate_template_ok() {
        let parsed = validate_template("/blog/{id}/{fields__slug}.js").unwrap();
        assert_eq!(parsed.tokens().len(), 2);
    }

    #[test]
    fn test_validate_template_bad_identifier() {
        let result = validate_template("/blog/{fields__my-slug}.js");
        assert_eq!(
            result,
            Err(QueryError::InvalidIdentifier {
                token: "fields__my-slug".to_string(),
                identifier: "my-slug".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_template_propagates_parse_errors() {
        assert!(matches!(
            validate_template("/blog/{id.js"),
            Err(QueryError::UnclosedToken { .. })
        ));
    }
}

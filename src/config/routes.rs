use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::{
    config::route_settings::RouteSettings, services::serializers::serializer_for_path,
    validation::validate_template,
};

pub const DEFAULT_CONFIG_FILE: &str = "routes.yml";

/// Read and validate a routes file. Route names must be unique and every
/// template must parse with GraphQL-name identifiers.
pub fn load_routes(maybe_path: Option<&Path>) -> Result<Vec<RouteSettings>> {
    let path = maybe_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read routes file {}", path.display()))?;

    let routes = serializer_for_path(path)
        .deserialize(&content)
        .with_context(|| format!("Invalid routes file {}", path.display()))?;

    validate_routes(&routes)?;
    debug!(count = routes.len(), path = %path.display(), "loaded routes");

    Ok(routes)
}

pub fn validate_routes(routes: &[RouteSettings]) -> Result<()> {
    let mut seen = HashSet::new();
    for route in routes {
        if !seen.insert(route.name.as_str()) {
            bail!("Duplicate route name: {}", route.name);
        }
        validate_template(&route.template)
            .with_context(|| format!("Invalid template for route '{}'", route.name))?;
    }
    Ok(())
}

// Collection service - plans queries and pages for configured routes

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::{route_settings::RouteSettings, validate_routes},
    domain::{
        generate_query_from_string,
        params::{reverse_lookup, ParameterMap},
        template::{PathResolver, PathTemplate, TemplateParser},
    },
};

/// A page the router would create for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagePlan {
    pub path: String,
    pub params: ParameterMap,
}

#[derive(Debug, Default, Serialize)]
pub struct PlanResult {
    pub pages: Vec<PagePlan>,
    pub skipped: usize,
    pub errors: Vec<String>,
}

struct CollectionRoute {
    settings: RouteSettings,
    template: PathTemplate,
}

pub struct CollectionService {
    routes: IndexMap<String, CollectionRoute>,
}

impl CollectionService {
    /// Route names must be unique and templates valid, as for a loaded
    /// routes file
    pub fn new(settings: Vec<RouteSettings>) -> Result<Self> {
        validate_routes(&settings)?;

        let mut routes = IndexMap::new();
        for route in settings {
            let template = TemplateParser::parse(&route.template)
                .with_context(|| format!("Invalid template for route '{}'", route.name))?;
            routes.insert(
                route.name.clone(),
                CollectionRoute {
                    settings: route,
                    template,
                },
            );
        }
        Ok(Self { routes })
    }

    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(|k| k.as_str())
    }

    /// The query of every route, in file order
    pub fn queries(&self) -> Result<Vec<(String, String)>> {
        self.routes
            .values()
            .map(|route| -> Result<(String, String)> {
                let query = generate_query_from_string(&route.settings.query, &route.settings.template)
                    .with_context(|| format!("Failed to build query for route '{}'", route.settings.name))?;
                Ok((route.settings.name.clone(), query))
            })
            .collect()
    }

    /// Page paths and parameters for each fetched record of a route.
    /// Records the template cannot be resolved against are skipped.
    pub fn plan_pages(&self, route_name: &str, records: &[Value]) -> Result<PlanResult> {
        let route = self
            .routes
            .get(route_name)
            .with_context(|| format!("Unknown route: {}", route_name))?;

        let mut result = PlanResult::default();

        for (index, record) in records.iter().enumerate() {
            let planned = reverse_lookup(record, &route.template).and_then(|params| {
                PathResolver::resolve(&route.template, &params).map(|path| PagePlan { path, params })
            });

            match planned {
                Ok(page) => result.pages.push(page),
                Err(e) => {
                    warn!(route = route_name, index, error = %e, "skipping record");
                    result.skipped += 1;
                    result.errors.push(format!("record {}: {}", index, e));
                }
            }
        }

        debug!(
            route = route_name,
            pages = result.pages.len(),
            skipped = result.skipped,
            "planned pages"
        );

        Ok(result)
    }
}

use serde::{Deserialize, Serialize};

/// One collection route entry of the routes file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteSettings {
    pub name: String,
    pub template: String,
    /// Model name, root expression or full query skeleton
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

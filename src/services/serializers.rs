// Serializers for route files

use anyhow::Result;
use std::path::Path;

use crate::config::route_settings::RouteSettings;

/// Strategy trait for route file formats
pub trait RouteSerializer: Send + Sync {
    fn serialize(&self, routes: &[RouteSettings]) -> Result<String>;
    fn deserialize(&self, content: &str) -> Result<Vec<RouteSettings>>;
    fn file_extension(&self) -> &'static str;
}

/// YAML serializer (default format)
pub struct YamlSerializer;

impl RouteSerializer for YamlSerializer {
    fn serialize(&self, routes: &[RouteSettings]) -> Result<String> {
        Ok(serde_yaml::to_string(routes)?)
    }

    fn deserialize(&self, content: &str) -> Result<Vec<RouteSettings>> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn file_extension(&self) -> &'static str {
        "yml"
    }
}

/// JSON serializer
pub struct JsonSerializer;

impl RouteSerializer for JsonSerializer {
    fn serialize(&self, routes: &[RouteSettings]) -> Result<String> {
        Ok(serde_json::to_string_pretty(routes)?)
    }

    fn deserialize(&self, content: &str) -> Result<Vec<RouteSettings>> {
        Ok(serde_json::from_str(content)?)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

/// Serializer whose file extension matches `ext` (`yaml` is read as `yml`)
pub fn serializer_for_extension(ext: &str) -> Option<Box<dyn RouteSerializer>> {
    let ext = if ext.eq_ignore_ascii_case("yaml") { "yml" } else { ext };
    let serializers: [Box<dyn RouteSerializer>; 2] =
        [Box::new(YamlSerializer), Box::new(JsonSerializer)];
    serializers
        .into_iter()
        .find(|s| s.file_extension().eq_ignore_ascii_case(ext))
}

/// Pick a serializer from the file extension; unknown extensions are YAML
pub fn serializer_for_path(path: &Path) -> Box<dyn RouteSerializer> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(serializer_for_extension)
        .unwrap_or_else(|| Box::new(YamlSerializer))
}

// Common test utilities shared across test files

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `content` to a temporary routes file with the given extension
#[allow(dead_code)]
pub fn routes_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("routes")
        .suffix(&format!(".{}", extension))
        .tempfile()
        .expect("Failed to create temp routes file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp routes file");
    file
}

#[allow(dead_code)]
pub const ROUTES_YAML: &str = r#"
- name: things
  template: /things/{id}.js
  query: Thing
- name: topics
  template: /topics/{frontmatter__topic}.js
  description: One page per topic
  query: |
    allMarkdownRemark {
      group(field: frontmatter___topic) {
        ...CollectionPagesQueryFragment
      }
    }
"#;

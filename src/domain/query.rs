// Query composition for collection routes

use tracing::debug;

use super::selection::SelectionNode;

/// Fragment spread a caller places in a full query skeleton to mark where
/// the generated `nodes{...}` selection goes.
pub const FRAGMENT_SENTINEL: &str = "...CollectionPagesQueryFragment";

/// Prefix of the connection field that lists all records of a type.
pub const ALL_PREFIX: &str = "all";

/// Root connection field for a skeleton: `Thing` becomes `allThing`,
/// `allThing` and `allThing(filter: ...)` are returned unchanged, and
/// `Thing(limit: 2)` becomes `allThing(limit: 2)`.
pub fn resolve_root_field(skeleton: &str) -> String {
    if skeleton.starts_with(ALL_PREFIX) {
        skeleton.to_string()
    } else {
        format!("{}{}", ALL_PREFIX, skeleton)
    }
}

/// How the generated selection is placed into the caller's skeleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryShape<'a> {
    /// `{<root>{nodes{<selection>}}}`
    Simple(String),
    /// The skeleton with the fragment sentinel replaced in place
    FragmentSubstitution(&'a str),
}

impl<'a> QueryShape<'a> {
    /// Chosen purely by whether the skeleton contains the fragment sentinel
    pub fn classify(skeleton: &'a str) -> Self {
        if skeleton.contains(FRAGMENT_SENTINEL) {
            QueryShape::FragmentSubstitution(skeleton)
        } else {
            QueryShape::Simple(resolve_root_field(skeleton))
        }
    }

    pub fn compose(&self, selection: &SelectionNode) -> String {
        let nodes = format!("nodes{{{}}}", selection.render());
        match self {
            QueryShape::Simple(root) => {
                debug!(root = %root, "composing simple collection query");
                format!("{{{}{{{}}}}}", root, nodes)
            }
            QueryShape::FragmentSubstitution(skeleton) => {
                debug!("substituting collection selection into query fragment");
                skeleton.replacen(FRAGMENT_SENTINEL, &nodes, 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::FieldPath;

    fn selection(tokens: &[&str]) -> SelectionNode {
        let paths: Vec<FieldPath> = tokens.iter().map(|t| FieldPath::parse(t).unwrap()).collect();
        SelectionNode::from_paths(&paths)
    }

    #[test]
    fn test_resolve_bare_model() {
        assert_eq!(resolve_root_field("Thing"), "allThing");
    }

    #[test]
    fn test_resolve_already_prefixed() {
        assert_eq!(resolve_root_field("allThing"), "allThing");
    }

    #[test]
    fn test_resolve_keeps_arguments() {
        assert_eq!(
            resolve_root_field("allThing(filter: { main_url: { nin: [] }})"),
            "allThing(filter: { main_url: { nin: [] }})"
        );
        assert_eq!(
            resolve_root_field("Thing(limit: 2)"),
            "allThing(limit: 2)"
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let once = resolve_root_field("MarkdownRemark");
        assert_eq!(resolve_root_field(&once), once);
    }

    #[test]
    fn test_classify_simple() {
        assert_eq!(
            QueryShape::classify("Thing"),
            QueryShape::Simple("allThing".to_string())
        );
    }

    #[test]
    fn test_classify_fragment() {
        let skeleton = "allThing { group(field: x) { ...CollectionPagesQueryFragment } }";
        assert_eq!(
            QueryShape::classify(skeleton),
            QueryShape::FragmentSubstitution(skeleton)
        );
    }

    #[test]
    fn test_compose_simple() {
        let shape = QueryShape::Simple("allThing".to_string());
        assert_eq!(
            shape.compose(&selection(&["id", "fields__name"])),
            "{allThing{nodes{id,fields{name}}}}"
        );
    }

    #[test]
    fn test_compose_simple_empty_selection() {
        let shape = QueryShape::Simple("allThing".to_string());
        assert_eq!(shape.compose(&SelectionNode::new()), "{allThing{nodes{}}}");
    }

    #[test]
    fn test_compose_fragment_preserves_surroundings() {
        let skeleton = "allThing {\n  group(field: a___b) {\n    ...CollectionPagesQueryFragment\n  }\n}";
        let shape = QueryShape::FragmentSubstitution(skeleton);
        assert_eq!(
            shape.compose(&selection(&["a__b"])),
            "allThing {\n  group(field: a___b) {\n    nodes{a{b}}\n  }\n}"
        );
    }

    #[test]
    fn test_compose_fragment_replaces_first_spread_only() {
        let skeleton = "...CollectionPagesQueryFragment ...CollectionPagesQueryFragment";
        let shape = QueryShape::FragmentSubstitution(skeleton);
        assert_eq!(
            shape.compose(&selection(&["id"])),
            "nodes{id} ...CollectionPagesQueryFragment"
        );
    }
}

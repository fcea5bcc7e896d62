// GraphQL selection set built from template field paths

use indexmap::IndexMap;

use super::template::FieldPath;

/// A node of the selection tree. Children keep first-insertion order and
/// a shared prefix always reuses the existing child, so no field name
/// appears twice among siblings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionNode {
    children: IndexMap<String, SelectionNode>,
}

impl SelectionNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every field path into one tree rooted at an implicit root
    pub fn from_paths<'a, I>(paths: I) -> Self
    where
        I: IntoIterator<Item = &'a FieldPath>,
    {
        let mut root = Self::new();
        for path in paths {
            root.insert(path);
        }
        root
    }

    pub fn insert(&mut self, path: &FieldPath) {
        let mut node = self;
        for identifier in path.identifiers() {
            node = node.children.entry(identifier.clone()).or_default();
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, identifier: &str) -> Option<&SelectionNode> {
        self.children.get(identifier)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(|k| k.as_str())
    }

    /// Render the children as `a,b{c,d{e}}`. Leaves carry no braces.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        for (i, (name, child)) in self.children.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(name);
            if !child.is_leaf() {
                out.push('{');
                child.render_into(out);
                out.push('}');
            }
        }
    }
}

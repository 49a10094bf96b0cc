use std::cell::RefCell;

/// Names starting with this byte are emitted verbatim, without tag wrapping
/// (`<!DOCTYPE html>`, `<?xml version="1.0"?>`).
pub const DECLARATION_MARKER: char = '<';

/// One element of a markup tree.
///
/// A node owns its children; appending moves the child in, so a node is
/// linked into at most one parent. Attribute and style keys are unique and
/// case-sensitive. Their order is an implementation detail: output that
/// contains several of them must not be compared by position.
#[derive(Clone, Debug, Default)]
pub struct Node {
    name: String,
    attributes: Vec<(String, Option<String>)>,
    style: Vec<(String, String)>,
    content: String,
    trailing_content: String,
    children: Vec<Node>,
    // Last inner markup accumulated by `serialize`; read by `render_flat`.
    rendered_inner: RefCell<String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_declaration(&self) -> bool {
        self.name.starts_with(DECLARATION_MARKER)
    }

    /// Appends `child` as the new last child and returns a handle to it.
    pub fn add_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn add_new_child(&mut self, name: impl Into<String>) -> &mut Node {
        self.add_child(Node::new(name))
    }

    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.upsert_attribute(key.into(), Some(value.into()));
        self
    }

    /// Adds an attribute that renders as its bare name, like `disabled`.
    pub fn add_valueless_attribute(&mut self, key: impl Into<String>) -> &mut Self {
        self.upsert_attribute(key.into(), None);
        self
    }

    fn upsert_attribute(&mut self, key: String, value: Option<String>) {
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn add_style(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.style.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.style.push((key, value)),
        }
        self
    }

    pub fn add_content(&mut self, text: &str) -> &mut Self {
        self.content.push_str(text);
        self
    }

    /// Appends text that is placed after the children, right before the
    /// closing tag.
    pub fn add_trailing_content(&mut self, text: &str) -> &mut Self {
        self.trailing_content.push_str(text);
        self
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
        self.rendered_inner.get_mut().clear();
    }

    pub fn attributes(&self) -> &[(String, Option<String>)] {
        &self.attributes
    }

    /// `Some(None)` for a valueless attribute, `None` when absent.
    pub fn attribute(&self, key: &str) -> Option<Option<&str>> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.iter().any(|(k, _)| k == key)
    }

    pub fn style(&self) -> &[(String, String)] {
        &self.style
    }

    pub fn style_value(&self, key: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn trailing_content(&self) -> &str {
        &self.trailing_content
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn count_children(&self) -> usize {
        self.children.len()
    }

    /// Number of children that follow the child at `index`.
    pub fn count_siblings_after(&self, index: usize) -> usize {
        self.children.len().saturating_sub(index + 1)
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }

    pub fn last_child_mut(&mut self) -> Option<&mut Node> {
        self.children.last_mut()
    }

    /// The sibling right after the child at `index`.
    pub fn next_sibling(&self, index: usize) -> Option<&Node> {
        self.children.get(index.checked_add(1)?)
    }

    pub(crate) fn rendered_inner(&self) -> &RefCell<String> {
        &self.rendered_inner
    }
}

// The render cache is not part of a node's identity.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.attributes == other.attributes
            && self.style == other.style
            && self.content == other.content
            && self.trailing_content == other.trailing_content
            && self.children == other.children
    }
}

use css::Stylesheet;
use markup::{MarkupResult, Node};
use std::fmt::{self, Write};

/// A titled markup tree, the unit of serialization.
///
/// The root is usually a declaration node (`<!DOCTYPE html>`, an XML
/// prolog) whose only child is the real root element. Every render walks
/// the tree again; nothing is cached across calls.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    title: String,
    root: Node,
}

impl Document {
    pub fn new(title: impl Into<String>, root_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            root: Node::new(root_name),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Prefix lookup from the root; see [`Node::find_descendant_by_name`].
    pub fn find_by_name(&self, name: &str) -> MarkupResult<&Node> {
        self.root.find_descendant_by_name(name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> MarkupResult<&mut Node> {
        self.root.find_descendant_by_name_mut(name)
    }

    pub fn render_markup(&self, indent: bool) -> String {
        markup::serialize(&self.root, indent, 0)
    }

    pub fn stylesheet(&self) -> Stylesheet {
        css::collect_stylesheet(&self.root)
    }

    pub fn render_css(&self) -> String {
        css::serialize_css(&self.root)
    }

    pub fn outline(&self, cap: usize) -> Vec<String> {
        markup::debug::outline(&self.root, cap)
    }

    /// Title, root summary, indented markup and CSS, for debugging.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(&mut out, "Page title: {}", self.title);
        let _ = writeln!(&mut out, "Page root tag name: {}", self.root.name());
        let _ = writeln!(
            &mut out,
            "Root tag children count: {}",
            self.root.count_children()
        );
        let _ = writeln!(&mut out, "HTML:\n{}", self.render_markup(true));
        let _ = writeln!(&mut out, "CSS:\n{}", self.render_css());
        out
    }
}

/// Non-indented markup.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_markup(false))
    }
}

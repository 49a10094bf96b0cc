//! Markup serialization.
//!
//! A node with children is rendered in two steps: the children are
//! serialized one level deeper and concatenated between the node's content
//! and trailing content, that accumulated inner markup is stored on the
//! node, and the node is then flat-rendered around it. Flat rendering
//! never revisits children.

use crate::Node;

const INDENT_UNIT: &str = "  ";

/// Indentation for a node at `depth`. Depths 0 and 1 are flush left.
fn spacing(depth: usize) -> String {
    INDENT_UNIT.repeat(depth.saturating_sub(1))
}

/// Space separated `key="value"` pairs; valueless attributes render as the
/// bare key.
pub fn attribute_string(node: &Node) -> String {
    let mut out = String::new();
    for (key, value) in node.attributes() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(key);
        if let Some(value) = value {
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
    out
}

impl Node {
    /// Renders this node alone, using the inner markup stored by the last
    /// [`serialize`] call when the node has children.
    pub fn render_flat(&self, indent: bool, depth: usize) -> String {
        let newline = if indent { "\n" } else { "" };
        let inner = self.rendered_inner().borrow();
        let has_inner = self.has_children() && !inner.is_empty();

        if self.is_declaration() {
            let mut out = String::with_capacity(self.name().len() + inner.len() + 1);
            out.push_str(self.name());
            out.push_str(newline);
            if has_inner {
                out.push_str(&inner);
            } else {
                out.push_str(self.content());
                out.push_str(self.trailing_content());
            }
            return out;
        }

        let spacing = if indent { spacing(depth) } else { String::new() };
        let attrs = attribute_string(self);

        let mut out = String::new();
        out.push_str(&spacing);
        out.push('<');
        out.push_str(self.name());
        if !attrs.is_empty() {
            out.push(' ');
            out.push_str(&attrs);
        }

        if has_inner {
            out.push('>');
            out.push_str(newline);
            if !indent || inner.starts_with(' ') {
                out.push_str(&inner);
            } else {
                out.push_str(&spacing);
                out.push_str(&inner);
                out.push_str(newline);
            }
            out.push_str(&spacing);
        } else if self.content().is_empty() && self.trailing_content().is_empty() {
            out.push_str(" />");
            return out;
        } else {
            out.push('>');
            out.push_str(self.content());
            out.push_str(self.trailing_content());
        }

        out.push_str("</");
        out.push_str(self.name());
        out.push('>');
        out
    }
}

/// Serializes `node` and its subtree, starting at `depth`.
///
/// Every node with children has its stored inner markup refreshed, so a
/// later [`Node::render_flat`] reflects the current children. The output
/// itself depends only on the tree, so repeated calls return the same text.
pub fn serialize(node: &Node, indent: bool, depth: usize) -> String {
    let newline = if indent { "\n" } else { "" };

    if !node.has_children() {
        let mut out = node.render_flat(indent, depth);
        out.push_str(newline);
        return out;
    }

    let mut inner = String::from(node.content());
    for child in node.children() {
        inner.push_str(&serialize(child, indent, depth + 1));
    }
    inner.push_str(node.trailing_content());

    log::trace!(
        target: "markup.serialize",
        "<{}> depth={depth} children={} inner_bytes={}",
        node.name(),
        node.count_children(),
        inner.len()
    );

    *node.rendered_inner().borrow_mut() = inner;

    let mut out = node.render_flat(indent, depth);
    if depth > 0 {
        out.push_str(newline);
    }
    out
}

/// Non-indented markup for `node`, the canonical textual form.
pub fn to_markup(node: &Node) -> String {
    serialize(node, false, 0)
}

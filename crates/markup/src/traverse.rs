use crate::{MarkupError, MarkupResult, Node};

impl Node {
    /// Finds the first node, in pre-order starting with `self`, whose name
    /// starts with `name`.
    ///
    /// This is a prefix match: `"head"` finds a `header` element, and `"h"`
    /// finds whichever of `h1`, `head`, `html` comes first.
    pub fn find_descendant_by_name(&self, name: &str) -> MarkupResult<&Node> {
        find_prefixed(self, name).ok_or_else(|| {
            log::debug!("no tag matching {name:?} under <{}>", self.name());
            MarkupError::not_found(name)
        })
    }

    pub fn find_descendant_by_name_mut(&mut self, name: &str) -> MarkupResult<&mut Node> {
        let searched_from = self.name().to_string();
        find_prefixed_mut(self, name).ok_or_else(|| {
            log::debug!("no tag matching {name:?} under <{searched_from}>");
            MarkupError::not_found(name)
        })
    }

    /// Same search order as [`Node::find_descendant_by_name`], but the name
    /// has to match exactly.
    pub fn find_exact(&self, name: &str) -> Option<&Node> {
        descendants(self).find(|node| node.name() == name)
    }

    pub fn find_exact_mut(&mut self, name: &str) -> Option<&mut Node> {
        if self.name() == name {
            return Some(self);
        }
        self.children_mut()
            .iter_mut()
            .find_map(|child| child.find_exact_mut(name))
    }
}

fn find_prefixed<'a>(node: &'a Node, name: &str) -> Option<&'a Node> {
    descendants(node).find(|n| n.name().starts_with(name))
}

fn find_prefixed_mut<'a>(node: &'a mut Node, name: &str) -> Option<&'a mut Node> {
    if node.name().starts_with(name) {
        return Some(node);
    }
    for child in node.children_mut() {
        if let Some(found) = find_prefixed_mut(child, name) {
            return Some(found);
        }
    }
    None
}

/// Pre-order iterator over `root` and its whole subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

pub fn descendants(root: &Node) -> Descendants<'_> {
    Descendants { stack: vec![root] }
}

pub fn count_nodes(root: &Node) -> usize {
    descendants(root).count()
}

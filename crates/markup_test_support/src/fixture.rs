//! TOML description of node trees plus their expected output.
//!
//! ```toml
//! [[case]]
//! name = "content precedes children"
//! markup = "<div>A<span /></div>"
//!
//! [case.tree]
//! name = "div"
//! content = "A"
//!
//! [[case.tree.children]]
//! name = "span"
//! ```

use markup::Node;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct FixtureFile {
    #[serde(rename = "case", default)]
    pub cases: Vec<RenderCase>,
}

#[derive(Debug, Deserialize)]
pub struct RenderCase {
    pub name: String,
    #[serde(default)]
    pub indent: bool,
    pub tree: FixtureNode,
    /// Expected markup, if the case checks markup.
    pub markup: Option<String>,
    /// Expected CSS, if the case checks CSS.
    pub css: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureNode {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<FixtureAttribute>,
    #[serde(default)]
    pub style: Vec<FixtureStyle>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub trailing: String,
    #[serde(default)]
    pub children: Vec<FixtureNode>,
}

/// An attribute without `value` is valueless.
#[derive(Debug, Deserialize)]
pub struct FixtureAttribute {
    pub key: String,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureStyle {
    pub key: String,
    pub value: String,
}

impl FixtureNode {
    /// Builds the tree through the public construction API only.
    pub fn build(&self) -> Node {
        let mut node = Node::new(self.name.as_str());
        self.apply(&mut node);
        node
    }

    fn apply(&self, node: &mut Node) {
        for attr in &self.attributes {
            match &attr.value {
                Some(value) => node.add_attribute(attr.key.as_str(), value.as_str()),
                None => node.add_valueless_attribute(attr.key.as_str()),
            };
        }
        for entry in &self.style {
            node.add_style(entry.key.as_str(), entry.value.as_str());
        }
        node.add_content(&self.content);
        node.add_trailing_content(&self.trailing);
        for child in &self.children {
            let built = node.add_new_child(child.name.as_str());
            child.apply(built);
        }
    }
}

pub fn load_fixture(path: &Path) -> FixtureFile {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()));
    toml::from_str(&text)
        .unwrap_or_else(|err| panic!("failed to parse fixture {}: {err}", path.display()))
}

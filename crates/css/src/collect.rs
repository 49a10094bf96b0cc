use crate::syntax::{Declaration, Rule, Selector, Stylesheet};
use markup::{Node, descendants};

// `#id` wins over `.class`, which wins over the tag name. Valueless
// attributes do not name anything and are skipped.
pub fn selector_for(node: &Node) -> Selector {
    if let Some(Some(id)) = node.attribute("id") {
        return Selector::Id(id.to_string());
    }
    if let Some(Some(class)) = node.attribute("class") {
        return Selector::Class(class.to_string());
    }
    Selector::Type(node.name().to_string())
}

/// The rule contributed by `node` alone, `None` when it has no style.
pub fn rule_for(node: &Node) -> Option<Rule> {
    if node.style().is_empty() {
        return None;
    }
    let declarations = node
        .style()
        .iter()
        .map(|(name, value)| Declaration {
            name: name.clone(),
            value: value.clone(),
        })
        .collect();
    Some(Rule {
        selector: selector_for(node),
        declarations,
    })
}

/// Rules for `root` and its subtree: a node's own rule comes before the
/// rules of its children, children in sibling order.
pub fn collect_stylesheet(root: &Node) -> Stylesheet {
    let rules: Vec<Rule> = descendants(root).filter_map(rule_for).collect();
    log::trace!(target: "css.collect", "<{}>: {} rules", root.name(), rules.len());
    Stylesheet { rules }
}

/// Page-level CSS text for `root`.
pub fn serialize_css(root: &Node) -> String {
    collect_stylesheet(root).to_string()
}

#[cfg(test)]
mod tests {
    use super::{collect_stylesheet, rule_for, selector_for, serialize_css};
    use crate::Selector;
    use markup::Node;

    #[test]
    fn id_selector_block() {
        let mut node = Node::new("div");
        node.add_attribute("id", "x").add_style("color", "red");
        assert_eq!(serialize_css(&node), "#x {\n  color: red;\n}\n\n");
    }

    #[test]
    fn selector_precedence() {
        let mut node = Node::new("div");
        assert_eq!(selector_for(&node), Selector::Type("div".into()));
        node.add_attribute("class", "box");
        assert_eq!(selector_for(&node), Selector::Class("box".into()));
        node.add_attribute("id", "main");
        assert_eq!(selector_for(&node), Selector::Id("main".into()));

        let mut valueless = Node::new("span");
        valueless.add_valueless_attribute("id");
        assert_eq!(selector_for(&valueless), Selector::Type("span".into()));
    }

    #[test]
    fn unstyled_nodes_contribute_nothing() {
        let mut body = Node::new("body");
        body.add_attribute("id", "b");
        body.add_new_child("p").add_content("plain");
        assert!(rule_for(&body).is_none());
        assert_eq!(serialize_css(&body), "");
    }

    #[test]
    fn multiple_declarations_in_one_block() {
        let mut body = Node::new("body");
        body.add_style("color", "#202020")
            .add_style("background-color", "#A0A0A0");
        let css = serialize_css(&body);

        assert!(css.starts_with("body {\n"));
        assert!(css.ends_with("}\n\n"));
        assert!(css.contains("  color: #202020;\n"));
        assert!(css.contains("  background-color: #A0A0A0;\n"));
        assert_eq!(css.lines().count(), 5);
    }

    #[test]
    fn parent_rule_precedes_children_rules() {
        let mut root = Node::new("<!DOCTYPE html>");
        let body = root.add_new_child("html").add_new_child("body");
        body.add_style("margin", "3em");
        let h1 = body.add_new_child("h1");
        h1.add_style("margin", "1em");
        h1.add_new_child("span").add_style("color", "red");
        body.add_new_child("div")
            .add_attribute("id", "box0")
            .add_style("padding-left", "3em");

        assert_eq!(
            serialize_css(&root),
            "body {\n  margin: 3em;\n}\n\n\
             h1 {\n  margin: 1em;\n}\n\n\
             span {\n  color: red;\n}\n\n\
             #box0 {\n  padding-left: 3em;\n}\n\n"
        );
    }

    #[test]
    fn equal_selectors_are_not_merged() {
        let mut ul = Node::new("ul");
        ul.add_new_child("li").add_style("color", "red");
        ul.add_new_child("li").add_style("color", "blue");

        let sheet = collect_stylesheet(&ul);
        assert_eq!(sheet.len(), 2);
        assert_eq!(
            sheet.to_string(),
            "li {\n  color: red;\n}\n\nli {\n  color: blue;\n}\n\n"
        );
    }

    #[test]
    fn css_output_is_stable() {
        let mut div = Node::new("div");
        div.add_style("a", "1").add_style("b", "2");
        div.add_new_child("p").add_style("c", "3");
        assert_eq!(serialize_css(&div), serialize_css(&div));
    }
}

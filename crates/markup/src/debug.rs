use crate::Node;
use std::fmt::Write;

const INDENT_STEP: &str = "  ";
const PREVIEW_CHARS: usize = 40;

/// Up to three `prop: value;` declarations joined by spaces.
pub fn first_styles(style: &[(String, String)]) -> String {
    let mut out = String::new();
    for (i, (k, v)) in style.iter().take(3).enumerate() {
        if i != 0 {
            out.push(' ');
        }
        let _ = write!(&mut out, "{k}: {v};");
    }
    out
}

fn push_preview(out: &mut String, s: &str, max_chars: usize) {
    let mut truncated = false;
    for (i, ch) in s.chars().enumerate() {
        if i == max_chars {
            truncated = true;
            break;
        }
        out.push(if ch == '\n' { ' ' } else { ch });
    }
    if truncated {
        out.push('…');
    }
}

/// One line per node, at most `cap` nodes, for eyeballing a tree while
/// building it.
pub fn outline(root: &Node, cap: usize) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;

        let indent = INDENT_STEP.repeat(depth);
        let mut line = String::with_capacity(indent.len() + 64);
        line.push_str(&indent);

        if node.is_declaration() {
            line.push_str(node.name());
        } else {
            line.push('<');
            line.push_str(node.name());
            for key in ["id", "class"] {
                if let Some(Some(value)) = node.attribute(key)
                    && !value.is_empty()
                {
                    let _ = write!(&mut line, r#" {key}="{value}""#);
                }
            }
            line.push('>');
        }

        let content = node.content().trim();
        if !content.is_empty() {
            line.push_str(" \"");
            push_preview(&mut line, content, PREVIEW_CHARS);
            line.push('"');
        }

        let styles = first_styles(node.style());
        if !styles.is_empty() {
            line.push_str("  /* ");
            line.push_str(&styles);
            line.push_str(" */");
        }
        out.push(line);

        for child in node.children() {
            walk(child, depth + 1, out, left);
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}

#[cfg(test)]
mod tests {
    use super::{first_styles, outline};
    use crate::Node;

    #[test]
    fn first_styles_caps_at_three() {
        let style = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("c".to_string(), "3".to_string()),
            ("d".to_string(), "4".to_string()),
        ];
        assert_eq!(first_styles(&style), "a: 1; b: 2; c: 3;");
        assert_eq!(first_styles(&[]), "");
    }

    #[test]
    fn outline_lists_nodes_with_ids_and_styles() {
        let mut root = Node::new("<!DOCTYPE html>");
        let html = root.add_new_child("html");
        let body = html.add_new_child("body");
        body.add_style("margin", "3em");
        body.add_new_child("div")
            .add_attribute("id", "box0")
            .add_content("Speaks browser");

        assert_eq!(
            outline(&root, 10),
            [
                "<!DOCTYPE html>",
                "  <html>",
                "    <body>  /* margin: 3em; */",
                "      <div id=\"box0\"> \"Speaks browser\"",
            ]
        );
    }

    #[test]
    fn outline_respects_cap_and_truncates_content() {
        let mut root = Node::new("p");
        root.add_content(&"x".repeat(50));
        root.add_new_child("span");
        let lines = outline(&root, 1);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("…\""));
    }
}

use crate::Node;
use crate::traverse::descendants;

/// Collect <link rel="stylesheet" href="…"> href values, in document order.
pub fn collect_stylesheet_hrefs(root: &Node) -> Vec<String> {
    descendants(root)
        .filter(|node| {
            node.name() == "link"
                && node
                    .attribute("rel")
                    .flatten()
                    .is_some_and(|rel| rel.split_whitespace().any(|t| t == "stylesheet"))
        })
        .filter_map(|node| node.attribute("href").flatten())
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

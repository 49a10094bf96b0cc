//! Page-level CSS collected from the `style` declarations of a markup tree.

pub mod collect;
pub mod syntax;

// Re-exports so other crates can just use `css::...` nicely.
pub use collect::{collect_stylesheet, rule_for, selector_for, serialize_css};
pub use syntax::{Declaration, Rule, Selector, Stylesheet};

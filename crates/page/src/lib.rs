//! Whole documents on top of `markup` trees: HTML5 and TinySVG presets,
//! styling helpers and a per-route cache of rendered output.

pub mod cache;
pub mod html5;
pub mod styling;
pub mod svg;

mod document;

pub use cache::{ContentType, PageCache, Published};
pub use document::Document;
pub use html5::{HTML5_DOCTYPE, google_font_url};
pub use styling::{BoxStyle, Styling};
pub use svg::{Color, Font, Pos, Radius, Shapes, Size, new_tiny_svg};

pub use markup::{MarkupError, MarkupResult, Node};

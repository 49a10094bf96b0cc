//! TinySVG 1.2 documents and shape helpers.

use crate::Document;
use markup::{MarkupResult, Node};
use std::fmt;

pub const TINY_SVG_PROLOG: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    "\n",
    r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.2 Tiny//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11-tiny.dtd">"#
);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Radius {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub size: u32,
}

pub const fn pos(x: i32, y: i32) -> Pos {
    Pos { x, y }
}

pub const fn size(w: i32, h: i32) -> Size {
    Size { w, h }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// A CSS color name such as `red`.
    Named(String),
    /// Alpha runs from 0.0 (transparent) to 1.0 (opaque).
    Rgba { r: u8, g: u8, b: u8, a: f64 },
}

impl Color {
    pub const OPAQUE: f64 = 1.0;
    pub const TRANSPARENT: f64 = 0.0;

    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba {
            r,
            g,
            b,
            a: Self::OPAQUE,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        match self {
            Color::Named(name) => name.is_empty(),
            Color::Rgba { a, .. } => *a <= Self::TRANSPARENT,
        }
    }
}

// `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgba { r, g, b, a } if *a >= Self::OPAQUE => {
                write!(f, "#{r:02x}{g:02x}{b:02x}")
            }
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a:.6})"),
        }
    }
}

/// A TinySVG document: XML prolog and DOCTYPE as the declaration root,
/// with one `svg` element whose viewBox is `origin` and `size`.
pub fn new_tiny_svg(origin: Pos, size: Size) -> Document {
    let mut doc = Document::new("", TINY_SVG_PROLOG);
    doc.root_mut()
        .add_new_child("svg")
        .add_attribute("xmlns", "http://www.w3.org/2000/svg")
        .add_attribute("version", "1.2")
        .add_attribute("baseProfile", "tiny")
        .add_attribute(
            "viewBox",
            format!("{} {} {} {}", origin.x, origin.y, size.w, size.h),
        );
    doc
}

/// The `svg` element of a document made by [`new_tiny_svg`].
pub fn svg_root_mut(doc: &mut Document) -> MarkupResult<&mut Node> {
    doc.find_by_name_mut("svg")
}

/// Shape helpers for an `svg` (or `g`) element. Each returns the new child.
pub trait Shapes {
    fn rect(&mut self, at: Pos, size: Size, color: Option<&Color>) -> &mut Node;
    fn rounded_rect(&mut self, at: Pos, corner: Radius, size: Size, color: Option<&Color>) -> &mut Node;
    fn text(&mut self, at: Pos, font: &Font, message: &str, color: Option<&Color>) -> &mut Node;
    fn circle(&mut self, center: Pos, radius: i32, color: Option<&Color>) -> &mut Node;
    fn ellipse(&mut self, center: Pos, radius: Radius, color: Option<&Color>) -> &mut Node;
    fn line(&mut self, from: Pos, to: Pos, thickness: i32, color: Option<&Color>) -> &mut Node;
    fn triangle(&mut self, p1: Pos, p2: Pos, p3: Pos, color: Option<&Color>) -> &mut Node;
    fn poly(&mut self, p1: Pos, p2: Pos, p3: Pos, p4: Pos, color: Option<&Color>) -> &mut Node;
    /// A 1x1 `rect`; its on-screen size depends on the viewBox.
    fn pixel(&mut self, at: Pos, color: &Color) -> &mut Node;
    /// A `circle` of radius 1. Pass an RGBA color for a translucent dot.
    fn dot(&mut self, center: Pos, color: &Color) -> &mut Node;
    /// Sets `fill` unless the color is missing or transparent.
    fn fill(&mut self, color: Option<&Color>) -> &mut Node;
    /// Sets `stroke` unless the color is missing or transparent.
    fn stroke(&mut self, color: Option<&Color>) -> &mut Node;
}

fn closed_path(points: &[Pos]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().chain(points.first()).enumerate() {
        if i != 0 {
            d.push(' ');
        }
        d.push_str(if i == 0 { "M" } else { "L" });
        d.push_str(&format!(" {} {}", p.x, p.y));
    }
    d
}

impl Shapes for Node {
    fn rect(&mut self, at: Pos, size: Size, color: Option<&Color>) -> &mut Node {
        self.add_new_child("rect")
            .add_attribute("x", at.x.to_string())
            .add_attribute("y", at.y.to_string())
            .add_attribute("width", size.w.to_string())
            .add_attribute("height", size.h.to_string())
            .fill(color)
    }

    fn rounded_rect(&mut self, at: Pos, corner: Radius, size: Size, color: Option<&Color>) -> &mut Node {
        self.rect(at, size, color)
            .add_attribute("rx", corner.x.to_string())
            .add_attribute("ry", corner.y.to_string())
    }

    fn text(&mut self, at: Pos, font: &Font, message: &str, color: Option<&Color>) -> &mut Node {
        self.add_new_child("text")
            .add_attribute("x", at.x.to_string())
            .add_attribute("y", at.y.to_string())
            .add_attribute("font-family", font.family.as_str())
            .add_attribute("font-size", font.size.to_string())
            .fill(color)
            .add_content(message)
    }

    fn circle(&mut self, center: Pos, radius: i32, color: Option<&Color>) -> &mut Node {
        self.add_new_child("circle")
            .add_attribute("cx", center.x.to_string())
            .add_attribute("cy", center.y.to_string())
            .add_attribute("r", radius.to_string())
            .fill(color)
    }

    fn ellipse(&mut self, center: Pos, radius: Radius, color: Option<&Color>) -> &mut Node {
        self.add_new_child("ellipse")
            .add_attribute("cx", center.x.to_string())
            .add_attribute("cy", center.y.to_string())
            .add_attribute("rx", radius.x.to_string())
            .add_attribute("ry", radius.y.to_string())
            .fill(color)
    }

    fn line(&mut self, from: Pos, to: Pos, thickness: i32, color: Option<&Color>) -> &mut Node {
        self.add_new_child("line")
            .add_attribute("x1", from.x.to_string())
            .add_attribute("y1", from.y.to_string())
            .add_attribute("x2", to.x.to_string())
            .add_attribute("y2", to.y.to_string())
            .add_attribute("stroke-width", thickness.to_string())
            .stroke(color)
    }

    fn triangle(&mut self, p1: Pos, p2: Pos, p3: Pos, color: Option<&Color>) -> &mut Node {
        self.add_new_child("path")
            .add_attribute("d", closed_path(&[p1, p2, p3]))
            .fill(color)
    }

    fn poly(&mut self, p1: Pos, p2: Pos, p3: Pos, p4: Pos, color: Option<&Color>) -> &mut Node {
        self.add_new_child("path")
            .add_attribute("d", closed_path(&[p1, p2, p3, p4]))
            .fill(color)
    }

    fn pixel(&mut self, at: Pos, color: &Color) -> &mut Node {
        self.rect(at, size(1, 1), Some(color))
    }

    fn dot(&mut self, center: Pos, color: &Color) -> &mut Node {
        self.circle(center, 1, Some(color))
    }

    fn fill(&mut self, color: Option<&Color>) -> &mut Node {
        if let Some(color) = color.filter(|c| !c.is_transparent()) {
            self.add_attribute("fill", color.to_string());
        }
        self
    }

    fn stroke(&mut self, color: Option<&Color>) -> &mut Node {
        if let Some(color) = color.filter(|c| !c.is_transparent()) {
            self.add_attribute("stroke", color.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Font, Radius, Shapes, new_tiny_svg, pos, size, svg_root_mut};

    #[test]
    fn color_strings() {
        assert_eq!(Color::rgb(255, 0, 10).to_string(), "#ff000a");
        assert_eq!(Color::rgba(1, 2, 3, 0.5).to_string(), "rgba(1, 2, 3, 0.500000)");
        assert_eq!(Color::named("blue").to_string(), "blue");
        assert!(Color::rgba(0, 0, 0, Color::TRANSPARENT).is_transparent());
        assert!(!Color::named("red").is_transparent());
    }

    #[test]
    fn document_prolog_and_viewbox() {
        let doc = new_tiny_svg(pos(0, 0), size(256, 128));
        let out = doc.render_markup(true);
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE svg PUBLIC"));
        let svg = doc.find_by_name("svg").expect("svg element");
        assert_eq!(svg.attribute("viewBox"), Some(Some("0 0 256 128")));
        assert_eq!(svg.attribute("baseProfile"), Some(Some("tiny")));
        assert_eq!(doc.title(), "");
    }

    #[test]
    fn shapes_carry_geometry_and_fill() {
        let mut doc = new_tiny_svg(pos(0, 0), size(100, 100));
        let svg = svg_root_mut(&mut doc).expect("svg element");
        svg.add_new_child("desc").add_content("Diagram");
        svg.rect(pos(1, 2), size(3, 4), Some(&Color::named("red")));
        svg.rounded_rect(pos(30, 10), Radius { x: 5, y: 5 }, size(20, 20), None);
        svg.circle(pos(50, 50), 10, Some(&Color::rgba(0, 0, 0, 0.0)));
        svg.line(pos(0, 0), pos(10, 10), 2, Some(&Color::rgb(0, 0, 255)));
        svg.text(
            pos(5, 95),
            &Font {
                family: "Verdana".into(),
                size: 12,
            },
            "hi",
            None,
        );
        svg.triangle(pos(0, 0), pos(10, 0), pos(5, 5), Some(&Color::named("green")));

        let svg = doc.find_by_name("svg").expect("svg element");
        let names: Vec<&str> = svg.children().iter().map(|n| n.name()).collect();
        assert_eq!(names, ["desc", "rect", "rect", "circle", "line", "text", "path"]);

        let rect = &svg.children()[1];
        assert_eq!(rect.attribute("width"), Some(Some("3")));
        assert_eq!(rect.attribute("fill"), Some(Some("red")));

        let rounded = &svg.children()[2];
        assert_eq!(rounded.attribute("rx"), Some(Some("5")));
        assert!(!rounded.has_attribute("fill"));

        assert!(!svg.children()[3].has_attribute("fill"));
        assert_eq!(svg.children()[4].attribute("stroke"), Some(Some("#0000ff")));
        assert_eq!(svg.children()[5].content(), "hi");
        assert_eq!(
            svg.children()[6].attribute("d"),
            Some(Some("M 0 0 L 10 0 L 5 5 L 0 0"))
        );
    }

    #[test]
    fn pixels_and_dots() {
        let mut doc = new_tiny_svg(pos(0, 0), size(4, 4));
        let svg = svg_root_mut(&mut doc).expect("svg element");
        svg.pixel(pos(2, 3), &Color::rgb(0, 128, 255));
        svg.dot(pos(1, 1), &Color::rgb(255, 255, 0));
        svg.dot(pos(0, 0), &Color::rgba(10, 20, 30, 0.25));

        let svg = doc.find_by_name("svg").expect("svg element");
        let pixel = &svg.children()[0];
        assert_eq!(pixel.name(), "rect");
        assert_eq!(pixel.attribute("width"), Some(Some("1")));
        assert_eq!(pixel.attribute("height"), Some(Some("1")));
        assert_eq!(pixel.attribute("y"), Some(Some("3")));
        assert_eq!(pixel.attribute("fill"), Some(Some("#0080ff")));

        let dot = &svg.children()[1];
        assert_eq!(dot.name(), "circle");
        assert_eq!(dot.attribute("r"), Some(Some("1")));
        assert_eq!(dot.attribute("fill"), Some(Some("#ffff00")));
        assert_eq!(
            svg.children()[2].attribute("fill"),
            Some(Some("rgba(10, 20, 30, 0.250000)"))
        );
    }

    #[test]
    fn poly_closes_the_path() {
        let mut doc = new_tiny_svg(pos(0, 0), size(10, 10));
        let svg = svg_root_mut(&mut doc).expect("svg element");
        let path = svg.poly(pos(0, 0), pos(4, 0), pos(4, 4), pos(0, 4), None);
        assert_eq!(path.attribute("d"), Some(Some("M 0 0 L 4 0 L 4 4 L 0 4 L 0 0")));
    }
}

//! Canned inline-style helpers for nodes.

use markup::Node;

const SANS_SERIF_FALLBACK: &str = "Verdana, Geneva, sans-serif";

/// Look of a box made by [`Styling::add_box`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxStyle {
    /// Corner radius; `None` leaves the corners square.
    pub rounded: Option<String>,
    pub fg_color: String,
    pub bg_color: String,
    pub left_padding: String,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            rounded: Some("0.9em".to_string()),
            fg_color: "white".to_string(),
            bg_color: "black".to_string(),
            left_padding: "3em".to_string(),
        }
    }
}

pub trait Styling {
    fn set_margin(&mut self, em: u32) -> &mut Self;
    /// Sets `border-radius` along with the vendor-prefixed variants.
    fn set_rounded(&mut self, radius: &str) -> &mut Self;
    fn set_color(&mut self, fg_color: &str, bg_color: &str) -> &mut Self;
    /// Appends a `div` with the given id and text; returns the div.
    fn add_box(&mut self, id: &str, text: &str, style: &BoxStyle) -> &mut Node;
    /// Appends an `img`; returns it.
    fn add_image(&mut self, url: &str, width: &str) -> &mut Node;
    /// `repeat` is a `background-repeat` value such as `repeat-x`.
    fn repeat_background(&mut self, image_url: &str, repeat: &str) -> &mut Self;
    fn rounded_box(&mut self) -> &mut Self;
    fn sans_serif(&mut self) -> &mut Self;
    fn custom_sans_serif(&mut self, family: &str) -> &mut Self;
    /// Absolute position, `x` from the left and `y` from the top.
    fn set_pixel_position(&mut self, x: i32, y: i32) -> &mut Self;
    fn set_relative_position(&mut self, x: &str, y: &str) -> &mut Self;
    /// Floats left when `left_side` is set, right otherwise.
    fn set_width_and_side(&mut self, width: &str, left_side: bool) -> &mut Self;
}

impl Styling for Node {
    fn set_margin(&mut self, em: u32) -> &mut Self {
        self.add_style("margin", format!("{em}em"))
    }

    fn set_rounded(&mut self, radius: &str) -> &mut Self {
        self.add_style("border-radius", radius)
            .add_style("-webkit-border-radius", radius)
            .add_style("-moz-border-radius", radius)
    }

    fn set_color(&mut self, fg_color: &str, bg_color: &str) -> &mut Self {
        self.add_style("color", fg_color)
            .add_style("background-color", bg_color)
    }

    fn add_box(&mut self, id: &str, text: &str, style: &BoxStyle) -> &mut Node {
        let div = self.add_new_child("div");
        div.add_attribute("id", id).add_content(text);
        if let Some(radius) = &style.rounded {
            div.set_rounded(radius);
        }
        div.set_color(&style.fg_color, &style.bg_color)
            .add_style("padding-left", style.left_padding.as_str())
    }

    fn add_image(&mut self, url: &str, width: &str) -> &mut Node {
        self.add_new_child("img")
            .add_attribute("src", url)
            .add_style("width", width)
    }

    fn repeat_background(&mut self, image_url: &str, repeat: &str) -> &mut Self {
        self.add_style("background-image", format!("url('{image_url}')"))
            .add_style("background-repeat", repeat)
    }

    fn rounded_box(&mut self) -> &mut Self {
        self.add_style("border", "solid 1px #b4b4b4")
            .add_style("border-radius", "10px")
            .add_style("box-shadow", "1px 1px 3px rgba(0,0,0, .5)")
    }

    fn sans_serif(&mut self) -> &mut Self {
        self.add_style("font-family", SANS_SERIF_FALLBACK)
    }

    fn custom_sans_serif(&mut self, family: &str) -> &mut Self {
        self.add_style("font-family", format!("{family}, {SANS_SERIF_FALLBACK}"))
    }

    fn set_pixel_position(&mut self, x: i32, y: i32) -> &mut Self {
        self.add_style("position", "absolute")
            .add_style("top", format!("{y}px"))
            .add_style("left", format!("{x}px"))
    }

    fn set_relative_position(&mut self, x: &str, y: &str) -> &mut Self {
        self.add_style("position", "relative")
            .add_style("top", y)
            .add_style("left", x)
    }

    fn set_width_and_side(&mut self, width: &str, left_side: bool) -> &mut Self {
        let side = if left_side { "left" } else { "right" };
        self.add_style("float", side).add_style("width", width)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoxStyle, Styling};
    use markup::Node;

    #[test]
    fn box_is_a_styled_div() {
        let mut body = Node::new("body");
        let div = body.add_box("box0", "Hi there", &BoxStyle::default());
        assert_eq!(div.name(), "div");
        assert_eq!(div.attribute("id"), Some(Some("box0")));
        assert_eq!(div.content(), "Hi there");
        assert_eq!(div.style_value("-moz-border-radius"), Some("0.9em"));
        assert_eq!(div.style_value("background-color"), Some("black"));
        assert_eq!(div.style_value("padding-left"), Some("3em"));
        assert_eq!(body.count_children(), 1);
    }

    #[test]
    fn square_box_skips_radius() {
        let mut body = Node::new("body");
        let style = BoxStyle {
            rounded: None,
            ..BoxStyle::default()
        };
        let div = body.add_box("plain", "", &style);
        assert_eq!(div.style_value("border-radius"), None);
        assert_eq!(div.style_value("color"), Some("white"));
    }

    #[test]
    fn pixel_position_puts_y_on_top() {
        let mut div = Node::new("div");
        div.set_pixel_position(10, 20);
        assert_eq!(div.style_value("position"), Some("absolute"));
        assert_eq!(div.style_value("left"), Some("10px"));
        assert_eq!(div.style_value("top"), Some("20px"));

        let mut rel = Node::new("div");
        rel.set_relative_position("1em", "2em");
        assert_eq!(rel.style_value("left"), Some("1em"));
        assert_eq!(rel.style_value("top"), Some("2em"));
    }

    #[test]
    fn fonts_and_backgrounds() {
        let mut node = Node::new("p");
        node.custom_sans_serif("Lobster")
            .repeat_background("/bg.png", "repeat-x")
            .set_width_and_side("30%", false)
            .set_margin(2);
        assert_eq!(
            node.style_value("font-family"),
            Some("Lobster, Verdana, Geneva, sans-serif")
        );
        assert_eq!(node.style_value("background-image"), Some("url('/bg.png')"));
        assert_eq!(node.style_value("float"), Some("right"));
        assert_eq!(node.style_value("margin"), Some("2em"));

        let mut other = Node::new("p");
        other.sans_serif().rounded_box();
        assert_eq!(other.style_value("font-family"), Some("Verdana, Geneva, sans-serif"));
        assert_eq!(other.style_value("border-radius"), Some("10px"));
    }

    #[test]
    fn image_is_a_child() {
        let mut div = Node::new("div");
        let img = div.add_image("/logo.png", "50%");
        assert_eq!(img.attribute("src"), Some(Some("/logo.png")));
        assert_eq!(img.style_value("width"), Some("50%"));
    }
}

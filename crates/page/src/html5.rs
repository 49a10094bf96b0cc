//! HTML5 page skeleton and the helpers that hang things off its `<head>`
//! and `<body>`.
//!
//! Lookups use the tree's prefix match, so a page is expected to keep
//! `head` ahead of anything named `header…` and `body` unique.

use crate::Document;
use markup::{MarkupResult, Node};
use url::form_urlencoded;

pub const HTML5_DOCTYPE: &str = "<!DOCTYPE html>";

const GOOGLE_FONTS_CSS: &str = "http://fonts.googleapis.com/css";

impl Document {
    /// `<!DOCTYPE html>` root holding `html`, with `head > title` and an
    /// empty `body`.
    pub fn new_html5(title: &str) -> Self {
        let mut page = Document::new(title, HTML5_DOCTYPE);
        let html = page.root_mut().add_new_child("html");
        html.add_new_child("head")
            .add_new_child("title")
            .add_content(title);
        html.add_new_child("body");
        page
    }

    fn head_mut(&mut self) -> MarkupResult<&mut Node> {
        self.find_by_name_mut("head")
    }

    fn body_mut(&mut self) -> MarkupResult<&mut Node> {
        self.find_by_name_mut("body")
    }

    pub fn link_to_css(&mut self, css_url: &str) -> MarkupResult<()> {
        self.head_mut()?
            .add_new_child("link")
            .add_attribute("rel", "stylesheet")
            .add_attribute("href", css_url)
            .add_attribute("type", "text/css");
        Ok(())
    }

    pub fn link_to_js(&mut self, js_url: &str) -> MarkupResult<()> {
        // A space keeps the script element from self-closing.
        self.head_mut()?
            .add_new_child("script")
            .add_attribute("src", js_url)
            .add_attribute("type", "text/javascript")
            .add_content(" ");
        Ok(())
    }

    pub fn link_to_favicon(&mut self, favicon_url: &str) -> MarkupResult<()> {
        self.head_mut()?
            .add_new_child("link")
            .add_attribute("rel", "shortcut icon")
            .add_attribute("href", favicon_url);
        Ok(())
    }

    pub fn meta_charset(&mut self, charset: &str) -> MarkupResult<()> {
        self.head_mut()?
            .add_new_child("meta")
            .add_attribute("http-equiv", "Content-Type")
            .add_attribute("content", format!("text/html; charset={charset}"));
        Ok(())
    }

    pub fn link_to_google_font(&mut self, family: &str) -> MarkupResult<()> {
        self.link_to_css(&google_font_url(family))
    }

    /// Appends `content` to the body and returns the body.
    pub fn add_body_content(&mut self, content: &str) -> MarkupResult<&mut Node> {
        let body = self.body_mut()?;
        body.add_content(content);
        Ok(body)
    }

    pub fn set_body_style(&mut self, key: &str, value: &str) -> MarkupResult<&mut Node> {
        let body = self.body_mut()?;
        body.add_style(key, value);
        Ok(body)
    }

    pub fn set_body_margin(&mut self, em: u32) -> MarkupResult<&mut Node> {
        self.set_body_style("margin", &format!("{em}em"))
    }

    pub fn set_body_color(&mut self, fg_color: &str, bg_color: &str) -> MarkupResult<&mut Node> {
        let body = self.body_mut()?;
        body.add_style("color", fg_color)
            .add_style("background-color", bg_color);
        Ok(body)
    }

    pub fn set_body_font_family(&mut self, family: &str) -> MarkupResult<&mut Node> {
        self.set_body_style("font-family", family)
    }
}

/// Stylesheet URL for a Google font; spaces in the family become `+`.
pub fn google_font_url(family: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("family", family)
        .finish();
    format!("{GOOGLE_FONTS_CSS}?{query}")
}

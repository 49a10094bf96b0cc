//! Rendered output kept per route, for serving the same page many times.
//!
//! The first publish for a route wins; later ones are ignored. There is
//! no invalidation: build a new cache to change what is served.

use crate::Document;
use markup::MarkupResult;
use markup::collect::collect_stylesheet_hrefs;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    Html,
    Css,
    Xml,
    Svg,
}

impl ContentType {
    pub fn mime(self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Css => "text/css",
            ContentType::Xml => "application/xml",
            ContentType::Svg => "image/svg+xml",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Published {
    pub content_type: ContentType,
    pub body: String,
}

#[derive(Clone, Debug, Default)]
pub struct PageCache {
    entries: HashMap<String, Published>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `css_route` into the page head, then caches the markup under
    /// `html_route` and the stylesheet under `css_route`.
    ///
    /// Returns `Ok(false)` without touching the page if either route is
    /// already published. A page that already links `css_route` is not
    /// linked again. Fails when the page has no `head`.
    pub fn publish_page(
        &mut self,
        html_route: &str,
        css_route: &str,
        page: &mut Document,
    ) -> MarkupResult<bool> {
        if let Some(taken) = [html_route, css_route]
            .into_iter()
            .find(|route| self.entries.contains_key(*route))
        {
            log::warn!("page cache: not publishing {html_route}, {taken} is already published");
            return Ok(false);
        }
        if !collect_stylesheet_hrefs(page.root()).iter().any(|href| href == css_route) {
            page.link_to_css(css_route)?;
        }
        self.insert(html_route, ContentType::Html, page.render_markup(false));
        self.insert(css_route, ContentType::Css, page.render_css());
        Ok(true)
    }

    /// Caches the non-indented markup of `doc` as a single entry.
    pub fn publish_markup(&mut self, route: &str, content_type: ContentType, doc: &Document) -> bool {
        self.insert(route, content_type, doc.render_markup(false))
    }

    /// Runs `render` only if `route` has no entry yet.
    pub fn get_or_insert_with<F>(&mut self, route: &str, content_type: ContentType, render: F) -> &Published
    where
        F: FnOnce() -> String,
    {
        self.entries.entry(route.to_string()).or_insert_with(|| {
            log::debug!("page cache: rendering {route} as {content_type}");
            Published {
                content_type,
                body: render(),
            }
        })
    }

    pub fn get(&self, route: &str) -> Option<&Published> {
        self.entries.get(route)
    }

    pub fn contains(&self, route: &str) -> bool {
        self.entries.contains_key(route)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Routes in sorted order.
    pub fn routes(&self) -> Vec<&str> {
        let mut routes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        routes.sort_unstable();
        routes
    }

    fn insert(&mut self, route: &str, content_type: ContentType, body: String) -> bool {
        match self.entries.entry(route.to_string()) {
            Entry::Occupied(_) => {
                log::debug!("page cache: {route} already published");
                false
            }
            Entry::Vacant(slot) => {
                log::debug!("page cache: published {route} as {content_type}");
                slot.insert(Published { content_type, body });
                true
            }
        }
    }
}

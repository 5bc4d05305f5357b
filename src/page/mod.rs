//! Page: A leaf producer of renderable content, one per navigation target.
//!
//! A page owns a route key, a render function, and optionally a layout
//! selector. The selector is assigned statically at construction and never
//! computed at runtime, so the shell can trust it by construction. Pages are
//! stateless: rendering the same props twice yields structurally identical
//! elements.

use std::collections::HashMap;

use crate::element::Element;
use crate::layout::LayoutFn;

/// A page's render function: props in, renderable content out.
pub type RenderFn = fn(&PageProps) -> Element;

/// Page-specific data supplied by the host per navigation.
///
/// Immutable for the duration of a render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageProps(HashMap<String, String>);

impl PageProps {
    /// Create an empty props bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key/value pair (builder style).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A unit of renderable content associated with one navigation target.
pub struct Page {
    /// Route key the shell mounts this page under.
    route: String,
    /// Producer of the page's content.
    render: RenderFn,
    /// Optional layout selector; the shell falls back to nav when absent.
    layout: Option<LayoutFn>,
}

impl Page {
    /// Create a page for the given route with the given render function.
    pub fn new(route: impl Into<String>, render: RenderFn) -> Self {
        Self {
            route: route.into(),
            render,
            layout: None,
        }
    }

    /// Attach a layout selector (builder style).
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutFn) -> Self {
        self.layout = Some(layout);
        self
    }

    /// The route key this page answers to.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The declared layout selector, if any.
    pub fn layout(&self) -> Option<LayoutFn> {
        self.layout
    }

    /// Render the page's content for the given props.
    pub fn render(&self, props: &PageProps) -> Element {
        (self.render)(props)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("route", &self.route)
            .field("has_layout", &self.layout.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    fn greeting(props: &PageProps) -> Element {
        Element::text(props.get("name").unwrap_or("stranger"))
    }

    #[test]
    fn test_render_is_referentially_transparent() {
        let page = Page::new("/hello", greeting);
        let props = PageProps::new().with("name", "ada");
        assert_eq!(page.render(&props), page.render(&props));
        assert_eq!(page.render(&props), Element::text("ada"));
    }

    #[test]
    fn test_layout_absent_by_default() {
        let page = Page::new("/hello", greeting);
        assert!(page.layout().is_none());
    }

    #[test]
    fn test_with_layout_attaches_selector() {
        let page = Page::new("/hello", greeting).with_layout(layout::centered);
        let selector = page.layout().unwrap();
        assert_eq!(
            selector(Element::text("x")).header(),
            Some(layout::CENTERED_LABEL)
        );
    }

    #[test]
    fn test_props_lookup() {
        let props = PageProps::new().with("a", "1").with("b", "2");
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("missing"), None);
        assert!(!props.is_empty());
    }
}

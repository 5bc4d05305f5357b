//! Application shell: the composition point between pages and layouts.
//!
//! The shell holds the mounted pages and performs the system's single piece
//! of conditional logic: on each navigation it reads the page's optional
//! layout selector and applies it to the page's rendered output, substituting
//! the navigation layout when no selector is declared. Fallback resolution
//! happens exactly once, here, never inside pages or layouts.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::element::Element;
use crate::error::{Result, ShellError};
use crate::layout;
use crate::page::{Page, PageProps};

/// The application shell: route registry plus layout resolution.
#[derive(Debug, Default)]
pub struct AppShell {
    pages: HashMap<String, Page>,
}

impl AppShell {
    /// Create an empty shell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a page under its route key.
    ///
    /// Mounting a second page under the same route replaces the first.
    pub fn mount(&mut self, page: Page) {
        debug!(route = page.route(), "mounting page");
        self.pages.insert(page.route().to_owned(), page);
    }

    /// Number of mounted pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if no pages are mounted.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Compose a page with its layout for the given props.
    ///
    /// Applies the page's declared layout selector to its rendered output,
    /// or the navigation layout when the page declares none. Total: every
    /// renderable in produces a renderable out.
    pub fn compose(&self, page: &Page, props: &PageProps) -> Element {
        let rendered = page.render(props);
        match page.layout() {
            Some(selector) => selector(rendered),
            None => {
                trace!(route = page.route(), "no layout declared, using nav");
                layout::nav(rendered)
            }
        }
    }

    /// Navigate to a route: look up the mounted page and compose it.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::RouteNotFound`] if no page is mounted under
    /// `route`. Composition itself cannot fail.
    pub fn navigate(&self, route: &str, props: &PageProps) -> Result<Element> {
        let page = self
            .pages
            .get(route)
            .ok_or_else(|| ShellError::RouteNotFound(route.to_owned()))?;
        debug!(route, "navigating");
        Ok(self.compose(page, props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CENTERED_LABEL, NAV_LABEL};

    fn home(_props: &PageProps) -> Element {
        Element::text("THIS IS A LOGIN PAGE")
    }

    fn plain(_props: &PageProps) -> Element {
        Element::text("X")
    }

    #[test]
    fn test_undeclared_layout_falls_back_to_nav() {
        let page = Page::new("/plain", plain);
        let shell = AppShell::new();
        let out = shell.compose(&page, &PageProps::new());
        assert_eq!(out.header(), Some(NAV_LABEL));
        assert_eq!(out.main_slot(), Some(&Element::text("X")));
    }

    #[test]
    fn test_declared_layout_is_applied() {
        let page = Page::new("/", home).with_layout(layout::centered);
        let shell = AppShell::new();
        let out = shell.compose(&page, &PageProps::new());
        assert_eq!(out.header(), Some(CENTERED_LABEL));
        assert_eq!(
            out.main_slot(),
            Some(&Element::text("THIS IS A LOGIN PAGE"))
        );
    }

    #[test]
    fn test_compose_is_idempotent() {
        let page = Page::new("/", home).with_layout(layout::centered);
        let shell = AppShell::new();
        let props = PageProps::new();
        assert_eq!(shell.compose(&page, &props), shell.compose(&page, &props));
    }

    #[test]
    fn test_navigate_composes_mounted_page() {
        let mut shell = AppShell::new();
        shell.mount(Page::new("/", home).with_layout(layout::centered));
        shell.mount(Page::new("/plain", plain));

        let out = shell.navigate("/", &PageProps::new()).unwrap();
        assert_eq!(out.header(), Some(CENTERED_LABEL));

        let out = shell.navigate("/plain", &PageProps::new()).unwrap();
        assert_eq!(out.header(), Some(NAV_LABEL));
    }

    #[test]
    fn test_navigate_unknown_route() {
        let shell = AppShell::new();
        let err = shell.navigate("/missing", &PageProps::new()).unwrap_err();
        assert!(matches!(err, ShellError::RouteNotFound(route) if route == "/missing"));
    }

    #[test]
    fn test_remount_replaces_page() {
        let mut shell = AppShell::new();
        shell.mount(Page::new("/", plain));
        shell.mount(Page::new("/", home).with_layout(layout::centered));
        assert_eq!(shell.len(), 1);

        let out = shell.navigate("/", &PageProps::new()).unwrap();
        assert_eq!(out.header(), Some(CENTERED_LABEL));
    }

    #[test]
    fn test_concurrent_navigations_share_no_state() {
        let mut shell = AppShell::new();
        shell.mount(Page::new("/plain", plain));
        let first = shell.navigate("/plain", &PageProps::new()).unwrap();
        let second = shell.navigate("/plain", &PageProps::new()).unwrap();
        assert_eq!(first, second);
    }
}

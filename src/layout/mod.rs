//! Layout module: Pure layout functions and the geometry they render into.
//!
//! A layout function takes a page's rendered element and returns it wrapped
//! in a fixed shell (static header label + main content slot). Layouts are
//! total, deterministic, and side-effect-free: there is no failure path, and
//! the label never depends on the input.

mod rect;

pub use rect::Rect;

use crate::element::Element;

/// A layout selector: a pure transformer from page content to wrapped content.
///
/// Pages may attach one of these statically; the shell substitutes [`nav`]
/// when none is present.
pub type LayoutFn = fn(Element) -> Element;

/// Header label of the navigation layout.
pub const NAV_LABEL: &str = "nav";

/// Header label of the centered layout.
pub const CENTERED_LABEL: &str = "centered";

/// Wrap `content` in the navigation shell.
///
/// This is the default layout the shell falls back to when a page declares
/// no selector of its own.
pub fn nav(content: Element) -> Element {
    Element::section(NAV_LABEL, content)
}

/// Wrap `content` in the centered shell.
///
/// The wrapping is identical in shape to [`nav`]; the frame renderer centers
/// this shell's main slot inside its region.
pub fn centered(content: Element) -> Element {
    Element::section(CENTERED_LABEL, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_wraps_with_static_label() {
        let out = nav(Element::text("X"));
        assert_eq!(out.header(), Some(NAV_LABEL));
        assert_eq!(out.main_slot(), Some(&Element::text("X")));
    }

    #[test]
    fn test_centered_wraps_with_static_label() {
        let out = centered(Element::text("THIS IS A LOGIN PAGE"));
        assert_eq!(out.header(), Some(CENTERED_LABEL));
        assert_eq!(
            out.main_slot(),
            Some(&Element::text("THIS IS A LOGIN PAGE"))
        );
    }

    #[test]
    fn test_layouts_differ_only_in_slot_for_distinct_inputs() {
        let a = nav(Element::text("A"));
        let b = nav(Element::text("B"));
        assert_eq!(a.header(), b.header());
        assert_ne!(a.main_slot(), b.main_slot());
    }

    #[test]
    fn test_layouts_are_deterministic() {
        let once = centered(Element::text("same"));
        let twice = centered(Element::text("same"));
        assert_eq!(once, twice);
    }
}

//! Element: The renderable value passed between pages, layouts, and the shell.
//!
//! Pages produce elements, layout functions wrap them, and the application
//! shell hands the composed tree to the rendering host. Elements are plain
//! values: no identity, no state, structural equality throughout, which is
//! what makes composition idempotent and directly assertable in tests.

/// A renderable element tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// Leaf text content.
    Text(String),
    /// A layout shell: a static header label plus one element in the main slot.
    Section {
        /// The fixed, variant-specific header label.
        header: String,
        /// The wrapped content.
        main: Box<Element>,
    },
    /// A vertical sequence of elements.
    Stack(Vec<Element>),
}

impl Element {
    /// Create a leaf text element.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a section wrapping `main` under a static header label.
    pub fn section(header: impl Into<String>, main: Self) -> Self {
        Self::Section {
            header: header.into(),
            main: Box::new(main),
        }
    }

    /// Create a vertical stack of elements.
    pub fn stack(children: Vec<Self>) -> Self {
        Self::Stack(children)
    }

    /// The header label, if this element is a section.
    pub fn header(&self) -> Option<&str> {
        match self {
            Self::Section { header, .. } => Some(header),
            _ => None,
        }
    }

    /// The content slot, if this element is a section.
    pub fn main_slot(&self) -> Option<&Self> {
        match self {
            Self::Section { main, .. } => Some(main),
            _ => None,
        }
    }

    /// Flatten the tree to its visible text, one line per leaf row.
    ///
    /// Sections contribute their header label followed by their slot content.
    /// Used by the frame renderer for measurement and by tests for
    /// containment assertions.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(content) => content.clone(),
            Self::Section { header, main } => {
                format!("{header}\n{}", main.plain_text())
            }
            Self::Stack(children) => children
                .iter()
                .map(Self::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_accessors() {
        let el = Element::section("nav", Element::text("body"));
        assert_eq!(el.header(), Some("nav"));
        assert_eq!(el.main_slot(), Some(&Element::text("body")));
    }

    #[test]
    fn test_non_section_has_no_header() {
        assert_eq!(Element::text("x").header(), None);
        assert_eq!(Element::stack(vec![]).main_slot(), None);
    }

    #[test]
    fn test_plain_text_flattens_nested_sections() {
        let el = Element::section(
            "outer",
            Element::section("inner", Element::text("leaf")),
        );
        assert_eq!(el.plain_text(), "outer\ninner\nleaf");
    }

    #[test]
    fn test_structural_equality() {
        let a = Element::section("nav", Element::text("X"));
        let b = Element::section("nav", Element::text("X"));
        assert_eq!(a, b);
    }
}

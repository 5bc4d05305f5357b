//! # Vestibule
//!
//! A layout-composition shell for terminal page UIs.
//!
//! Vestibule implements the page/layout pattern: pages produce renderable
//! content, pure layout functions wrap that content in a fixed shell (a
//! static header label plus a main content slot), and an application shell
//! resolves each page's optional layout selector, falling back to the
//! navigation layout when none is declared.
//!
//! ## Core Concepts
//!
//! - **Elements**: plain renderable values with structural equality
//! - **Layout functions**: pure, total transformers (`fn(Element) -> Element`)
//! - **Pages**: stateless content producers with an optional layout selector
//! - **Shell**: the single composition point where fallback resolution happens
//!
//! ## Example
//!
//! ```rust
//! use vestibule::{layout, AppShell, Element, Page, PageProps};
//!
//! fn home(_props: &PageProps) -> Element {
//!     Element::text("THIS IS A LOGIN PAGE")
//! }
//!
//! let mut shell = AppShell::new();
//! shell.mount(Page::new("/", home).with_layout(layout::centered));
//!
//! let composed = shell.navigate("/", &PageProps::new()).unwrap();
//! assert_eq!(composed.header(), Some("centered"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod element;
pub mod error;
pub mod layout;
pub mod page;
pub mod render;
pub mod shell;
pub mod style;

// Re-exports for convenience
pub use element::Element;
pub use error::{Result, ShellError};
pub use layout::{LayoutFn, Rect};
pub use page::{Page, PageProps, RenderFn};
pub use render::{Frame, Screen, Theme};
pub use shell::AppShell;
pub use style::{Modifiers, Rgb};

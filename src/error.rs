//! Unified error type for the shell's fallible edges.
//!
//! Composition itself is total: elements, layouts, and pages have no failure
//! path. Errors exist only at the route registry and the host I/O boundary.

use thiserror::Error;

/// Unified result type for the crate.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Errors surfaced by the application shell and the reference host adapter.
#[derive(Debug, Error)]
pub enum ShellError {
    /// No page is mounted under the requested route.
    #[error("no page mounted for route `{0}`")]
    RouteNotFound(String),
    /// Terminal or output backend failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

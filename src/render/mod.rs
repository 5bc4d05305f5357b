//! Reference host adapter: frame rendering and terminal presentation.
//!
//! The composition core (elements, layouts, pages, shell) is host-agnostic;
//! this module is the minimal rendering runtime that turns a composed element
//! into presented output.

mod frame;
mod output;

pub use frame::{Cell, Frame, Theme};
pub use output::{AnsiWriter, Screen};

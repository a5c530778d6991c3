//! rainbow-report — worksheet rendering.
//!
//! Turns a [`rainbow_core::Worksheet`] into a self-contained HTML page for the
//! browser or a plain-text sheet for printing.

pub mod html;
pub mod text;

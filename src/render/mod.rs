//! Output renderers for the grouped library.
//!
//! [`render_markdown`] produces the primary human-readable document;
//! [`render_json`] produces the lossless structural dump for round-tripping.

pub mod json;
pub mod markdown;

pub use json::render_json;
pub use markdown::render_markdown;

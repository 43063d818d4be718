//! Rendering module for pagefill.
//!
//! Converts the restricted markdown subset used by content documents into
//! HTML fragments ready for injection into the page.

mod markdown;

pub use markdown::render_markdown;

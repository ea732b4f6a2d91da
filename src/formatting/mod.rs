//! Turn parsed prompts into tagged fragments ready for a renderer

pub mod formatter;
mod syntax;

// Re-export all public symbols
pub use formatter::format_segments;
pub use syntax::*;

//! Roles that fragments of a prompt can play when rendered

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Syntax {
    Weighted(f64), // prompt text, coloured by its effective weight
    Bracket,       // scope delimiters: { } [ ]
    WeightClose,   // the trailing :: of a numeric weight
    Snippet,
    RandomGroup,     // ||
    RandomSeparator, // | within a random group
    MixSeparator,    // a bare |
    Newline,
}

/// Trait for different rendering backends (the no-op no-markup one, ANSI
/// escapes for terminal colouring, HTML markup for embedding in a page)
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}

//! Renderers for colourizing weighted prompts

use crate::formatting::*;
use crate::language::*;
use crate::parsing;

mod colour;
mod html;
mod terminal;

pub use colour::{colour_for, parse_hex, Hsl};
pub use html::Html;
pub use terminal::Terminal;

/// Render prompt text as HTML markup, each character coloured by its
/// effective weight. Empty input gives empty output without parsing.
pub fn render(text: &str, config: &WeightHighlightConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let segments = parsing::parse(text, config);

    render_segments(&Html::new(config), &segments)
}

/// We do the rendering in two passes. First we flatten the Segment tree into
/// a Vec of "fragments" (Syntax tag, str pairs). Then second we apply the
/// specified renderer to each pair to result in an embellished/highlighted/
/// marked-up String.
pub fn render_segments(renderer: &impl Render, segments: &[Segment]) -> String {
    // Pass 1: Flatten segments to tagged fragments
    let fragments = format_segments(segments);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, &str)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, content);
        output.push_str(&rendered);
    }

    output
}

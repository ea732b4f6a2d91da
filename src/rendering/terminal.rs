//! Renderer for colourizing prompts in a terminal

use owo_colors::OwoColorize;

use crate::formatting::*;
use crate::language::WeightHighlightConfig;

use super::{colour_for, parse_hex};

/// Embellish fragments with ANSI escapes, using 24-bit colour for weighted
/// text and the configured neutral and colon colours for structure.
pub struct Terminal<'c> {
    config: &'c WeightHighlightConfig,
}

impl<'c> Terminal<'c> {
    pub fn new(config: &'c WeightHighlightConfig) -> Terminal<'c> {
        Terminal { config }
    }

    fn structure(&self, token: &str, content: &str) -> String {
        match parse_hex(token) {
            Some((r, g, b)) => content
                .color(owo_colors::Rgb(r, g, b))
                .to_string(),
            None => content
                .dimmed()
                .to_string(),
        }
    }
}

impl Render for Terminal<'_> {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Weighted(weight) => match colour_for(weight, self.config) {
                Some(colour) => {
                    let (r, g, b) = colour.to_srgb();
                    content
                        .color(owo_colors::Rgb(r, g, b))
                        .to_string()
                }
                None => content.to_string(),
            },
            Syntax::Bracket => self.structure(&self.config.neutral_color, content),
            Syntax::WeightClose => self.structure(&self.config.colon_color, content),
            Syntax::Snippet => content
                .bold()
                .to_string(),
            Syntax::RandomGroup => self.structure(&self.config.neutral_color, content),
            Syntax::RandomSeparator => self.structure(&self.config.neutral_color, content),
            Syntax::MixSeparator => self.structure(&self.config.neutral_color, content),
            Syntax::Newline => "\n".to_string(),
        }
    }
}

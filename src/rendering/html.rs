//! Renderer producing HTML markup for embedding in a page

use std::borrow::Cow;

use crate::formatting::*;
use crate::language::WeightHighlightConfig;

use super::colour_for;

/// Weighted text gets an inline colour; everything structural gets a class
/// the surrounding stylesheet can target.
pub struct Html<'c> {
    config: &'c WeightHighlightConfig,
}

impl<'c> Html<'c> {
    pub fn new(config: &'c WeightHighlightConfig) -> Html<'c> {
        Html { config }
    }
}

impl Render for Html<'_> {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        let content = escape_html(content);
        match syntax {
            Syntax::Weighted(weight) => match colour_for(weight, self.config) {
                Some(colour) => format!("<span style=\"color:{}\">{}</span>", colour, content),
                None => content.into_owned(),
            },
            Syntax::Bracket => markup("prompt-bracket", &content),
            Syntax::WeightClose => markup("prompt-weight-close", &content),
            Syntax::Snippet => markup("prompt-snippet", &content),
            Syntax::RandomGroup => markup("prompt-random", &content),
            Syntax::RandomSeparator => markup("prompt-random-sep", &content),
            Syntax::MixSeparator => markup("prompt-mix-sep", &content),
            Syntax::Newline => "<br/>".to_string(),
        }
    }
}

fn escape_html(content: &str) -> Cow<'_, str> {
    if !content.contains(['&', '<', '>']) {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

fn markup(class: &str, content: &str) -> String {
    let mut result = String::with_capacity(20 + class.len() + content.len() + 7);
    result.push_str("<span class=\"");
    result.push_str(class);
    result.push_str("\">");
    result.push_str(content);
    result.push_str("</span>");
    result
}

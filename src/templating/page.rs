//! Page template - a stand-alone HTML document with its own stylesheet

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::compile;
use crate::language::{RenderingError, Segment, WeightHighlightConfig};
use crate::rendering::{render_segments, Html};

use super::Template;

static TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{stylesheet | unescaped}</style>
</head>
<body>
<div class="prompt">{body | unescaped}</div>
</body>
</html>
"#;

#[derive(Serialize)]
struct Context {
    title: String,
    stylesheet: String,
    body: String,
}

/// Template for a complete document, with the structural classes styled
/// from the configured neutral and colon colours.
pub struct Page {
    title: String,
}

impl Page {
    pub fn new(title: &str) -> Page {
        Page {
            title: title.to_string(),
        }
    }
}

impl Template for Page {
    fn render(
        &self,
        segments: &[Segment],
        config: &WeightHighlightConfig,
    ) -> Result<String, RenderingError> {
        let mut tt = TinyTemplate::new();
        tt.add_template("page", TEMPLATE)
            .map_err(|error| RenderingError {
                problem: "Invalid page template".to_string(),
                details: error.to_string(),
            })?;

        let context = Context {
            title: self
                .title
                .clone(),
            stylesheet: stylesheet(config),
            body: render_segments(&Html::new(config), segments),
        };

        debug!("Filling page template ({} bytes of markup)", context.body.len());

        tt.render("page", &context)
            .map_err(|error| RenderingError {
                problem: "Failed filling page template".to_string(),
                details: error.to_string(),
            })
    }
}

/// Rules for each structural class the Html renderer emits.
fn stylesheet(config: &WeightHighlightConfig) -> String {
    let defaults = WeightHighlightConfig::default();
    let neutral = css_colour(&config.neutral_color, &defaults.neutral_color);
    let colon = css_colour(&config.colon_color, &defaults.colon_color);

    format!(
        r#".prompt {{ white-space: pre-wrap; font-family: monospace; }}
.prompt-bracket {{ color: {neutral}; }}
.prompt-random {{ color: {neutral}; font-weight: bold; }}
.prompt-random-sep {{ color: {neutral}; font-weight: bold; }}
.prompt-mix-sep {{ color: {neutral}; }}
.prompt-weight-close {{ color: {colon}; }}
.prompt-snippet {{ font-weight: bold; text-decoration: underline dotted; }}
"#
    )
}

/// Colour tokens go into the stylesheet verbatim, so only accept ones that
/// look like a colour.
fn css_colour<'a>(token: &'a str, fallback: &'a str) -> &'a str {
    let re = compile!(r"^(?:#[0-9A-Fa-f]{3,8}|[A-Za-z]+|(?:rgb|rgba|hsl|hsla)\([0-9.,%\s]+\))$");

    if re.is_match(token) {
        token
    } else {
        fallback
    }
}

//! parser for weighted prompts

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Segment, WeightHighlightConfig};

pub mod parser;

pub use parser::{ParsingError, MAX_NESTING};

/// Read a file and return an owned String. We pass that ownership back to the
/// caller so that the Segments created by parse() below can borrow from it.
/// The filename "-" reads standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse prompt text into Segments, starting from an ambient weight of 1.
/// This never fails; anything malformed comes back as literal text.
pub fn parse<'i>(content: &'i str, config: &WeightHighlightConfig) -> Vec<Segment<'i>> {
    if content.is_empty() {
        debug!("Empty");
        return Vec::new();
    }

    let mut input = parser::Parser::new(config.parenthesis_boost);
    input.initialize(content);

    let segments = input.read_segments(1.0);

    let total: usize = segments
        .iter()
        .map(Segment::count)
        .sum();
    debug!(
        "Found {} segment{} ({} in total)",
        segments.len(),
        if segments.len() == 1 { "" } else { "s" },
        total
    );

    segments
}

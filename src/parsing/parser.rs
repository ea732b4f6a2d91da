use std::fmt;
use tracing::trace;

use crate::compile;
use crate::language::*;

/// Scopes nested deeper than this are not opened; their delimiters fall
/// through as literal characters instead.
pub const MAX_NESTING: usize = 128;

/// Why a production declined to match at the current position. These never
/// escape the parser: a declined production falls through to the next one,
/// and ultimately to a literal character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    Expected(usize, &'static str),
    Unterminated(usize, &'static str),
    Unbalanced(usize, char),
    TooDeep(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::Expected(offset, _) => *offset,
            ParsingError::Unterminated(offset, _) => *offset,
            ParsingError::Unbalanced(offset, _) => *offset,
            ParsingError::TooDeep(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::Expected(_, value) => format!("expected {}", value),
            ParsingError::Unterminated(_, value) => format!("unterminated {}", value),
            ParsingError::Unbalanced(_, c) => format!("no balancing run for '{}'", c),
            ParsingError::TooDeep(_) => "scopes nested too deeply".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message(), self.offset())
    }
}

#[derive(Debug)]
pub struct Parser<'i> {
    source: &'i str,
    offset: usize,
    boost: f64,
    depth: usize,
}

impl<'i> Parser<'i> {
    pub fn new(boost: f64) -> Parser<'i> {
        Parser {
            source: "",
            offset: 0,
            boost,
            depth: 0,
        }
    }

    pub fn initialize(&mut self, content: &'i str) {
        self.source = content;
        self.offset = 0;
        self.depth = 0;
    }

    fn advance(&mut self, width: usize) {
        // advance the parser position
        self.source = &self.source[width..];
        self.offset += width;
    }

    pub fn entire(&self) -> &'i str {
        self.source
    }

    pub fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn peek_next_char(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    /// Fork a parser over a piece of the current input, one nesting level
    /// down. Does NOT advance this parser; the calling production does that
    /// once it has consumed its whole span.
    fn subparser(&self, start: usize, content: &'i str) -> Parser<'i> {
        Parser {
            source: content,
            offset: start + self.offset,
            boost: self.boost,
            depth: self.depth + 1,
        }
    }

    fn ensure_nesting(&self) -> Result<(), ParsingError> {
        if self.depth >= MAX_NESTING {
            Err(ParsingError::TooDeep(self.offset))
        } else {
            Ok(())
        }
    }

    /// Run a production. On failure nothing has been consumed, so the caller
    /// moves on to the next production in priority order.
    fn attempt<F>(&mut self, production: F) -> Option<Segment<'i>>
    where
        F: FnOnce(&mut Parser<'i>) -> Result<Segment<'i>, ParsingError>,
    {
        match production(self) {
            Ok(segment) => Some(segment),
            Err(error) => {
                trace!(%error, "production declined");
                None
            }
        }
    }

    /// Read everything remaining, each unit carrying `weight` unless a scope
    /// says otherwise.
    pub fn read_segments(&mut self, weight: f64) -> Vec<Segment<'i>> {
        let mut segments = Vec::new();

        while let Some(segment) = self.read_segment(weight) {
            segments.push(segment);
        }

        segments
    }

    /// Try each production in turn; the first to match wins. Returns None
    /// only at end of input.
    fn read_segment(&mut self, weight: f64) -> Option<Segment<'i>> {
        let content = self.entire();

        if is_snippet_reference(content) {
            if let Some(segment) = self.attempt(|parser| parser.read_snippet_reference()) {
                return Some(segment);
            }
        }

        if is_random_choice(content) {
            if let Some(segment) = self.attempt(|parser| parser.read_random_choice(weight)) {
                return Some(segment);
            }
        }

        if is_numeric_weight(content) {
            if let Some(segment) = self.attempt(|parser| parser.read_numeric_scope(weight)) {
                return Some(segment);
            }
        }

        if is_explicit_weight(content) {
            if let Some(segment) = self.attempt(|parser| parser.read_explicit_scope(weight)) {
                return Some(segment);
            }
        }

        if content.starts_with('{') {
            if let Some(segment) =
                self.attempt(|parser| parser.read_run_scope(weight, b'{', b'}'))
            {
                return Some(segment);
            }
        }

        if content.starts_with('[') {
            if let Some(segment) =
                self.attempt(|parser| parser.read_run_scope(weight, b'[', b']'))
            {
                return Some(segment);
            }
        }

        self.read_character(weight)
    }

    fn read_snippet_reference(&mut self) -> Result<Segment<'i>, ParsingError> {
        let re = compile!(r"^<\s*(?i:snippet):([^<>\s]+)\s*>");

        let cap = re
            .captures(self.source)
            .ok_or(ParsingError::Expected(self.offset, "a snippet reference"))?;

        let text = cap
            .get(0)
            .ok_or(ParsingError::Expected(self.offset, "a snippet reference"))?
            .as_str();
        let name = cap
            .get(1)
            .ok_or(ParsingError::Expected(self.offset, "a snippet name"))?
            .as_str();

        self.advance(text.len());

        Ok(Segment::SnippetRef { name, text })
    }

    /// `||a|b||`. The closing delimiter is the first `||` after the opening
    /// one; the options in between are split on single pipes.
    fn read_random_choice(&mut self, weight: f64) -> Result<Segment<'i>, ParsingError> {
        self.ensure_nesting()?;

        let start = 2;
        let end = self.source[start..]
            .find("||")
            .ok_or(ParsingError::Unterminated(self.offset, "random choice group"))?;
        let end = start + end;

        let inner = &self.source[start..end];

        let mut options = Vec::new();
        let mut position = start;
        for chunk in inner.split('|') {
            let mut parser = self.subparser(position, chunk);
            options.push(parser.read_segments(weight));
            position += chunk.len() + 1;
        }

        self.advance(end + 2);

        Ok(Segment::RandomChoice { options })
    }

    /// `1.5::content::`. The closing token is simply the next `::` in the
    /// input, whatever scopes it may fall inside of.
    fn read_numeric_scope(&mut self, weight: f64) -> Result<Segment<'i>, ParsingError> {
        self.ensure_nesting()?;

        let re = compile!(r"^([-+]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+))::");

        let cap = re
            .captures(self.source)
            .ok_or(ParsingError::Expected(self.offset, "a numeric weight"))?;

        let number = cap
            .get(1)
            .ok_or(ParsingError::Expected(self.offset, "a number"))?;

        let start = number.end() + 2;
        let end = self.source[start..]
            .find("::")
            .ok_or(ParsingError::Unterminated(self.offset, "numeric weight"))?;
        let end = start + end;

        let declared: f64 = number
            .as_str()
            .parse()
            .map_err(|_| ParsingError::Expected(self.offset, "a number"))?;

        let mut parser = self.subparser(start, &self.source[start..end]);
        let children = parser.read_segments(weight * declared);

        let scope = Scope {
            kind: ScopeKind::NumericPrefixed,
            open: &self.source[..start],
            children,
            suffix: None,
            close: &self.source[end..end + 2],
            own_weight: declared,
        };

        self.advance(end + 2);

        Ok(Segment::Scope(scope))
    }

    /// `[content:1.5]` or `{content:1.5}`, where content has no brackets,
    /// braces, or parenthesis of its own.
    fn read_explicit_scope(&mut self, weight: f64) -> Result<Segment<'i>, ParsingError> {
        self.ensure_nesting()?;

        let re = compile!(r"^([\[{])([^()\[\]{}]+?):\s*(-?[0-9]+(?:\.[0-9]+)?)([\]}])");

        let cap = re
            .captures(self.source)
            .ok_or(ParsingError::Expected(self.offset, "an explicit weight"))?;

        let open = cap
            .get(1)
            .ok_or(ParsingError::Expected(self.offset, "an opening bracket"))?;
        let inner = cap
            .get(2)
            .ok_or(ParsingError::Expected(self.offset, "weighted content"))?;
        let number = cap
            .get(3)
            .ok_or(ParsingError::Expected(self.offset, "a number"))?;
        let close = cap
            .get(4)
            .ok_or(ParsingError::Expected(self.offset, "a closing bracket"))?;

        let explicit: f64 = number
            .as_str()
            .parse()
            .map_err(|_| ParsingError::Expected(self.offset, "a number"))?;
        let composed = weight * explicit;

        let mut parser = self.subparser(inner.start(), inner.as_str());
        let children = parser.read_segments(composed);

        let scope = Scope {
            kind: ScopeKind::ExplicitWeighted,
            open: open.as_str(),
            children,
            suffix: Some(&self.source[inner.end()..close.start()]),
            close: close.as_str(),
            own_weight: composed,
        };

        self.advance(close.end());

        Ok(Segment::Scope(scope))
    }

    /// A run of `d` identical opening characters closed by a run of exactly
    /// `d` closing characters at the same level. Each character of the run
    /// multiplies (braces) or divides (brackets) the weight by the boost.
    fn read_run_scope(
        &mut self,
        weight: f64,
        open: u8,
        close: u8,
    ) -> Result<Segment<'i>, ParsingError> {
        self.ensure_nesting()?;

        let run = count_run(self.source, open);
        if run == 0 {
            return Err(ParsingError::Expected(self.offset, "an opening run"));
        }

        let end = find_balancing_run(self.source, run, open, close)
            .ok_or(ParsingError::Unbalanced(self.offset, open as char))?;

        let (kind, exponent) = if open == b'{' {
            (ScopeKind::BoostBrace, run as f64)
        } else {
            (ScopeKind::ReduceBracket, -(run as f64))
        };
        let composed = weight * self.boost.powf(exponent);

        let mut parser = self.subparser(run, &self.source[run..end]);
        let children = parser.read_segments(composed);

        let scope = Scope {
            kind,
            open: &self.source[..run],
            children,
            suffix: None,
            close: &self.source[end..end + run],
            own_weight: composed,
        };

        self.advance(end + run);

        Ok(Segment::Scope(scope))
    }

    fn read_character(&mut self, weight: f64) -> Option<Segment<'i>> {
        let c = self.peek_next_char()?;

        let segment = match c {
            '\n' => Segment::LineBreak,
            '|' => Segment::Pipe,
            _ => Segment::Literal {
                text: &self.source[..c.len_utf8()],
                weight,
            },
        };

        self.advance(c.len_utf8());

        Some(segment)
    }
}

/// Number of consecutive `c` bytes at the start of content.
fn count_run(content: &str, c: u8) -> usize {
    content
        .bytes()
        .take_while(|b| *b == c)
        .count()
}

/// Given content starting with a run of `run` opening characters, find the
/// byte offset where the balancing run of `run` closing characters begins.
/// Only whole runs of exactly that length open or close a level. Matching is
/// done over bytes; the delimiters are ASCII so any match is on a character
/// boundary.
fn find_balancing_run(content: &str, run: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = content.as_bytes();
    let opening = vec![open; run];
    let closing = vec![close; run];

    let mut level = 1;
    let mut i = run;

    while i < bytes.len() {
        if bytes[i..].starts_with(&opening) {
            level += 1;
            i += run;
            continue;
        }
        if bytes[i..].starts_with(&closing) {
            level -= 1;
            if level == 0 {
                return Some(i);
            }
            i += run;
            continue;
        }
        i += 1;
    }

    None
}

fn is_snippet_reference(content: &str) -> bool {
    let re = compile!(r"^<\s*(?i:snippet):");

    re.is_match(content)
}

fn is_random_choice(content: &str) -> bool {
    content.starts_with("||")
}

fn is_numeric_weight(content: &str) -> bool {
    let re = compile!(r"^[-+]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)::");

    re.is_match(content)
}

fn is_explicit_weight(content: &str) -> bool {
    content.starts_with('[') || content.starts_with('{')
}

//! Flatten a Segment tree into tagged fragments, in source order

use crate::formatting::*;
use crate::language::*;

pub fn format_segments<'i>(segments: &[Segment<'i>]) -> Vec<(Syntax, &'i str)> {
    let mut output = Formatter::new();

    output.format_segments(segments);

    output.fragments
}

struct Formatter<'i> {
    fragments: Vec<(Syntax, &'i str)>,
}

impl<'i> Formatter<'i> {
    fn new() -> Formatter<'i> {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &'i str) {
        self.fragments
            .push((syntax, content));
    }

    fn format_segments(&mut self, segments: &[Segment<'i>]) {
        for segment in segments {
            self.format_segment(segment);
        }
    }

    fn format_segment(&mut self, segment: &Segment<'i>) {
        match segment {
            Segment::Literal { text, weight } => self.append(Syntax::Weighted(*weight), *text),
            Segment::Scope(scope) => self.format_scope(scope),
            Segment::RandomChoice { options } => self.format_random_choice(options),
            Segment::SnippetRef { text, .. } => self.append(Syntax::Snippet, *text),
            Segment::Pipe => self.append(Syntax::MixSeparator, "|"),
            Segment::LineBreak => self.append(Syntax::Newline, "\n"),
        }
    }

    fn format_scope(&mut self, scope: &Scope<'i>) {
        match scope.kind {
            ScopeKind::BoostBrace | ScopeKind::ReduceBracket => {
                self.append(Syntax::Bracket, scope.open);
                self.format_segments(&scope.children);
                self.append(Syntax::Bracket, scope.close);
            }
            ScopeKind::ExplicitWeighted => {
                self.append(Syntax::Bracket, scope.open);
                self.format_segments(&scope.children);
                if let Some(suffix) = scope.suffix {
                    self.append(Syntax::Weighted(scope.own_weight), suffix);
                }
                self.append(Syntax::Bracket, scope.close);
            }
            ScopeKind::NumericPrefixed => {
                // the announcement carries the declared weight, not the
                // composed one
                self.append(Syntax::Weighted(scope.own_weight), scope.open);
                self.format_segments(&scope.children);
                self.append(Syntax::WeightClose, scope.close);
            }
        }
    }

    fn format_random_choice(&mut self, options: &[Vec<Segment<'i>>]) {
        self.append(Syntax::RandomGroup, "||");
        for (i, option) in options
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::RandomSeparator, "|");
            }
            self.format_segments(option);
        }
        self.append(Syntax::RandomGroup, "||");
    }
}

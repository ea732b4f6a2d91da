//! Types representing a parsed, weighted prompt

/// One unit of a parsed prompt. Text is borrowed from the input; the tree
/// mirrors bracket nesting in the source exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'i> {
    /// A single character of prompt text carrying the ambient weight in
    /// effect where it was found.
    Literal { text: &'i str, weight: f64 },
    Scope(Scope<'i>),
    /// `||a|b|c||`, each option parsed independently at the ambient weight
    /// of the group itself.
    RandomChoice { options: Vec<Vec<Segment<'i>>> },
    /// `<snippet:name>`; opaque, never weighted.
    SnippetRef { name: &'i str, text: &'i str },
    /// A bare `|` outside of any random choice group.
    Pipe,
    LineBreak,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScopeKind {
    BoostBrace,       // {word}, {{word}}, ...
    ReduceBracket,    // [word], [[word]], ...
    ExplicitWeighted, // [word:1.5] or {word:1.5}
    NumericPrefixed,  // 1.5::word::
}

/// A delimited region that changes the weight of its content.
///
/// What `own_weight` colours depends on the kind: for a numeric prefix it
/// is the declared number alone and colours the `1.5::` announcement; for
/// an explicit weight it is the composed weight and colours the `:1.5`
/// suffix. Brace and bracket runs never colour their delimiters, and there
/// `own_weight` is simply the composed weight of the content.
#[derive(Debug, Clone, PartialEq)]
pub struct Scope<'i> {
    pub kind: ScopeKind,
    pub open: &'i str,
    pub children: Vec<Segment<'i>>,
    /// The `:1.5` of an explicit weight, exactly as written, including any
    /// whitespace before the number.
    pub suffix: Option<&'i str>,
    pub close: &'i str,
    pub own_weight: f64,
}

impl<'i> Segment<'i> {
    /// Count this segment and everything nested beneath it.
    pub fn count(&self) -> usize {
        match self {
            Segment::Scope(scope) => {
                1 + scope
                    .children
                    .iter()
                    .map(Segment::count)
                    .sum::<usize>()
            }
            Segment::RandomChoice { options } => {
                1 + options
                    .iter()
                    .flatten()
                    .map(Segment::count)
                    .sum::<usize>()
            }
            _ => 1,
        }
    }
}

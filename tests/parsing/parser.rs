#[cfg(test)]
mod verify {
    use promptweight::language::*;
    use promptweight::parsing::{self, parser::Parser};

    fn literal(text: &str, weight: f64) -> Segment<'_> {
        Segment::Literal { text, weight }
    }

    /// Collect every literal in source order along with its weight.
    fn leaves<'i>(segments: &[Segment<'i>], out: &mut Vec<(&'i str, f64)>) {
        for segment in segments {
            match segment {
                Segment::Literal { text, weight } => out.push((*text, *weight)),
                Segment::Scope(scope) => leaves(&scope.children, out),
                Segment::RandomChoice { options } => {
                    for option in options {
                        leaves(option, out);
                    }
                }
                _ => {}
            }
        }
    }

    fn weights(content: &str) -> Vec<(&str, f64)> {
        let config = WeightHighlightConfig::default();
        let segments = parsing::parse(content, &config);
        let mut out = Vec::new();
        leaves(&segments, &mut out);
        out
    }

    #[test]
    fn empty_input() {
        let config = WeightHighlightConfig::default();
        assert_eq!(parsing::parse("", &config), vec![]);
    }

    #[test]
    fn parser_consumes_everything() {
        let mut input = Parser::new(1.1);
        input.initialize("a{b}c");
        assert!(!input.is_finished());
        assert_eq!(input.entire(), "a{b}c");

        let segments = input.read_segments(1.0);
        assert!(input.is_finished());
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], literal("a", 1.0));
        assert_eq!(segments[2], literal("c", 1.0));
    }

    #[test]
    fn ambient_weight_is_threaded() {
        let mut input = Parser::new(1.1);
        input.initialize("ab");
        let segments = input.read_segments(0.5);
        assert_eq!(segments, vec![literal("a", 0.5), literal("b", 0.5)]);
    }

    #[test]
    fn cumulative_weight_is_product_of_scopes() {
        let boost = 1.1f64;

        let result = weights("{a[b{{c}}]}");
        let a = boost.powf(1.0);
        let b = a * boost.powf(-1.0);
        let c = b * boost.powf(2.0);
        assert_eq!(result, vec![("a", a), ("b", b), ("c", c)]);

        let result = weights("0.5::x{y:2}::");
        assert_eq!(result, vec![("x", 0.5), ("y", 0.5 * 2.0)]);
    }

    #[test]
    fn configured_boost_is_used() {
        let config = WeightHighlightConfig {
            parenthesis_boost: 2.0,
            ..WeightHighlightConfig::default()
        };
        let segments = parsing::parse("{{a}}[b]", &config);
        let mut out = Vec::new();
        leaves(&segments, &mut out);
        assert_eq!(out, vec![("a", 4.0), ("b", 0.5)]);
    }

    #[test]
    fn random_choice_introduces_no_factor() {
        let result = weights("||a|{b}||");
        let boost = 1.1f64.powf(1.0);
        assert_eq!(result, vec![("a", 1.0), ("b", boost)]);
    }

    #[test]
    fn snippet_names_are_opaque() {
        let config = WeightHighlightConfig::default();
        let segments = parsing::parse("{<snippet:a_b>}", &config);

        let Segment::Scope(scope) = &segments[0] else {
            panic!("expected a scope");
        };
        assert_eq!(
            scope.children,
            vec![Segment::SnippetRef {
                name: "a_b",
                text: "<snippet:a_b>"
            }]
        );
    }

    #[test]
    fn priority_order() {
        let config = WeightHighlightConfig::default();

        // random choice wins over the pipes inside it
        let segments = parsing::parse("||a||", &config);
        assert!(matches!(segments[0], Segment::RandomChoice { .. }));

        // numeric prefix wins over the brace run that follows it
        let segments = parsing::parse("2::{a}::", &config);
        let Segment::Scope(scope) = &segments[0] else {
            panic!("expected a scope");
        };
        assert_eq!(scope.kind, ScopeKind::NumericPrefixed);

        // explicit weight wins over the generic bracket run
        let segments = parsing::parse("[a:2]", &config);
        let Segment::Scope(scope) = &segments[0] else {
            panic!("expected a scope");
        };
        assert_eq!(scope.kind, ScopeKind::ExplicitWeighted);

        // a snippet reference wins over everything
        let segments = parsing::parse("<snippet:||>", &config);
        assert!(matches!(segments[0], Segment::SnippetRef { .. }));
    }

    #[test]
    fn unterminated_scopes_are_literal() {
        for content in ["{word", "[word", "2::word", "||a|b", "<snippet:a", "a]}"] {
            let result = weights(content);
            assert!(
                result
                    .iter()
                    .all(|(_, weight)| *weight == 1.0),
                "{} should be unweighted",
                content
            );
        }

        let result = weights("{word");
        assert_eq!(
            result,
            vec![("{", 1.0), ("w", 1.0), ("o", 1.0), ("r", 1.0), ("d", 1.0)]
        );
    }

    #[test]
    fn extreme_weights_are_permitted() {
        // "1e3" is not a number in this grammar, but "3" is
        let result = weights("1e3::a::");
        assert_eq!(result, vec![("1", 1.0), ("e", 1.0), ("a", 3.0)]);

        let result = weights("99999999::a::");
        assert_eq!(result, vec![("a", 99999999.0)]);

        let content = format!("{}a{}", "{".repeat(10_000), "}".repeat(10_000));
        let result = weights(&content);
        assert_eq!(result.len(), 1);
        assert!(result[0].1.is_infinite());
    }

    #[test]
    fn segment_counts() {
        let config = WeightHighlightConfig::default();
        let segments = parsing::parse("{ab}||c|d||", &config);
        let total: usize = segments
            .iter()
            .map(Segment::count)
            .sum();
        // scope + 2 literals, group + 2 literals
        assert_eq!(total, 6);
    }
}

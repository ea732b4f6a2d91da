#[cfg(test)]
mod fuzz {
    use proptest::prelude::*;

    use promptweight::formatting::Identity;
    use promptweight::language::WeightHighlightConfig;
    use promptweight::parsing;
    use promptweight::render;
    use promptweight::rendering::render_segments;

    // Mostly grammar characters, so that scopes open and close often enough
    // to be interesting.
    const PROMPT: &str = r"[{}\[\]:|<>a-c0-9.\-+ \n]{0,64}|<snippet:[a-z]{1,4}>|[a-z{}\[\]]{0,8}";

    proptest! {
        #[test]
        fn render_never_panics(content in PROMPT) {
            let config = WeightHighlightConfig::default();
            let _ = render(&content, &config);
        }

        #[test]
        fn identity_reproduces_input(content in PROMPT) {
            let config = WeightHighlightConfig::default();
            let segments = parsing::parse(&content, &config);
            prop_assert_eq!(render_segments(&Identity, &segments), content);
        }

        #[test]
        fn arbitrary_text_reproduced(content in any::<String>()) {
            let config = WeightHighlightConfig::default();
            let segments = parsing::parse(&content, &config);
            prop_assert_eq!(render_segments(&Identity, &segments), content);
        }

        #[test]
        fn output_has_no_raw_markup(content in "[a-z<>&{}]{0,32}") {
            let config = WeightHighlightConfig::default();
            let result = render(&content, &config);

            // every '<' in the output starts one of our own tags
            for (i, _) in result.match_indices('<') {
                let rest = &result[i..];
                prop_assert!(
                    rest.starts_with("<span") || rest.starts_with("</span>") || rest.starts_with("<br/>"),
                    "unexpected markup in {:?}",
                    result
                );
            }
        }
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let config = WeightHighlightConfig::default();

        for depth in [10, 127, 128, 129, 1_000] {
            let content = format!("{}x{}", "{a".repeat(depth), "}".repeat(depth));
            let segments = parsing::parse(&content, &config);
            assert_eq!(render_segments(&Identity, &segments), content);

            let content = format!("{}x{}", "[a".repeat(depth), "]".repeat(depth));
            let _ = render(&content, &config);

            let content = "||a".repeat(depth);
            let segments = parsing::parse(&content, &config);
            assert_eq!(render_segments(&Identity, &segments), content);
        }
    }
}

#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use promptweight::formatting::*;
    use promptweight::language::WeightHighlightConfig;
    use promptweight::parsing;
    use promptweight::rendering::render_segments;

    fn sample_files() -> Vec<PathBuf> {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in samples directory");

        files
    }

    /// Every sample, well-formed or not, must come back out of the Identity
    /// renderer exactly as it went in.
    #[test]
    fn ensure_samples_reproduced() {
        let config = WeightHighlightConfig::default();
        let mut failures = Vec::new();

        for file in &sample_files() {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let segments = parsing::parse(&content, &config);
            let result = render_segments(&Identity, &segments);

            if result != content {
                println!("File {:?} was not reproduced", file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Samples should render unchanged with Identity, but {} did not",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_samples_have_weights() {
        let config = WeightHighlightConfig::default();

        for file in &sample_files() {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let segments = parsing::parse(&content, &config);
            let fragments = format_segments(&segments);

            let weighted = fragments
                .iter()
                .filter(|(syntax, _)| matches!(syntax, Syntax::Weighted(w) if *w != 1.0))
                .count();

            assert!(weighted > 0, "{:?} has no weighted text", file);
        }
    }

    #[test]
    fn missing_file() {
        let result = parsing::load(Path::new("tests/samples/nonexistent.txt"));
        let error = result.unwrap_err();
        assert_eq!(error.problem, "File not found");
    }
}

/// Compile a regular expression once and hand back a `&'static Regex` on
/// every subsequent use.
#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

//! Include directive extraction.

use regex_lite::Regex;
use std::sync::OnceLock;

/// A directive is a line that, after leading whitespace, starts with
/// `#`, optional whitespace, `include`, then a `"..."` or `<...>` token.
fn directive_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*#\s*include\s*(?:"([^"]+)"|<([^>]+)>)"#)
            .expect("include directive regex is valid")
    })
}

/// Extract literal include targets from raw source text.
///
/// Returns the string inside the delimiters, in declaration order.
/// Tolerates leading whitespace, whitespace between `#` and `include`,
/// either delimiter style, and a missing separator before the token
/// (`#include"a.h"` is accepted, one step laxer than the preprocessor
/// grammar). Files without directives yield an empty vec; extraction
/// never fails.
pub fn extract_includes(text: &str) -> Vec<String> {
    let re = directive_regex();
    text.lines()
        .filter_map(|line| {
            re.captures(line).and_then(|caps| {
                caps.get(1)
                    .or_else(|| caps.get(2))
                    .map(|m| m.as_str().to_string())
            })
        })
        .collect()
}

// src/extract.rs
//
// Best-effort identifier extraction for artifact naming. A regex
// heuristic, not a parser: first match wins, ASCII identifiers only, and
// interface-only or class-free files fall back to a fixed name. Nothing
// downstream depends on this being semantically right.

use regex::Regex;

pub const FALLBACK_IDENTIFIER: &str = "Generated";

/// Primary type name of `code`, picked by a language-aware pattern.
/// Unrecognized languages use the generic `class <name>` pattern.
pub fn extract_class_name(code: &str, language: &str) -> String {
    // Anchored to line starts so prose mentioning "class" does not count
    // as a declaration.
    let pattern = match language.to_ascii_lowercase().as_str() {
        "python" => r"(?m)^\s*class\s+(\w+)",
        "java" => r"(?m)^\s*public\s+class\s+(\w+)",
        _ => r"(?m)^\s*class\s+(\w+)",
    };

    let re = Regex::new(pattern).unwrap();
    re.captures(code)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| FALLBACK_IDENTIFIER.to_string())
}

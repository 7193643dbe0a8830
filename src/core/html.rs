// src/core/html.rs
//
// Text helpers for single-line markup fragments. Nothing here understands
// nesting; a fragment is treated as a flat run of tags and text.

use super::sanitize::{normalize_entities, normalize_ws};

/// Drop everything between `<` and `>` and collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Visible text of a captured cell: tags removed, then entities decoded, trimmed.
/// Decoding comes second so an escaped `&lt;` stays text.
/// Returns `None` when nothing visible is left.
pub fn visible_text(fragment: &str) -> Option<String> {
    let text = normalize_ws(&normalize_entities(&strip_tags(fragment)));
    if text.is_empty() { None } else { Some(text) }
}

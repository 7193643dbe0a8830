// src/core/sanitize.rs

/// Named entities that show up in Spanish-language ranking pages.
/// `&amp;` is decoded last so `&amp;nbsp;` stays literal text.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&aacute;", "á"), ("&eacute;", "é"), ("&iacute;", "í"),
    ("&oacute;", "ó"), ("&uacute;", "ú"), ("&ntilde;", "ñ"), ("&uuml;", "ü"),
    ("&Aacute;", "Á"), ("&Eacute;", "É"), ("&Iacute;", "Í"),
    ("&Oacute;", "Ó"), ("&Uacute;", "Ú"), ("&Ntilde;", "Ñ"), ("&Uuml;", "Ü"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = s.to_string();
    for (entity, text) in ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, text);
        }
    }
    out.replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File-name-safe stem: ASCII alphanumerics, `-` and `_`; whitespace runs become `_`.
/// Falls back to `fallback` when nothing usable remains.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_decode_accents_and_ampersand() {
        assert_eq!(normalize_entities("Posici&oacute;n"), "Posición");
        assert_eq!(normalize_entities("Procter &amp; Gamble"), "Procter & Gamble");
        assert_eq!(normalize_entities("&amp;nbsp;"), "&nbsp;");
    }

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Jane \t\n Doe  "), "Jane Doe");
    }

    #[test]
    fn filename_is_ascii_and_underscored() {
        assert_eq!(sanitize_filename("Grupo  Aval S.A.", "x"), "Grupo_Aval_SA");
        assert_eq!(sanitize_filename("__a-b__", "x"), "a-b");
        assert_eq!(sanitize_filename("ñ!?", "report"), "report");
    }
}

use std::sync::OnceLock;

use regex::Regex;

/// Typographic double quotes folded to `"` before matching.
const SMART_QUOTES: [char; 3] = ['\u{201C}', '\u{201D}', '\u{201E}'];

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex must compile"))
}

/// Collapse every whitespace run to a single space and fold smart quotes.
pub fn normalize_text(raw: &str) -> String {
    let collapsed = whitespace_re().replace_all(raw, " ");
    collapsed.replace(&SMART_QUOTES[..], "\"")
}

/// The first `chars` characters of `text` (not bytes).
pub fn head(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

//! Clean raw PDF text before field extraction.

use regex::Regex;

fn page_marker_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Page\s+\d+\s+of\s+\d+").unwrap())
}

fn banner_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)United States Patent.*?Trademark Office").unwrap())
}

/// A newline followed by a lowercase letter is a wrapped line.
fn continuation_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n([a-z])").unwrap())
}

fn blank_lines_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n+").unwrap())
}

fn spaces_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+").unwrap())
}

/// Strip page counters and the USPTO banner, re-join wrapped lines and
/// collapse blank lines and runs of spaces.
pub fn normalize_text(raw: &str) -> String {
    let text = page_marker_regex().replace_all(raw, "");
    let text = banner_regex().replace_all(&text, "");
    let text = continuation_regex().replace_all(&text, " $1");
    let text = blank_lines_regex().replace_all(&text, "\n");
    let text = spaces_regex().replace_all(&text, " ");
    text.trim().to_string()
}

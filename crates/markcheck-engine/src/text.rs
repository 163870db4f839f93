//! Small string helpers shared by the pillars and the report renderers.

/// First `max_chars` characters of `s`, never splitting a code point.
pub(crate) fn head(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// `head` plus an ellipsis marker when something was cut.
pub(crate) fn head_with_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", head(s, max_chars))
    } else {
        s.to_string()
    }
}

/// Split an identification into comma/semicolon-separated terms, trimmed, empties dropped.
pub(crate) fn split_terms(text: &str) -> Vec<String> {
    text.replace(';', ",")
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Needles present in `haystack`, in table order.
pub(crate) fn matches_of<'a>(haystack: &str, needles: &[&'a str]) -> Vec<&'a str> {
    needles.iter().copied().filter(|n| haystack.contains(n)).collect()
}

/// Shorten to at most `max_chars`, cutting at a word boundary and appending `…`.
pub(crate) fn condense(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut = head(&flat, max_chars.saturating_sub(1));
    let trimmed = match cut.rfind(' ') {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut,
    };
    format!("{}…", trimmed.trim_end_matches(&[',', ';', '.', ':'][..]))
}

/// Comma-joined class numbers, e.g. `9, 25, 42`.
pub(crate) fn join_classes<'a>(classes: impl IntoIterator<Item = &'a i32>) -> String {
    classes
        .into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

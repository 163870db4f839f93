//! Pattern detectors shared by the §1402 checks. All matching is case-insensitive.

use std::collections::BTreeSet;

use regex::Regex;

/// Indefinite or catch-all wording, in report order.
pub const VAGUE_TERMS: [&str; 22] = [
    "including",
    "and related",
    "etc",
    "etc.",
    "products",
    "services",
    "solutions",
    "technology",
    "equipment",
    "devices",
    "materials",
    "systems",
    "components",
    "platform",
    "miscellaneous",
    "various",
    "all types",
    "any",
    "type of",
    "kind of",
    "and the like",
    "other",
];

/// Vague terms that are never acceptable, whatever follows them.
pub const SEVERE_VAGUE_TERMS: [&str; 7] = [
    "miscellaneous", "various", "all types", "any", "and the like", "etc", "etc.",
];

pub const PLACEHOLDERS: [&str; 7] = [
    "tbd", "to be determined", "see attached", "n/a", "[insert]", "xxx", "your goods here",
];

pub const BANNED_TERMS: [&str; 2] = ["applicant", "registrant"];

pub const FUTURE_TENSE_TERMS: [&str; 5] = ["will", "intend", "planning to", "proposed", "future"];

pub const EXCESSIVE_AND_ISSUE: &str =
    "Excessive conjunction stacking ('and') may indicate over-breadth.";
pub const BRACKET_ISSUE: &str =
    "Parentheses or brackets detected. Prohibited under TMEP §1402.12.";

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

fn whole_word(term: &str) -> String {
    format!(r"(?i)\b{}\b", regex::escape(term))
}

fn vague_term_regexes() -> &'static [(&'static str, Regex)] {
    use std::sync::OnceLock;
    static RE: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RE.get_or_init(|| {
        VAGUE_TERMS
            .iter()
            .map(|term| {
                let pattern = format!(r"(?i)\b{}(?:\b|\.|\s|$)", regex::escape(term));
                (*term, Regex::new(&pattern).unwrap())
            })
            .collect()
    })
}

fn qualified_services_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\bservices\s+(for|in|of|namely|consisting)\b").unwrap()
    })
}

fn purpose_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(for|namely|consisting of|in the field of|used for)\b").unwrap()
    })
}

fn and_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\band\b").unwrap())
}

fn bracket_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[()\[\]{}]").unwrap())
}

fn word_list_regexes(terms: &'static [&'static str]) -> Vec<(&'static str, Regex)> {
    terms
        .iter()
        .map(|t| (*t, Regex::new(&whole_word(t)).unwrap()))
        .collect()
}

fn banned_regexes() -> &'static [(&'static str, Regex)] {
    use std::sync::OnceLock;
    static RE: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RE.get_or_init(|| word_list_regexes(&BANNED_TERMS))
}

fn future_tense_regexes() -> &'static [(&'static str, Regex)] {
    use std::sync::OnceLock;
    static RE: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RE.get_or_init(|| word_list_regexes(&FUTURE_TENSE_TERMS))
}

fn service_word_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bservices?\b").unwrap())
}

fn service_activity_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\bservices for\b|\bservices in the (nature|field)\b|\b(providing|rendering|offering|consulting)\b",
        )
        .unwrap()
    })
}

fn internal_activity_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(our|my|the company'?s|internal)\b").unwrap())
}

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

/// Semicolon-separated segments, trimmed, empties dropped.
pub fn segments(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn has_purpose_language(text: &str) -> bool {
    purpose_regex().is_match(text)
}

/// Vague terms present in `text`. A bare "services" counts; "services for/in/of…" does not.
pub fn vague_terms(text: &str) -> Vec<&'static str> {
    let qualified_services = qualified_services_regex().is_match(text);
    vague_term_regexes()
        .iter()
        .filter(|(term, re)| re.is_match(text) && !(*term == "services" && qualified_services))
        .map(|(term, _)| *term)
        .collect()
}

pub fn is_severe(term: &str) -> bool {
    SEVERE_VAGUE_TERMS.contains(&term)
}

/// Structural problems in report order: "and" stacking, then brackets.
pub fn structural_issues(text: &str, and_stack_limit: usize) -> Vec<&'static str> {
    let mut issues = Vec::new();
    if and_regex().find_iter(text).count() > and_stack_limit {
        issues.push(EXCESSIVE_AND_ISSUE);
    }
    if bracket_regex().is_match(text) {
        issues.push(BRACKET_ISSUE);
    }
    issues
}

pub fn banned_terms(text: &str) -> Vec<&'static str> {
    banned_regexes()
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(term, _)| *term)
        .collect()
}

pub fn future_tense_terms(text: &str) -> Vec<&'static str> {
    future_tense_regexes()
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(term, _)| *term)
        .collect()
}

/// Fallback services detection when no class category is known.
pub fn mentions_services(text: &str) -> bool {
    service_word_regex().is_match(text)
}

pub fn has_service_activity(text: &str) -> bool {
    service_activity_regex().is_match(text)
}

pub fn has_internal_activity(text: &str) -> bool {
    internal_activity_regex().is_match(text)
}

pub fn placeholder_in(text_lower: &str) -> bool {
    PLACEHOLDERS.iter().any(|p| text_lower.contains(p))
}

/// Lowercased word tokens of at least `min_len` characters.
pub fn word_set(text: &str, min_len: usize) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| w.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}

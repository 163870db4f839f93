//! Bag-of-words keyword matcher.
//!
//! Scoring per keyword is exclusive: exact match +10, else substring either way +5,
//! else any query word found inside the keyword +2. Downstream cutoffs (≥5, ≥7)
//! depend on these exact weights.

use serde::Serialize;

use crate::classes::NICE_CLASSES;

pub const MAX_SUGGESTIONS: usize = 5;

const EXACT_MATCH:   u32 = 10;
const PARTIAL_MATCH: u32 = 5;
const WORD_MATCH:    u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSuggestion {
    pub class_number: i32,
    pub title: &'static str,
    pub score: u32,
}

/// Rank classes for a free-text term. Ties keep class order; at most five results.
pub fn suggest_class_for_keyword(term: &str) -> Vec<ClassSuggestion> {
    let query = term.trim().to_lowercase();
    let words: Vec<&str> = query.split_whitespace().collect();

    let mut suggestions: Vec<ClassSuggestion> = NICE_CLASSES
        .iter()
        .filter_map(|class| {
            let score: u32 = class
                .keywords
                .iter()
                .map(|kw| keyword_score(&query, &words, kw))
                .sum();
            (score > 0).then(|| ClassSuggestion {
                class_number: class.number,
                title: class.title,
                score,
            })
        })
        .collect();

    // sort_by is stable, so equal scores stay in class order
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Best suggestion for a term, if any class scored.
pub fn top_suggestion(term: &str) -> Option<ClassSuggestion> {
    suggest_class_for_keyword(term).into_iter().next()
}

fn keyword_score(query: &str, words: &[&str], keyword: &str) -> u32 {
    if query == keyword {
        EXACT_MATCH
    } else if keyword.contains(query) || query.contains(keyword) {
        PARTIAL_MATCH
    } else if words.iter().any(|w| keyword.contains(w)) {
        WORD_MATCH
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_software_ranks_class_9_first() {
        let top = top_suggestion("software").unwrap();
        assert_eq!(top.class_number, 9);
        assert!(top.score >= 10);
    }

    #[test]
    fn test_suggestions_are_deterministic() {
        let first = suggest_class_for_keyword("organic coffee beans");
        let second = suggest_class_for_keyword("organic coffee beans");
        assert_eq!(first, second);
    }

    #[test]
    fn test_results_sorted_descending_and_capped() {
        let suggestions = suggest_class_for_keyword("service");
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_query_is_trimmed_and_case_folded() {
        assert_eq!(
            suggest_class_for_keyword("  SOFTWARE "),
            suggest_class_for_keyword("software"),
        );
    }

    #[test]
    fn test_no_match_gives_empty_list() {
        assert!(suggest_class_for_keyword("zzqxj").is_empty());
    }

    #[test]
    fn test_keyword_score_branches_are_exclusive() {
        assert_eq!(keyword_score("app", &["app"], "app"), EXACT_MATCH);
        assert_eq!(keyword_score("mobile app", &["mobile", "app"], "app"), PARTIAL_MATCH);
        assert_eq!(keyword_score("fresh bread", &["fresh", "bread"], "bread dough"), WORD_MATCH);
        assert_eq!(keyword_score("fresh loaf", &["fresh", "loaf"], "cheese"), 0);
    }
}

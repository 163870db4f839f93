//! Tunable decision thresholds for the assessment engine.
//! Defaults reproduce the USPTO examination heuristics the checks were calibrated against.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub pillar1: Pillar1Config,
    #[serde(default)]
    pub pillar2: Pillar2Config,
    #[serde(default)]
    pub pillar3: Pillar3Config,
}

/// §1401 classification thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar1Config {
    /// Keyword score at which another class is suggested over the claimed one.
    #[serde(default = "default_designation_min_score")]
    pub designation_min_score: u32,
    #[serde(default = "default_alignment_min_score")]
    pub alignment_min_score: u32,
    #[serde(default = "default_bundling_min_score")]
    pub bundling_min_score: u32,
    #[serde(default = "default_bundling_min_classes")]
    pub bundling_min_classes: usize,
    /// Leading keywords per class compared against a specimen description.
    #[serde(default = "default_specimen_keyword_window")]
    pub specimen_keyword_window: usize,
    #[serde(default = "default_specimen_min_other_hits")]
    pub specimen_min_other_hits: usize,
    #[serde(default = "default_current_edition")]
    pub current_edition: String,
}

fn default_designation_min_score()   -> u32 { 5 }
fn default_alignment_min_score()     -> u32 { 7 }
fn default_bundling_min_score()      -> u32 { 5 }
fn default_bundling_min_classes()    -> usize { 2 }
fn default_specimen_keyword_window() -> usize { 10 }
fn default_specimen_min_other_hits() -> usize { 2 }
fn default_current_edition()         -> String { "12th".to_string() }

impl Default for Pillar1Config {
    fn default() -> Self {
        Self {
            designation_min_score: default_designation_min_score(),
            alignment_min_score: default_alignment_min_score(),
            bundling_min_score: default_bundling_min_score(),
            bundling_min_classes: default_bundling_min_classes(),
            specimen_keyword_window: default_specimen_keyword_window(),
            specimen_min_other_hits: default_specimen_min_other_hits(),
            current_edition: default_current_edition(),
        }
    }
}

/// §1402 identification thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar2Config {
    #[serde(default = "default_min_identification_chars")]
    pub min_identification_chars: usize,
    /// More "and" conjunctions than this is reported as over-breadth.
    #[serde(default = "default_and_stack_limit")]
    pub and_stack_limit: usize,
    #[serde(default = "default_accuracy_min_overlap")]
    pub accuracy_min_overlap: f64,
    /// The overlap test only applies when the specimen has more distinct words than this.
    #[serde(default = "default_accuracy_min_specimen_words")]
    pub accuracy_min_specimen_words: usize,
    #[serde(default = "default_accuracy_min_word_len")]
    pub accuracy_min_word_len: usize,
}

fn default_min_identification_chars()    -> usize { 10 }
fn default_and_stack_limit()             -> usize { 3 }
fn default_accuracy_min_overlap()        -> f64 { 0.10 }
fn default_accuracy_min_specimen_words() -> usize { 3 }
fn default_accuracy_min_word_len()       -> usize { 4 }

impl Default for Pillar2Config {
    fn default() -> Self {
        Self {
            min_identification_chars: default_min_identification_chars(),
            and_stack_limit: default_and_stack_limit(),
            accuracy_min_overlap: default_accuracy_min_overlap(),
            accuracy_min_specimen_words: default_accuracy_min_specimen_words(),
            accuracy_min_word_len: default_accuracy_min_word_len(),
        }
    }
}

/// §1403 multi-class thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar3Config {
    /// Combined Pillar 1 + Pillar 2 errors that make a class a refusal candidate.
    #[serde(default = "default_refusal_candidate_errors")]
    pub refusal_candidate_errors: usize,
    #[serde(default = "default_amendment_shared_words")]
    pub amendment_shared_words: usize,
    #[serde(default = "default_surrender_min_word_len")]
    pub surrender_min_word_len: usize,
}

fn default_refusal_candidate_errors() -> usize { 3 }
fn default_amendment_shared_words()   -> usize { 3 }
fn default_surrender_min_word_len()   -> usize { 5 }

impl Default for Pillar3Config {
    fn default() -> Self {
        Self {
            refusal_candidate_errors: default_refusal_candidate_errors(),
            amendment_shared_words: default_amendment_shared_words(),
            surrender_min_word_len: default_surrender_min_word_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_table_gives_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.pillar1.designation_min_score, 5);
        assert_eq!(config.pillar1.alignment_min_score, 7);
        assert_eq!(config.pillar3.amendment_shared_words, 3);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"pillar1": {"alignment_min_score": 9}, "pillar2": {"accuracy_min_overlap": 0.25}}"#,
        )
        .unwrap();
        assert_eq!(config.pillar1.alignment_min_score, 9);
        assert_eq!(config.pillar1.designation_min_score, 5);
        assert_eq!(config.pillar2.accuracy_min_overlap, 0.25);
        assert_eq!(config.pillar3, Pillar3Config::default());
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let parsed = serde_json::from_str::<EngineConfig>(r#"{"pillar3": {"refusal_candidate_errors": "three"}}"#);
        assert!(parsed.is_err());
    }
}

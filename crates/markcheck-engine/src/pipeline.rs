//! Three-pillar pipeline.
//!
//! Pillar 1 runs on the whole application; Pillar 2 runs per class with context
//! taken from Pillar 1; Pillar 3 consumes per-class summaries of both.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use markcheck_common::{ApplicationInput, EngineConfig};

use crate::classification::{assess_classification, ClassificationResult};
use crate::identification::{analyze_identification, ClassContext, IdentificationAnalysis};
use crate::model::TrademarkApplication;
use crate::multiclass::{assess_multi_class, ClassSummary, MultiClassContext, MultiClassResult};
use crate::report;

/// Headline numbers across all three pillars.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CombinedSummary {
    pub pillar1_errors: usize,
    pub pillar1_warnings: usize,
    pub pillar2_errors: usize,
    pub pillar2_warnings: usize,
    pub pillar3_errors: usize,
    pub pillar3_warnings: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub partial_refusal_classes: Vec<i32>,
    pub division_recommended: bool,
    pub division_eligible_classes: Vec<i32>,
    pub overall_compliant: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub assessment_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub pillar1: ClassificationResult,
    /// Keyed by class number.
    pub pillar2: BTreeMap<i32, IdentificationAnalysis>,
    pub pillar3: MultiClassResult,
    pub summary: CombinedSummary,
}

impl PipelineResult {
    /// All reports in pillar order, followed by the conclusion.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.pillar1.report);
        out.push('\n');
        for analysis in self.pillar2.values() {
            out.push_str(&format!("\n{}\n", report::identification::render(analysis)));
        }
        out.push_str(&format!("\n{}\n", report::multiclass::render(&self.pillar3)));
        out.push_str(&format!("\n{}\n", report::conclusion::render(&self.summary)));
        out
    }
}

pub fn run_full_pipeline(input: &ApplicationInput, config: &EngineConfig) -> PipelineResult {
    let app = TrademarkApplication::from_input(input);

    // Pillar 1
    let pillar1 = assess_classification(&app, config);

    // Pillar 2, later duplicates of a class number replace earlier ones
    let mut pillar2 = BTreeMap::new();
    for entry in &app.classes {
        let context = ClassContext::from_class(entry, &pillar1.findings);
        let analysis = analyze_identification(&entry.identification, Some(&context), &config.pillar2);
        pillar2.insert(entry.class_number, analysis);
    }

    // Pillar 3
    let summaries: Vec<ClassSummary> = app
        .classes
        .iter()
        .map(|entry| {
            ClassSummary::build(
                entry,
                &pillar1.findings,
                pillar2.get(&entry.class_number),
                &config.pillar3,
            )
        })
        .collect();
    let context = MultiClassContext::from_input(input);
    let pillar3 = assess_multi_class(&summaries, &context, &config.pillar3);

    let summary = combine(&pillar1, &pillar2, &pillar3);
    let result = PipelineResult {
        assessment_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        pillar1,
        pillar2,
        pillar3,
        summary,
    };

    info!(
        assessment_id = %result.assessment_id,
        total_errors = result.summary.total_errors,
        total_warnings = result.summary.total_warnings,
        compliant = result.summary.overall_compliant,
        "Full assessment complete"
    );
    result
}

fn combine(
    pillar1: &ClassificationResult,
    pillar2: &BTreeMap<i32, IdentificationAnalysis>,
    pillar3: &MultiClassResult,
) -> CombinedSummary {
    let pillar1_errors = pillar1.summary.errors;
    let pillar1_warnings = pillar1.summary.warnings;
    let pillar2_errors: usize = pillar2.values().map(|a| a.summary.errors).sum();
    let pillar2_warnings: usize = pillar2.values().map(|a| a.summary.warnings).sum();

    CombinedSummary {
        pillar1_errors,
        pillar1_warnings,
        pillar2_errors,
        pillar2_warnings,
        pillar3_errors: pillar3.total_errors,
        pillar3_warnings: pillar3.total_warnings,
        total_errors: pillar1_errors + pillar2_errors + pillar3.total_errors,
        total_warnings: pillar1_warnings + pillar2_warnings + pillar3.total_warnings,
        partial_refusal_classes: pillar3.partial_refusal_classes.clone(),
        division_recommended: pillar3.division_recommended,
        division_eligible_classes: pillar3.division_eligible_classes.clone(),
        overall_compliant: pillar3.is_multi_class_compliant && pillar1_errors == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn input(value: serde_json::Value) -> ApplicationInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_pillar2_keyed_by_class_with_later_duplicate_winning() {
        let input = input(json!({
            "classes": [
                {"class_number": 25, "identification": "Shirts"},
                {"class_number": 25, "identification": "Hats"}
            ]
        }));
        let result = run_full_pipeline(&input, &EngineConfig::default());
        assert_eq!(result.pillar2.len(), 1);
        assert_eq!(result.pillar2[&25].verbatim_text, "Hats");
    }

    #[test]
    fn test_summary_totals_add_up() {
        let input = input(json!({
            "fees_paid_count": 1,
            "classes": [
                {"class_number": 9, "identification": "Downloadable software for financial management", "filing_basis": "1(b)"},
                {"class_number": 25, "identification": "Software for inventory management", "filing_basis": "1(b)"}
            ]
        }));
        let result = run_full_pipeline(&input, &EngineConfig::default());
        let s = &result.summary;
        assert_eq!(s.total_errors, s.pillar1_errors + s.pillar2_errors + s.pillar3_errors);
        assert_eq!(s.total_warnings, s.pillar1_warnings + s.pillar2_warnings + s.pillar3_warnings);
        assert!(s.pillar1_errors > 0);
        assert!(!s.overall_compliant);
    }

    #[test]
    fn test_render_text_contains_every_block() {
        let input = input(json!({
            "classes": [
                {"class_number": 9, "identification": "Downloadable software for financial management"},
                {"class_number": 42, "identification": "Software as a service featuring software for financial management"}
            ]
        }));
        let text = run_full_pipeline(&input, &EngineConfig::default()).render_text();
        assert!(text.contains("TRADEMARK CLASSIFICATION ASSESSMENT"));
        assert!(text.contains("IDENTIFICATION REVIEW  |  Class 9"));
        assert!(text.contains("IDENTIFICATION REVIEW  |  Class 42"));
        assert!(text.contains("MULTI-CLASS FILING REVIEW"));
        assert!(text.contains("ASSESSMENT CONCLUSION"));
    }
}

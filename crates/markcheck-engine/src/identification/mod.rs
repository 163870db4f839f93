//! Pillar 2: definiteness of the identification of goods and services (TMEP §1402).
//!
//! Runs per class, fed by the Pillar 1 [`ClassContext`] when one exists, or standalone on a bare
//! identification string.

mod checks;
mod context;
mod detectors;

pub use context::ClassContext;

use serde::Serialize;
use tracing::debug;

use markcheck_common::{Finding, Pillar2Config, SeverityCounts};

use checks::Lens;

/// Outcome of the §1402 lens for one identification.
#[derive(Debug, Clone, Serialize)]
pub struct IdentificationAnalysis {
    /// 0 for a standalone review.
    pub class_number: i32,
    pub verbatim_text: String,
    pub is_definite: bool,
    pub identified_goods_services: Vec<String>,
    pub purpose_detected: bool,
    pub vague_terms_found: Vec<String>,
    pub structural_issues: Vec<String>,
    pub reasoning: String,
    pub findings: Vec<Finding>,
    pub context_note: String,
    pub summary: SeverityCounts,
}

impl IdentificationAnalysis {
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == markcheck_common::Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == markcheck_common::Severity::Warning)
    }
}

/// Run all eight §1402 checks on `text`.
pub fn analyze_identification(
    text: &str,
    context: Option<&ClassContext>,
    config: &Pillar2Config,
) -> IdentificationAnalysis {
    let segments = detectors::segments(text);
    let vague = detectors::vague_terms(text);
    let structural = detectors::structural_issues(text, config.and_stack_limit);
    let purpose_detected = detectors::has_purpose_language(text);

    let lens = Lens {
        text,
        context,
        config,
    };
    let findings = vec![
        lens.check_items_listed(&segments),
        lens.check_filing_date_entitlement(),
        lens.check_specificity(&vague),
        lens.check_accuracy(),
        lens.check_banned_terms(),
        lens.check_intent_to_use(),
        lens.check_services_for_others(),
        lens.check_brackets(&structural),
    ];

    let summary = SeverityCounts::from_findings(&findings);
    let is_definite = summary.errors == 0;
    let reasoning = reasoning(&summary, &vague, purpose_detected, &structural);
    let class_number = context.map(|c| c.class_number).unwrap_or(0);

    debug!(
        class_number,
        errors = summary.errors,
        warnings = summary.warnings,
        is_definite,
        "identification analysed"
    );

    IdentificationAnalysis {
        class_number,
        verbatim_text: text.to_string(),
        is_definite,
        identified_goods_services: segments,
        purpose_detected,
        vague_terms_found: vague.iter().map(|t| t.to_string()).collect(),
        structural_issues: structural.iter().map(|s| s.to_string()).collect(),
        reasoning,
        findings,
        context_note: context_note(context),
        summary,
    }
}

fn reasoning(
    summary: &SeverityCounts,
    vague: &[&str],
    purpose_detected: bool,
    structural: &[&str],
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if summary.errors == 0 && summary.warnings == 0 {
        parts.push(
            "The identification appears to list particular goods/services with sufficient \
             specificity under TMEP §1402."
                .to_string(),
        );
    } else if summary.errors == 0 {
        parts.push(format!(
            "The identification meets minimum §1402 standards but has {} warning(s) that should \
             be addressed.",
            summary.warnings
        ));
    } else {
        parts.push(format!(
            "The identification does not sufficiently identify particular goods/services as \
             required by TMEP §1402. {} error(s) must be corrected.",
            summary.errors
        ));
    }

    if !vague.is_empty() {
        parts.push(format!("Vague terminology: {}.", vague.join(", ")));
    }
    if !purpose_detected {
        parts.push(
            "No explicit commercial purpose qualifier detected (may be required depending on \
             class)."
                .to_string(),
        );
    }
    parts.extend(structural.iter().map(|s| s.to_string()));

    parts.join(" ")
}

fn context_note(context: Option<&ClassContext>) -> String {
    let Some(ctx) = context else {
        return "No Pillar 1 context — standalone assessment only.".to_string();
    };
    let category = ctx
        .category
        .map(|c| c.as_str().to_uppercase())
        .unwrap_or_else(|| "UNKNOWN".to_string());
    let mut note = format!(
        "Assessed in context of Class {} ({}) [{category}] as determined by Pillar 1. Filing \
         basis: {}. ",
        ctx.class_number, ctx.class_title, ctx.filing_basis
    );
    if ctx.has_class_error {
        note.push_str(
            "⚠ Pillar 1 flagged a classification ERROR — some Pillar 2 checks are deferred until \
             class is corrected.",
        );
    }
    note
}

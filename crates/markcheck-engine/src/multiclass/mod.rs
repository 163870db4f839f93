//! Pillar 3 — multi-class application requirements, TMEP §1403.01 through §1403.06.
//!
//! Operates on [`ClassSummary`] records that the caller builds from Pillar 1 and
//! Pillar 2 output, so this module never runs the other pillars itself.

mod amendment;
mod completeness;
mod context;
mod division;
mod post_filing;
mod summary;

pub use context::MultiClassContext;
pub use summary::{ClassStatus, ClassSummary};

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, info};

use markcheck_common::{Finding, Pillar, Pillar3Config, Severity, SeverityCounts};

/// Output of a Pillar 3 run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MultiClassResult {
    pub findings: Vec<Finding>,
    pub division_eligible_classes: Vec<i32>,
    pub division_recommended: bool,
    pub partial_refusal_classes: Vec<i32>,
    pub partial_refusal_reasons: BTreeMap<i32, String>,
    pub is_multi_class_compliant: bool,
    pub total_errors: usize,
    pub total_warnings: usize,
}

/// Run the §1403 checks. Single-class applications get one INFO finding and nothing else.
pub fn assess_multi_class(
    classes: &[ClassSummary],
    context: &MultiClassContext,
    config: &Pillar3Config,
) -> MultiClassResult {
    let result = MultiClassAssessor::new(classes, context, config).run();
    info!(
        classes = classes.len(),
        errors = result.total_errors,
        warnings = result.total_warnings,
        partial_refusals = result.partial_refusal_classes.len(),
        division_recommended = result.division_recommended,
        "Pillar 3 multi-class assessment complete"
    );
    result
}

// ---------------------------------------------------------------------------
// Assessor
// ---------------------------------------------------------------------------

struct MultiClassAssessor<'a> {
    classes: &'a [ClassSummary],
    ctx: &'a MultiClassContext,
    config: &'a Pillar3Config,
    findings: Vec<Finding>,
    division_eligible: Vec<i32>,
    refusal_classes: Vec<i32>,
    refusal_reasons: BTreeMap<i32, String>,
}

impl<'a> MultiClassAssessor<'a> {
    fn new(
        classes: &'a [ClassSummary],
        ctx: &'a MultiClassContext,
        config: &'a Pillar3Config,
    ) -> Self {
        Self {
            classes,
            ctx,
            config,
            findings: Vec::new(),
            division_eligible: Vec::new(),
            refusal_classes: Vec::new(),
            refusal_reasons: BTreeMap::new(),
        }
    }

    fn run(mut self) -> MultiClassResult {
        if self.distinct_classes().len() < 2 {
            self.push(
                "§1403",
                Severity::Info,
                0,
                "Single-class application",
                "Application contains only one class. §1403 multi-class requirements do not \
                 apply.",
                "No §1403 action required.",
            );
            return self.into_result();
        }

        let checks: [(&str, fn(&mut Self)); 6] = [
            ("§1403.01", Self::check_multi_class_requirements),
            ("§1403.02", Self::check_amendment_scope),
            ("§1403.03", Self::check_division_eligibility),
            ("§1403.04", Self::check_partial_refusals),
            ("§1403.05", Self::check_post_filing_fees),
            ("§1403.06", Self::check_surrender),
        ];

        for (section, check) in checks {
            let before = self.findings.len();
            check(&mut self);
            debug!(section, added = self.findings.len() - before, "check complete");
        }
        self.into_result()
    }

    fn into_result(self) -> MultiClassResult {
        let counts = SeverityCounts::from_findings(&self.findings);
        MultiClassResult {
            division_recommended: !self.division_eligible.is_empty(),
            division_eligible_classes: self.division_eligible,
            partial_refusal_classes: self.refusal_classes,
            partial_refusal_reasons: self.refusal_reasons,
            is_multi_class_compliant: counts.errors == 0,
            total_errors: counts.errors,
            total_warnings: counts.warnings,
            findings: self.findings,
        }
    }

    fn distinct_classes(&self) -> BTreeSet<i32> {
        self.classes.iter().map(|c| c.class_number).collect()
    }

    fn all_class_numbers(&self) -> Vec<i32> {
        self.classes.iter().map(|c| c.class_number).collect()
    }

    fn push(
        &mut self,
        section: &str,
        severity: Severity,
        class_number: i32,
        item: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) {
        self.findings.push(Finding::new(
            Pillar::MultiClass,
            section,
            severity,
            class_number,
            item,
            message,
            recommendation,
        ));
    }

    /// `push` with upstream provenance.
    #[allow(clippy::too_many_arguments)]
    fn push_from(
        &mut self,
        source: impl Into<String>,
        section: &str,
        severity: Severity,
        class_number: i32,
        item: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) {
        self.findings.push(
            Finding::new(
                Pillar::MultiClass,
                section,
                severity,
                class_number,
                item,
                message,
                recommendation,
            )
            .triggered_by(source),
        );
    }
}

/// Lowercased whitespace tokens, minus `stopwords`.
fn identification_words(text: &str, stopwords: &[&str]) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| !stopwords.contains(w))
        .map(str::to_string)
        .collect()
}

/// `Class 9, Class 25`.
pub(crate) fn class_list<'a>(classes: impl IntoIterator<Item = &'a i32>) -> String {
    classes
        .into_iter()
        .map(|c| format!("Class {c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn sorted(classes: &[i32]) -> Vec<i32> {
    let mut out = classes.to_vec();
    out.sort_unstable();
    out
}

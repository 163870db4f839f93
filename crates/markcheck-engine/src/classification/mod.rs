//! Pillar 1 — classification assessment, TMEP §1401.01 through §1401.15.
//!
//! Fifteen independent checks run in section order and append to one shared
//! finding list. No check halts the run or reads another check's findings,
//! except where a check looks back at findings it produced itself (§1401.03, §1401.08).

mod designation;
mod editions;
mod fees;
mod specimen;

use chrono::Local;
use serde::Serialize;
use tracing::{debug, info};

use markcheck_common::{EngineConfig, Finding, Pillar, Pillar1Config, Severity, SeverityCounts};

use crate::model::TrademarkApplication;
use crate::report;

/// Output of a Pillar 1 run.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub application: TrademarkApplication,
    pub findings: Vec<Finding>,
    pub summary: SeverityCounts,
    pub has_errors: bool,
    pub has_warnings: bool,
    pub report: String,
}

impl ClassificationResult {
    /// Findings about one class, including application-level ones.
    pub fn findings_for_class(&self, class_number: i32) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.concerns_class(class_number))
    }
}

/// Run all fifteen §1401 checks and render the Pillar 1 report.
pub fn assess_classification(
    app: &TrademarkApplication,
    config: &EngineConfig,
) -> ClassificationResult {
    let findings = ClassificationAssessor::new(app, &config.pillar1).run();
    let summary = SeverityCounts::from_findings(&findings);

    info!(
        classes = app.classes.len(),
        errors = summary.errors,
        warnings = summary.warnings,
        "Pillar 1 classification assessment complete"
    );

    let report = report::classification::render(app, &findings, &summary, Local::now().date_naive());

    ClassificationResult {
        application: app.clone(),
        has_errors: summary.has_errors(),
        has_warnings: summary.has_warnings(),
        findings,
        summary,
        report,
    }
}

// ---------------------------------------------------------------------------
// Assessor
// ---------------------------------------------------------------------------

pub(crate) struct ClassificationAssessor<'a> {
    app: &'a TrademarkApplication,
    config: &'a Pillar1Config,
    findings: Vec<Finding>,
}

impl<'a> ClassificationAssessor<'a> {
    pub(crate) fn new(app: &'a TrademarkApplication, config: &'a Pillar1Config) -> Self {
        Self { app, config, findings: Vec::new() }
    }

    pub(crate) fn run(mut self) -> Vec<Finding> {
        let checks: [(&str, fn(&mut Self)); 15] = [
            ("§1401.01", Self::check_statutory_authority),
            ("§1401.02", Self::check_international_classification),
            ("§1401.03", Self::check_designation_of_class),
            ("§1401.04", Self::check_fees),
            ("§1401.05", Self::check_classification_criteria),
            ("§1401.06", Self::check_specimen_classification),
            ("§1401.07", Self::check_specimen_characteristics),
            ("§1401.08", Self::check_identification_alignment),
            ("§1401.09", Self::check_nice_edition),
            ("§1401.10", Self::check_id_manual_dates),
            ("§1401.11", Self::check_class_42_split),
            ("§1401.12", Self::check_ninth_edition),
            ("§1401.13", Self::check_tenth_edition),
            ("§1401.14", Self::check_eleventh_edition),
            ("§1401.15", Self::check_twelfth_edition),
        ];

        for (section, check) in checks {
            let before = self.findings.len();
            check(&mut self);
            debug!(section, added = self.findings.len() - before, "check complete");
        }
        self.findings
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
            Pillar::Classification,
            section,
            severity,
            class_number,
            item,
            message,
            recommendation,
        ));
    }

    /// Any finding already recorded for `section` and `class_number` matching `pred`.
    fn has_finding(&self, section: &str, class_number: i32, pred: impl Fn(&Finding) -> bool) -> bool {
        self.findings
            .iter()
            .any(|f| f.section == section && f.class_number == class_number && pred(f))
    }
}

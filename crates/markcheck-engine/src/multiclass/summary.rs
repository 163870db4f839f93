//! Consolidated per-class view over Pillar 1 and Pillar 2 results.

use serde::Serialize;

use markcheck_common::{Category, Finding, Pillar3Config, Severity};
use markcheck_nice::get_class_info;

use crate::identification::IdentificationAnalysis;
use crate::model::{ClassEntry, FilingBasis};
use crate::text::head;

/// Combined standing of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassStatus {
    Clean,
    HasWarnings,
    HasErrors,
    RefusalCandidate,
}

impl ClassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassStatus::Clean => "CLEAN",
            ClassStatus::HasWarnings => "HAS_WARNINGS",
            ClassStatus::HasErrors => "HAS_ERRORS",
            ClassStatus::RefusalCandidate => "REFUSAL_CANDIDATE",
        }
    }
}

impl std::fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One class entry with its Pillar 1 and Pillar 2 outcome folded in.
/// Built once per run; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub class_number: i32,
    pub class_title: String,
    pub class_category: Option<Category>,
    pub identification: String,
    pub filing_basis: FilingBasis,
    pub specimen_type: String,
    pub specimen_description: String,
    pub date_of_first_use: Option<String>,
    pub date_of_first_use_commerce: Option<String>,
    pub fee_paid: bool,

    pub p1_error_count: usize,
    pub p1_warning_count: usize,
    /// First three Pillar 1 error messages, 100 chars each.
    pub p1_error_messages: Vec<String>,

    pub p2_is_definite: bool,
    pub p2_error_count: usize,
    pub p2_warning_count: usize,
    pub p2_error_messages: Vec<String>,

    pub status: ClassStatus,
}

impl ClassSummary {
    /// Fold the Pillar 1 findings for `entry` (and application-level ones) and the
    /// class's Pillar 2 analysis, if any, into one record.
    pub fn build(
        entry: &ClassEntry,
        p1_findings: &[Finding],
        p2: Option<&IdentificationAnalysis>,
        config: &Pillar3Config,
    ) -> Self {
        let relevant: Vec<&Finding> = p1_findings
            .iter()
            .filter(|f| f.concerns_class(entry.class_number))
            .collect();
        let p1_errors: Vec<&Finding> = relevant
            .iter()
            .copied()
            .filter(|f| f.severity == Severity::Error)
            .collect();
        let p1_warning_count = relevant
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count();
        let p1_error_messages = p1_errors
            .iter()
            .take(3)
            .map(|f| head(&f.message, 100).to_string())
            .collect();

        let (p2_is_definite, p2_error_count, p2_warning_count, p2_error_messages) = match p2 {
            Some(analysis) => (
                analysis.is_definite,
                analysis.summary.errors,
                analysis.summary.warnings,
                analysis
                    .errors()
                    .map(|f| head(&f.message, 100).to_string())
                    .collect(),
            ),
            None => (true, 0, 0, Vec::new()),
        };

        let total_errors = p1_errors.len() + p2_error_count;
        let total_warnings = p1_warning_count + p2_warning_count;
        let status = if total_errors >= config.refusal_candidate_errors {
            ClassStatus::RefusalCandidate
        } else if total_errors > 0 {
            ClassStatus::HasErrors
        } else if total_warnings > 0 {
            ClassStatus::HasWarnings
        } else {
            ClassStatus::Clean
        };

        let info = get_class_info(entry.class_number);
        Self {
            class_number: entry.class_number,
            class_title: info.map(|c| c.title.to_string()).unwrap_or_default(),
            class_category: info.map(|c| c.category),
            identification: entry.identification.clone(),
            filing_basis: entry.filing_basis.clone(),
            specimen_type: entry.specimen_type.clone(),
            specimen_description: entry.specimen_description.clone(),
            date_of_first_use: entry.date_of_first_use.clone(),
            date_of_first_use_commerce: entry.date_of_first_use_commerce.clone(),
            fee_paid: entry.fee_paid,
            p1_error_count: p1_errors.len(),
            p1_warning_count,
            p1_error_messages,
            p2_is_definite,
            p2_error_count,
            p2_warning_count,
            p2_error_messages,
            status,
        }
    }

    pub fn has_any_error(&self) -> bool {
        self.p1_error_count > 0 || self.p2_error_count > 0
    }

    pub fn has_any_warning(&self) -> bool {
        self.p1_warning_count > 0 || self.p2_warning_count > 0
    }

    pub fn is_use_based(&self) -> bool {
        self.filing_basis.is_use_based()
    }

    pub fn is_intent_to_use(&self) -> bool {
        self.filing_basis.is_intent_to_use()
    }

    /// `Class 9 (Scientific and Electronic Apparatus)`.
    pub fn label(&self) -> String {
        format!("Class {} ({})", self.class_number, self.class_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identification::{analyze_identification, ClassContext};
    use markcheck_common::{Pillar, Pillar2Config};
    use pretty_assertions::assert_eq;

    fn entry(class_number: i32, identification: &str) -> ClassEntry {
        ClassEntry {
            class_number,
            identification: identification.into(),
            specimen_type: "label".into(),
            specimen_description: String::new(),
            fee_paid: true,
            filing_basis: FilingBasis::UseInCommerce,
            date_of_first_use: None,
            date_of_first_use_commerce: None,
        }
    }

    fn p1(severity: Severity, class_number: i32, message: &str) -> Finding {
        Finding::new(Pillar::Classification, "§1401.03", severity, class_number, "item", message, "")
    }

    #[test]
    fn test_clean_class() {
        let summary = ClassSummary::build(&entry(25, "Shirts"), &[], None, &Pillar3Config::default());
        assert_eq!(summary.status, ClassStatus::Clean);
        assert_eq!(summary.label(), "Class 25 (Clothing and Footwear)");
        assert!(summary.p2_is_definite);
    }

    #[test]
    fn test_status_ranks_by_combined_errors() {
        let config = Pillar3Config::default();
        let warn = vec![p1(Severity::Warning, 25, "w")];
        assert_eq!(
            ClassSummary::build(&entry(25, "Shirts"), &warn, None, &config).status,
            ClassStatus::HasWarnings,
        );

        let two = vec![p1(Severity::Error, 25, "a"), p1(Severity::Error, 0, "b")];
        let summary = ClassSummary::build(&entry(25, "Shirts"), &two, None, &config);
        assert_eq!(summary.status, ClassStatus::HasErrors);
        assert_eq!(summary.p1_error_messages, vec!["a", "b"]);

        let ctx = ClassContext::from_kb(25, FilingBasis::UseInCommerce, "", "");
        let p2 = analyze_identification("Miscellaneous (various) goods", Some(&ctx), &Pillar2Config::default());
        let summary = ClassSummary::build(&entry(25, "Miscellaneous (various) goods"), &two, Some(&p2), &config);
        assert_eq!(summary.status, ClassStatus::RefusalCandidate);
        assert!(!summary.p2_is_definite);
        assert_eq!(summary.p2_error_messages.len(), summary.p2_error_count);
    }

    #[test]
    fn test_other_class_errors_are_ignored() {
        let findings = vec![p1(Severity::Error, 9, "not mine")];
        let summary = ClassSummary::build(&entry(25, "Shirts"), &findings, None, &Pillar3Config::default());
        assert_eq!(summary.p1_error_count, 0);
        assert!(!summary.has_any_error());
    }
}

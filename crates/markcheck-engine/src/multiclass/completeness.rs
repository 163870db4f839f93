//! §1403.01: every class in a multi-class application stands on its own.

use markcheck_common::Severity;

use super::MultiClassAssessor;
use crate::text::head;

/// Pillar 1 error wording that points at a wrong class assignment.
const CLASS_ERROR_MARKERS: [&str; 5] = ["misclassif", "class", "wrong", "incorrect", "reclassif"];

impl MultiClassAssessor<'_> {
    pub(super) fn check_multi_class_requirements(&mut self) {
        const SECTION: &str = "§1403.01";
        let classes = self.classes;
        let fee = self.ctx.fee_per_class();

        for cls in classes {
            let n = cls.class_number;
            let label = cls.label();

            // Separate, definite identification
            if cls.identification.trim().chars().count() < 5 {
                self.push_from(
                    "P1:ClassEntry.identification",
                    SECTION,
                    Severity::Error,
                    n,
                    format!("{label} — Missing identification"),
                    "No identification of goods/services found for this class. Every class in a \
                     multi-class application must have its own separate identification.",
                    "Provide a complete identification of goods/services for this class.",
                );
            } else if !cls.p2_is_definite {
                let issues = if cls.p2_error_messages.is_empty() {
                    "Identification does not meet §1402 specificity standards".to_string()
                } else {
                    cls.p2_error_messages
                        .iter()
                        .take(2)
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join("; ")
                };
                self.push_from(
                    "P2:§1402.03",
                    SECTION,
                    Severity::Error,
                    n,
                    format!("{label} — Identification not definite (Pillar 2)"),
                    format!(
                        "Pillar 2 (§1402) determined the identification for {label} is NOT \
                         sufficiently definite. Issues: {issues}"
                    ),
                    "Amend the identification to meet §1402 specificity requirements before this \
                     class can be accepted in a multi-class application.",
                );
            } else {
                self.push(
                    SECTION,
                    Severity::Ok,
                    n,
                    format!("{label} — Identification"),
                    "Separate, definite identification present for this class.",
                    "No action required.",
                );
            }

            // Per-class fee
            if cls.fee_paid {
                self.push(
                    SECTION,
                    Severity::Ok,
                    n,
                    format!("{label} — Fee"),
                    "Fee paid for this class.",
                    "No action required.",
                );
            } else {
                self.push_from(
                    "P1:§1401.04",
                    SECTION,
                    Severity::Error,
                    n,
                    format!("{label} — Fee not paid"),
                    format!(
                        "No filing fee was paid for {label}. Every class in a multi-class \
                         application requires a separate filing fee."
                    ),
                    format!(
                        "Submit the per-class fee (${fee}) for {label} to avoid deletion of this \
                         class."
                    ),
                );
            }

            // Per-class specimen
            if cls.is_use_based() {
                let specimen_errors: Vec<&str> = cls
                    .p1_error_messages
                    .iter()
                    .map(String::as_str)
                    .filter(|m| m.to_lowercase().contains("specimen"))
                    .collect();

                if cls.specimen_type.is_empty() && cls.specimen_description.is_empty() {
                    self.push_from(
                        "P1:§1401.06",
                        SECTION,
                        Severity::Error,
                        n,
                        format!("{label} — Specimen missing"),
                        format!(
                            "No specimen provided for {label}. Use-based applications (§1(a)) \
                             require a separate specimen for each class showing the mark in \
                             actual use."
                        ),
                        "Submit a specimen showing the mark in actual commercial use in \
                         connection with the goods/services in this class.",
                    );
                } else if !specimen_errors.is_empty() {
                    let joined = specimen_errors.join("; ");
                    self.push_from(
                        "P1:§1401.06",
                        SECTION,
                        Severity::Error,
                        n,
                        format!("{label} — Specimen invalid (Pillar 1)"),
                        format!(
                            "Pillar 1 detected a specimen issue for {label}: {}",
                            head(&joined, 120)
                        ),
                        "Replace the specimen with an acceptable one for this class. Each class \
                         must have its own valid specimen.",
                    );
                } else {
                    self.push(
                        SECTION,
                        Severity::Ok,
                        n,
                        format!("{label} — Specimen"),
                        format!("Specimen present: '{}'.", cls.specimen_type),
                        "No action required.",
                    );
                }
            } else {
                self.push(
                    SECTION,
                    Severity::Info,
                    n,
                    format!("{label} — Specimen (§1(b))"),
                    format!(
                        "Intent-to-use basis ({}). No specimen required at this stage.",
                        cls.filing_basis
                    ),
                    "Specimen must be submitted with Statement of Use.",
                );
            }

            // Correct class assignment
            let class_error = cls.p1_error_messages.iter().find(|m| {
                let lower = m.to_lowercase();
                CLASS_ERROR_MARKERS.iter().any(|kw| lower.contains(kw))
            });
            match class_error {
                Some(message) => {
                    let message = head(message, 120).to_string();
                    self.push_from(
                        "P1:§1401.03",
                        SECTION,
                        Severity::Error,
                        n,
                        format!("{label} — Classification issue (Pillar 1)"),
                        format!(
                            "Pillar 1 (§1401.03) detected incorrect class assignment for \
                             {label}: {message}"
                        ),
                        "Correct the class assignment per Pillar 1 recommendations before \
                         proceeding with multi-class filing requirements.",
                    );
                }
                None if cls.p1_warning_count > 0 => self.push_from(
                    "P1:§1401.03",
                    SECTION,
                    Severity::Warning,
                    n,
                    format!("{label} — Class assignment"),
                    format!(
                        "Pillar 1 raised {} warning(s) about the class assignment — review \
                         recommended.",
                        cls.p1_warning_count
                    ),
                    "Review Pillar 1 warnings for this class.",
                ),
                None => self.push_from(
                    "P1:§1401.03",
                    SECTION,
                    Severity::Ok,
                    n,
                    format!("{label} — Class assignment"),
                    "No class assignment errors detected for this class.",
                    "No action required.",
                ),
            }

            // Dates of use
            if cls.is_use_based() {
                let mut missing = Vec::new();
                if cls.date_of_first_use.as_deref().unwrap_or("").is_empty() {
                    missing.push("date of first use anywhere");
                }
                if cls.date_of_first_use_commerce.as_deref().unwrap_or("").is_empty() {
                    missing.push("date of first use in commerce");
                }

                if missing.is_empty() {
                    self.push(
                        SECTION,
                        Severity::Ok,
                        n,
                        format!("{label} — Dates of use"),
                        format!(
                            "First use: {} | First use in commerce: {}",
                            cls.date_of_first_use.as_deref().unwrap_or(""),
                            cls.date_of_first_use_commerce.as_deref().unwrap_or("")
                        ),
                        "No action required.",
                    );
                } else {
                    self.push_from(
                        "P1:ClassEntry.date_of_first_use",
                        SECTION,
                        Severity::Warning,
                        n,
                        format!("{label} — Missing dates of use"),
                        format!(
                            "Missing for {label}: {}. Per §1403.01, dates of use must be provided \
                             separately for each class in a use-based application.",
                            missing.join(", ")
                        ),
                        "Add separate dates of first use (anywhere) and first use in commerce \
                         for this class.",
                    );
                }
            }
        }

        self.check_application_fee_count(SECTION, fee);
    }

    /// Fee count against distinct classes. Overlaps §1401.04 on purpose; both are reported.
    fn check_application_fee_count(&mut self, section: &str, fee: u32) {
        let distinct = self.distinct_classes().len() as i64;
        let paid = i64::from(self.ctx.fees_paid_count);
        if paid == 0 {
            return;
        }

        if paid == distinct {
            self.push(
                section,
                Severity::Ok,
                0,
                "Application-level fee count",
                format!("Fee count matches class count: {paid} fee(s) for {distinct} class(es)."),
                "No action required.",
            );
            return;
        }

        let shortage = distinct - paid;
        let (severity, kind, tail, recommendation) = if shortage > 0 {
            (
                Severity::Error,
                "UNDERPAYMENT",
                format!("Shortage: {shortage} fee(s)."),
                format!(
                    "Submit {shortage} additional fee(s) at ${fee}/class. Unpaid classes will be \
                     deleted."
                ),
            )
        } else {
            (
                Severity::Warning,
                "OVERPAYMENT",
                format!("Excess: {} fee(s).", -shortage),
                "Request refund for excess fees or add additional classes.".to_string(),
            )
        };
        self.push_from(
            "P1:§1401.04",
            section,
            severity,
            0,
            format!("Application-level fee count: {paid} paid, {distinct} classes"),
            format!("{kind}: {paid} fee(s) submitted but {distinct} class(es) filed. {tail}"),
            recommendation,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{in_section, run, summary};
    use super::super::MultiClassContext;
    use crate::model::FilingBasis;
    use markcheck_common::Severity;

    fn ctx(fees_paid_count: u32) -> MultiClassContext {
        MultiClassContext {
            fees_paid_count,
            ..MultiClassContext::default()
        }
    }

    #[test]
    fn test_unpaid_class_and_missing_dates() {
        let mut unpaid = summary(25, "Shirts; hats");
        unpaid.fee_paid = false;
        unpaid.date_of_first_use_commerce = None;
        let result = run(&[summary(9, "Downloadable software"), unpaid], &ctx(2));
        let findings = in_section(&result, "§1403.01");

        let fee = findings
            .iter()
            .find(|f| f.item.ends_with("— Fee not paid"))
            .unwrap();
        assert_eq!(fee.class_number, 25);
        assert!(fee.recommendation.contains("($250)"));
        assert_eq!(fee.triggered_by.as_deref(), Some("P1:§1401.04"));

        let dates = findings
            .iter()
            .find(|f| f.item.ends_with("— Missing dates of use"))
            .unwrap();
        assert_eq!(dates.severity, Severity::Warning);
        assert!(dates.message.contains("date of first use in commerce"));
    }

    #[test]
    fn test_non_definite_identification_surfaces_pillar_2_errors() {
        let mut vague = summary(25, "Miscellaneous goods");
        vague.p2_is_definite = false;
        vague.p2_error_count = 1;
        vague.p2_error_messages = vec!["Severely indefinite terms found: miscellaneous.".into()];
        let result = run(&[summary(9, "Downloadable software"), vague], &ctx(2));
        let finding = in_section(&result, "§1403.01")
            .into_iter()
            .find(|f| f.item.contains("Identification not definite"))
            .unwrap();
        assert_eq!(finding.severity, Severity::Error);
        assert!(finding.message.ends_with("Issues: Severely indefinite terms found: miscellaneous."));
    }

    #[test]
    fn test_intent_to_use_specimen_is_info_without_dates_check() {
        let mut itu = summary(9, "Downloadable software");
        itu.filing_basis = FilingBasis::IntentToUse;
        itu.date_of_first_use = None;
        let result = run(&[itu, summary(25, "Shirts; hats")], &ctx(2));
        let class9: Vec<_> = in_section(&result, "§1403.01")
            .into_iter()
            .filter(|f| f.class_number == 9)
            .collect();
        assert!(class9.iter().any(|f| f.severity == Severity::Info && f.item.ends_with("Specimen (§1(b))")));
        assert!(!class9.iter().any(|f| f.item.contains("dates of use")));
    }

    #[test]
    fn test_pillar_1_class_error_is_repeated() {
        let mut wrong = summary(25, "Software for inventory management");
        wrong.p1_error_count = 1;
        wrong.p1_error_messages = vec!["MISCLASSIFICATION: 'software' belongs in Class 9".into()];
        let result = run(&[summary(9, "Downloadable software"), wrong], &ctx(2));
        assert!(in_section(&result, "§1403.01")
            .iter()
            .any(|f| f.class_number == 25 && f.item.ends_with("Classification issue (Pillar 1)")));
    }

    #[test]
    fn test_application_fee_count() {
        let classes = [summary(9, "Downloadable software"), summary(25, "Shirts; hats")];

        let short = run(&classes, &ctx(1));
        let finding = in_section(&short, "§1403.01")
            .into_iter()
            .find(|f| f.class_number == 0)
            .unwrap();
        assert_eq!(finding.severity, Severity::Error);
        assert!(finding.message.starts_with("UNDERPAYMENT: 1 fee(s) submitted but 2 class(es) filed."));

        let excess = run(&classes, &ctx(3));
        let finding = in_section(&excess, "§1403.01")
            .into_iter()
            .find(|f| f.class_number == 0)
            .unwrap();
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding.message.ends_with("Excess: 1 fee(s)."));

        let none = run(&classes, &ctx(0));
        assert!(in_section(&none, "§1403.01").iter().all(|f| f.class_number != 0));
    }
}

//! §1403.03 division eligibility and §1403.04 refusals as to less than all classes.

use markcheck_common::Severity;

use super::{class_list, sorted, ClassStatus, MultiClassAssessor};
use crate::text::{head, join_classes};

impl MultiClassAssessor<'_> {
    // -----------------------------------------------------------------------
    // §1403.03 — dividing a multi-class application
    // -----------------------------------------------------------------------

    pub(super) fn check_division_eligibility(&mut self) {
        const SECTION: &str = "§1403.03";
        let (classes, ctx) = (self.classes, self.ctx);

        if ctx.division_requested {
            let to_divide = &ctx.classes_to_divide_out;
            for &n in to_divide {
                let Some(cls) = classes.iter().find(|c| c.class_number == n) else {
                    continue;
                };

                let mut issues = Vec::new();
                if cls.identification.trim().is_empty() {
                    issues.push("missing identification");
                }
                if cls.is_use_based() && cls.specimen_type.is_empty() {
                    issues.push("missing specimen");
                }
                if !cls.fee_paid {
                    issues.push("fee not paid");
                }

                if issues.is_empty() {
                    self.division_eligible.push(n);
                    self.push(
                        SECTION,
                        Severity::Ok,
                        n,
                        format!("Class {n} — Division eligible"),
                        format!(
                            "Class {n} meets all standalone requirements and can be divided into \
                             its own application."
                        ),
                        format!(
                            "Proceed with division request for Class {n}. The child application \
                             will carry forward the original filing date."
                        ),
                    );
                } else {
                    let issues = issues.join(", ");
                    self.push(
                        SECTION,
                        Severity::Error,
                        n,
                        format!("Class {n} — Cannot divide: incomplete requirements"),
                        format!(
                            "Class {n} cannot be divided out because it does not meet standalone \
                             filing requirements: {issues}. A divided application must be \
                             complete in itself."
                        ),
                        format!("Resolve these issues before dividing: {issues}."),
                    );
                }
            }

            let remaining: Vec<i32> = classes
                .iter()
                .map(|c| c.class_number)
                .filter(|n| !to_divide.contains(n))
                .collect();
            if !remaining.is_empty() {
                let remaining = join_classes(&sorted(&remaining));
                self.push(
                    SECTION,
                    Severity::Info,
                    0,
                    format!("Remaining after division: Class(es) {remaining}"),
                    format!(
                        "After dividing out Class(es) {}, the parent application retains \
                         Class(es) {remaining}.",
                        join_classes(&sorted(to_divide))
                    ),
                    "Verify the parent application remains complete and all retained classes are \
                     properly supported.",
                );
            }
            return;
        }

        let (error_classes, clean_classes): (Vec<i32>, Vec<i32>) = {
            let (errors, clean): (Vec<_>, Vec<_>) = classes.iter().partition(|c| c.has_any_error());
            (
                errors.iter().map(|c| c.class_number).collect(),
                clean.iter().map(|c| c.class_number).collect(),
            )
        };
        let use_based: Vec<i32> = classes
            .iter()
            .filter(|c| c.is_use_based())
            .map(|c| c.class_number)
            .collect();
        let intent_to_use: Vec<i32> = classes
            .iter()
            .filter(|c| c.is_intent_to_use())
            .map(|c| c.class_number)
            .collect();

        if !error_classes.is_empty() && !clean_classes.is_empty() {
            let errors = class_list(&sorted(&error_classes));
            self.push(
                SECTION,
                Severity::Warning,
                0,
                "Division RECOMMENDED — Clean vs. problem classes detected",
                format!(
                    "DIVISION ANALYSIS (§1403.03): Class(es) {} are clean, but Class(es) {errors} \
                     have errors. Without division, the errors in {errors} will delay \
                     registration for the clean classes too.",
                    class_list(&sorted(&clean_classes))
                ),
                format!(
                    "Consider dividing Class(es) {} into a separate application so they can \
                     proceed to registration independently. File a Request to Divide (USPTO Form \
                     PTO-2302).",
                    join_classes(&sorted(&clean_classes))
                ),
            );
            self.division_eligible = clean_classes;
        } else if !use_based.is_empty() && !intent_to_use.is_empty() {
            let use_list = join_classes(&sorted(&use_based));
            self.push(
                SECTION,
                Severity::Info,
                0,
                "Mixed filing basis — potential division candidate",
                format!(
                    "Application has mixed filing bases: Class(es) {use_list} are §1(a) \
                     use-based; Class(es) {} are §1(b) intent-to-use. The §1(b) classes cannot \
                     achieve registration until a Statement of Use is filed, which may delay the \
                     §1(a) classes.",
                    join_classes(&sorted(&intent_to_use))
                ),
                format!(
                    "Consider dividing the §1(a) classes ({use_list}) so they can proceed to \
                     registration independently of the §1(b) classes."
                ),
            );
            self.division_eligible = use_based;
        } else {
            self.push(
                SECTION,
                Severity::Info,
                0,
                "Division not currently indicated",
                "All classes appear to be at the same stage with similar issue profiles. Division \
                 is not currently recommended.",
                "Monitor application progress. Division may become appropriate if one class \
                 receives a specific refusal.",
            );
        }
    }

    // -----------------------------------------------------------------------
    // §1403.04 — refusals as to less than all classes
    // -----------------------------------------------------------------------

    pub(super) fn check_partial_refusals(&mut self) {
        const SECTION: &str = "§1403.04";
        let classes = self.classes;

        for cls in classes {
            let n = cls.class_number;
            let mut reasons: Vec<String> = cls
                .p1_error_messages
                .iter()
                .take(2)
                .map(|m| format!("[Pillar 1 — §1401] {}", head(m, 100)))
                .collect();
            if !cls.p2_is_definite || cls.p2_error_count > 0 {
                reasons.extend(
                    cls.p2_error_messages
                        .iter()
                        .take(2)
                        .map(|m| format!("[Pillar 2 — §1402] {}", head(m, 100))),
                );
                if !cls.p2_is_definite && cls.p2_error_messages.is_empty() {
                    reasons.push(
                        "[Pillar 2 — §1402] Identification is not sufficiently definite.".to_string(),
                    );
                }
            }

            if reasons.is_empty() {
                self.push(
                    SECTION,
                    Severity::Ok,
                    n,
                    format!("Class {n} — No refusal grounds"),
                    format!(
                        "Class {n} ({}) has no errors from Pillar 1 or Pillar 2. No refusal is \
                         indicated for this class.",
                        cls.class_title
                    ),
                    "This class may proceed independently. Consider division if other classes \
                     face refusals.",
                );
                continue;
            }

            let severity = if cls.status == ClassStatus::RefusalCandidate {
                Severity::Error
            } else {
                Severity::Warning
            };
            self.refusal_classes.push(n);
            self.refusal_reasons.insert(n, reasons.join("; "));
            self.push_from(
                format!("P1:{}errors + P2:{}errors", cls.p1_error_count, cls.p2_error_count),
                SECTION,
                severity,
                n,
                format!("Class {n} — PARTIAL REFUSAL CANDIDATE"),
                format!(
                    "Class {n} ({}) has {} Pillar 1 error(s) and {} Pillar 2 error(s) that \
                     constitute grounds for a PARTIAL REFUSAL under §1403.04. Reasons: {}",
                    cls.class_title,
                    cls.p1_error_count,
                    cls.p2_error_count,
                    reasons.iter().take(2).map(String::as_str).collect::<Vec<_>>().join("; ")
                ),
                format!(
                    "Issue a partial refusal limited to Class {n}. Do NOT refuse the entire \
                     application — other classes should continue to be processed. State each \
                     ground of refusal clearly in the Office Action."
                ),
            );
        }

        if self.refusal_classes.is_empty() {
            return;
        }
        let refused = sorted(&self.refusal_classes);
        let proceeding: Vec<i32> = classes
            .iter()
            .map(|c| c.class_number)
            .filter(|n| !refused.contains(n))
            .collect();
        let proceeding = if proceeding.is_empty() {
            "None".to_string()
        } else {
            join_classes(&sorted(&proceeding))
        };
        self.push(
            SECTION,
            Severity::Info,
            0,
            "Partial refusal summary",
            format!(
                "PARTIAL REFUSAL applies to: Class(es) {}. Classes NOT subject to refusal: \
                 {proceeding}.",
                join_classes(&refused)
            ),
            "Issue Office Action with partial refusal. For each refused class, cite the specific \
             legal ground. For clean classes, note they are approved or being processed.",
        );
    }
}

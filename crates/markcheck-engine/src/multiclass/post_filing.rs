//! §1403.05 post-filing fees and §1403.06 surrender in multi-class registrations.

use std::collections::BTreeSet;

use markcheck_common::Severity;
use markcheck_nice::tables::SOU_FEE_PER_CLASS;

use super::{class_list, identification_words, sorted, MultiClassAssessor};
use crate::text::join_classes;

const SURRENDER_STOPWORDS: [&str; 16] = [
    "and", "or", "for", "the", "of", "in", "a", "an", "to", "with", "by", "from", "on", "at",
    "namely", "including",
];

impl MultiClassAssessor<'_> {
    // -----------------------------------------------------------------------
    // §1403.05 — fees for post-filing actions
    // -----------------------------------------------------------------------

    pub(super) fn check_post_filing_fees(&mut self) {
        const SECTION: &str = "§1403.05";
        let (classes, ctx) = (self.classes, self.ctx);
        let action = ctx.post_filing_action_type.as_str();
        let stage = ctx.application_stage;

        if action.is_empty() && stage.is_pre_examination() {
            self.push(
                SECTION,
                Severity::Info,
                0,
                "No post-filing action in this assessment",
                "Application is at filing/pending stage. §1403.05 post-filing fee requirements \
                 will apply if/when responses, amendments, or Statements of Use are filed.",
                "When filing any post-filing action, ensure the correct per-class fee is included \
                 for each affected class.",
            );
            return;
        }

        let intent_to_use: Vec<i32> = classes
            .iter()
            .filter(|c| c.is_intent_to_use())
            .map(|c| c.class_number)
            .collect();
        let sou_stage =
            stage == markcheck_common::ApplicationStage::StatementOfUse || action == "sou";
        if sou_stage && !intent_to_use.is_empty() {
            let count = intent_to_use.len();
            let total = SOU_FEE_PER_CLASS * count as u32;
            self.push(
                SECTION,
                Severity::Info,
                0,
                format!("Statement of Use — {count} class(es)"),
                format!(
                    "Statement of Use being filed for {count} §1(b) class(es): {}. SOU fee: \
                     ${SOU_FEE_PER_CLASS}/class × {count} = ${total}.",
                    class_list(&intent_to_use)
                ),
                format!(
                    "Submit SOU with ${total} total (${SOU_FEE_PER_CLASS}/class for each of the \
                     {count} §1(b) class(es)). Each class needs its own specimen with the SOU."
                ),
            );
        }

        let affected = &ctx.amendment_affects_classes;
        if matches!(action, "amendment" | "response") && !affected.is_empty() {
            let count = affected.len();
            self.push(
                SECTION,
                Severity::Info,
                0,
                format!("Post-filing {action} fee — {count} class(es) affected"),
                format!(
                    "Post-filing {action} affects {count} class(es): {}. Verify whether \
                     additional per-class fees are required for this type of action.",
                    class_list(&sorted(affected))
                ),
                format!(
                    "Check USPTO fee schedule for post-filing {action} fees. Ensure fee is \
                     submitted for each of the {count} affected class(es)."
                ),
            );
        }

        if ctx.surrender_requested && !ctx.classes_to_surrender.is_empty() {
            self.push(
                SECTION,
                Severity::Info,
                0,
                format!(
                    "Surrender fee check — Class(es) {}",
                    join_classes(&ctx.classes_to_surrender)
                ),
                "Partial surrender of classes in a multi-class registration. Verify whether any \
                 petition or maintenance fees apply to the surrender action.",
                "File a Section 7 Request for Amendment/Surrender (USPTO Form) with required fees \
                 for each surrendered class.",
            );
        }

        self.push(
            SECTION,
            Severity::Info,
            0,
            "Multi-class post-filing fee rule",
            "Per §1403.05: in multi-class applications, post-filing actions require separate fees \
             for each class to which the action applies. A single fee does not cover all classes \
             automatically.",
            "Always verify the number of classes affected by any post-filing action and submit \
             the correct per-class fee amount.",
        );
    }

    // -----------------------------------------------------------------------
    // §1403.06 — surrender or amendment after registration
    // -----------------------------------------------------------------------

    pub(super) fn check_surrender(&mut self) {
        const SECTION: &str = "§1403.06";
        let (classes, ctx) = (self.classes, self.ctx);
        let stage = ctx.application_stage;

        if !stage.is_registered() {
            self.push(
                SECTION,
                Severity::Info,
                0,
                format!("§1403.06 — Not yet registered (stage: {})", stage.as_str()),
                "Application has not yet reached registration. §1403.06 surrender and \
                 post-registration amendment rules will apply after registration is granted.",
                "Note for post-registration: partial surrender is possible via Section 7 \
                 amendment. Surrendering a class is irrevocable.",
            );
            return;
        }

        if !ctx.surrender_requested {
            self.push(
                SECTION,
                Severity::Info,
                0,
                "No surrender requested",
                "No surrender of classes has been requested in this assessment.",
                "If a partial surrender is needed post-registration, file a Section 7 Request \
                 (USPTO Form SB/08). Surrender is irrevocable — once a class is surrendered, it \
                 cannot be reinstated.",
            );
            return;
        }

        let present: BTreeSet<i32> = classes.iter().map(|c| c.class_number).collect();
        let surrendering: BTreeSet<i32> = ctx
            .classes_to_surrender
            .iter()
            .copied()
            .filter(|n| present.contains(n))
            .collect();
        if surrendering == present {
            self.push(
                SECTION,
                Severity::Error,
                0,
                "Full surrender — entire registration would be abandoned",
                "Surrendering all classes would result in complete abandonment of the \
                 registration. If that is the intent, a full cancellation should be filed \
                 instead.",
                "File a Request for Cancellation (USPTO Form) if the intent is to abandon the \
                 entire registration. For partial surrender, retain at least one class.",
            );
            return;
        }

        let (surrendered, retained): (Vec<_>, Vec<_>) = classes
            .iter()
            .partition(|c| surrendering.contains(&c.class_number));
        let retained_words: BTreeSet<String> = retained
            .iter()
            .flat_map(|c| identification_words(&c.identification, &[]))
            .collect();
        let min_len = self.config.surrender_min_word_len;

        for sc in &surrendered {
            let n = sc.class_number;
            let overlap: Vec<String> = identification_words(&sc.identification, &SURRENDER_STOPWORDS)
                .intersection(&retained_words)
                .filter(|w| w.chars().count() >= min_len)
                .cloned()
                .collect();

            if overlap.is_empty() {
                self.push(
                    SECTION,
                    Severity::Ok,
                    n,
                    format!("Class {n} — Surrender scope check"),
                    format!(
                        "Surrendering Class {n} ({}) does not appear to create scope \
                         inconsistency with retained classes.",
                        sc.class_title
                    ),
                    format!("Proceed with surrender of Class {n}. Remember: surrender is irrevocable."),
                );
            } else {
                let shared = overlap.iter().take(5).cloned().collect::<Vec<_>>().join(", ");
                self.push(
                    SECTION,
                    Severity::Warning,
                    n,
                    format!("Scope overlap: surrendering Class {n} while retaining other classes"),
                    format!(
                        "Surrendering Class {n} ({}) may create inconsistency with retained \
                         classes. Shared terminology between surrendered and retained \
                         identifications: {shared}. After surrender, consumers may be confused \
                         about the scope of the remaining registration.",
                        sc.class_title
                    ),
                    format!(
                        "Review whether surrendering Class {n} creates gaps or ambiguity in the \
                         overall trademark scope. Consider whether amendments to retained class \
                         identifications are needed for clarity post-surrender."
                    ),
                );
            }
        }

        if !retained.is_empty() {
            let kept: BTreeSet<i32> = retained.iter().map(|c| c.class_number).collect();
            let kept = join_classes(&kept);
            self.push(
                SECTION,
                Severity::Info,
                0,
                format!("Post-surrender retained: Class(es) {kept}"),
                format!(
                    "After surrendering Class(es) {}, the registration will retain Class(es) \
                     {kept}.",
                    join_classes(&surrendering)
                ),
                "Ensure maintenance fees (Section 8/71 Declarations) are paid for all RETAINED \
                 classes going forward. Surrendered classes are excluded from future maintenance.",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{in_section, run, summary};
    use super::super::MultiClassContext;
    use crate::model::FilingBasis;
    use markcheck_common::{ApplicationStage, Severity};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pending_application_gets_single_fee_note() {
        let result = run(
            &[summary(9, "Downloadable software"), summary(25, "Shirts")],
            &MultiClassContext::default(),
        );
        let findings = in_section(&result, "§1403.05");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].item, "No post-filing action in this assessment");
    }

    #[test]
    fn test_statement_of_use_fee_counts_intent_to_use_classes() {
        let mut itu_a = summary(9, "Downloadable software");
        itu_a.filing_basis = FilingBasis::IntentToUse;
        let mut itu_b = summary(42, "Software as a service");
        itu_b.filing_basis = FilingBasis::IntentToUse;
        let ctx = MultiClassContext {
            application_stage: ApplicationStage::StatementOfUse,
            ..MultiClassContext::default()
        };
        let result = run(&[itu_a, itu_b, summary(25, "Shirts")], &ctx);
        let findings = in_section(&result, "§1403.05");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].item, "Statement of Use — 2 class(es)");
        assert!(findings[0].message.ends_with("SOU fee: $100/class × 2 = $200."));
        assert_eq!(findings[1].item, "Multi-class post-filing fee rule");
    }

    #[test]
    fn test_amendment_response_fee_note() {
        let ctx = MultiClassContext {
            application_stage: ApplicationStage::OfficeAction,
            post_filing_action_type: "response".into(),
            amendment_affects_classes: vec![25],
            ..MultiClassContext::default()
        };
        let result = run(&[summary(9, "Downloadable software"), summary(25, "Shirts")], &ctx);
        assert!(in_section(&result, "§1403.05")
            .iter()
            .any(|f| f.item == "Post-filing response fee — 1 class(es) affected"));
    }

    #[test]
    fn test_surrender_only_applies_after_registration() {
        let ctx = MultiClassContext {
            surrender_requested: true,
            classes_to_surrender: vec![25],
            ..MultiClassContext::default()
        };
        let result = run(&[summary(9, "Downloadable software"), summary(25, "Shirts")], &ctx);
        let findings = in_section(&result, "§1403.06");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].item, "§1403.06 — Not yet registered (stage: FILED_PENDING)");
    }

    #[test]
    fn test_full_surrender_is_error() {
        let ctx = MultiClassContext {
            application_stage: ApplicationStage::Registered,
            surrender_requested: true,
            classes_to_surrender: vec![9, 25],
            ..MultiClassContext::default()
        };
        let result = run(&[summary(9, "Downloadable software"), summary(25, "Shirts")], &ctx);
        let findings = in_section(&result, "§1403.06");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    fn registered_surrender(classes_to_surrender: Vec<i32>) -> MultiClassContext {
        MultiClassContext {
            application_stage: ApplicationStage::Registered,
            surrender_requested: true,
            classes_to_surrender,
            ..MultiClassContext::default()
        }
    }

    #[test]
    fn test_unknown_surrender_class_is_not_full_surrender() {
        let ctx = registered_surrender(vec![9, 99]);
        let result = run(&[summary(9, "Downloadable software"), summary(25, "Shirts")], &ctx);
        let findings = in_section(&result, "§1403.06");
        assert!(findings.iter().all(|f| f.severity != Severity::Error));
        let retained = findings.last().unwrap();
        assert_eq!(retained.item, "Post-surrender retained: Class(es) 25");
        assert!(retained.message.starts_with("After surrendering Class(es) 9, "));
    }

    #[test]
    fn test_repeated_surrender_class_is_not_full_surrender() {
        let ctx = registered_surrender(vec![9, 9]);
        let result = run(&[summary(9, "Downloadable software"), summary(25, "Shirts")], &ctx);
        let findings = in_section(&result, "§1403.06");
        assert!(findings.iter().all(|f| f.severity != Severity::Error));
        assert_eq!(findings.last().unwrap().item, "Post-surrender retained: Class(es) 25");
    }

    #[test]
    fn test_surrendering_every_distinct_class_is_error() {
        let ctx = registered_surrender(vec![9, 25]);
        let classes = [
            summary(9, "Downloadable software"),
            summary(9, "Downloadable games"),
            summary(25, "Shirts"),
        ];
        let result = run(&classes, &ctx);
        let findings = in_section(&result, "§1403.06");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].item, "Full surrender — entire registration would be abandoned");
    }

    #[test]
    fn test_partial_surrender_checks_shared_vocabulary() {
        let ctx = MultiClassContext {
            application_stage: ApplicationStage::PostRegistration,
            surrender_requested: true,
            classes_to_surrender: vec![42],
            ..MultiClassContext::default()
        };
        let classes = [
            summary(9, "Downloadable accounting software"),
            summary(42, "Hosting accounting software for others"),
            summary(25, "Shirts"),
        ];
        let result = run(&classes, &ctx);
        let findings = in_section(&result, "§1403.06");
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("identifications: accounting, software."));
        assert_eq!(findings[1].item, "Post-surrender retained: Class(es) 9, 25");
    }
}

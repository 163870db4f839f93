//! §1403.02: amendments must stay inside the classes they name and may not broaden scope.

use markcheck_common::Severity;

use super::{class_list, identification_words, sorted, MultiClassAssessor};
use crate::text::{head, join_classes};

pub(super) const AMENDMENT_STOPWORDS: [&str; 14] = [
    "and", "or", "for", "the", "of", "in", "a", "an", "to", "with", "by", "from", "on", "at",
];

const BROADENING_TERMS: [&str; 9] = [
    "add", "adding", "expand", "include", "broader", "additional", "new goods", "new services",
    "new class",
];

impl MultiClassAssessor<'_> {
    pub(super) fn check_amendment_scope(&mut self) {
        const SECTION: &str = "§1403.02";

        if !self.ctx.amendment_requested {
            self.push(
                SECTION,
                Severity::Info,
                0,
                "No amendment in this assessment",
                "No amendment has been requested. §1403.02 amendment rules are noted for \
                 reference.",
                "When filing any amendment, ensure changes are class-specific and do not affect \
                 other classes.",
            );
            return;
        }

        let ctx = self.ctx;
        let affected = &ctx.amendment_affects_classes;
        let all = self.all_class_numbers();
        let covers_all = affected.is_empty() || {
            let a: std::collections::BTreeSet<i32> = affected.iter().copied().collect();
            let b: std::collections::BTreeSet<i32> = all.iter().copied().collect();
            a == b
        };

        if covers_all {
            self.push(
                SECTION,
                Severity::Warning,
                0,
                "Amendment scope: ALL classes",
                format!(
                    "The requested amendment appears to affect all classes ({}). An \
                     application-wide amendment must be reviewed carefully to ensure it does not \
                     inadvertently narrow or alter classes that don't need changing.",
                    class_list(&sorted(&all))
                ),
                "Confirm which classes actually need amendment. File class-specific amendments \
                 where possible to avoid unintended scope changes across classes.",
            );
        } else {
            self.check_cross_class_conflicts(SECTION);
        }

        let description = ctx.amendment_description.as_str();
        if !description.is_empty() {
            let lower = description.to_lowercase();
            if BROADENING_TERMS.iter().any(|t| lower.contains(t)) {
                self.push(
                    SECTION,
                    Severity::Error,
                    0,
                    "Amendment may attempt to broaden scope",
                    format!(
                        "Amendment description '{}' contains language suggesting scope \
                         broadening. Per §1402.07 (applied through §1403.02), amendments cannot \
                         expand the identification beyond the original filing scope.",
                        head(description, 80)
                    ),
                    "Amendments may only CLARIFY or LIMIT the identification. Remove any language \
                     that adds new goods/services not encompassed by the original filing.",
                );
            }
        }
    }

    /// Amended classes sharing enough vocabulary with an unamended class.
    fn check_cross_class_conflicts(&mut self, section: &str) {
        let (classes, ctx) = (self.classes, self.ctx);
        let affected = &ctx.amendment_affects_classes;
        let threshold = self.config.amendment_shared_words;
        let mut conflicts = 0usize;

        for amended in classes.iter().filter(|c| affected.contains(&c.class_number)) {
            let amended_words = identification_words(&amended.identification, &[]);
            for other in classes.iter().filter(|c| !affected.contains(&c.class_number)) {
                let other_words = identification_words(&other.identification, &AMENDMENT_STOPWORDS);
                let shared: Vec<&str> = amended_words
                    .intersection(&other_words)
                    .map(String::as_str)
                    .collect();
                if shared.len() < threshold {
                    continue;
                }

                conflicts += 1;
                let (a, o) = (amended.class_number, other.class_number);
                let preview = shared.iter().take(5).copied().collect::<Vec<_>>().join(", ");
                self.push_from(
                    format!("P1+P2:Class{a}↔Class{o}"),
                    section,
                    Severity::Warning,
                    a,
                    format!("Cross-class amendment conflict: Class {a} ↔ Class {o}"),
                    format!(
                        "Amending Class {a} may affect Class {o} — they share terminology: \
                         {preview}. Per §1403.02, amendments to one class must not inadvertently \
                         alter the scope of another."
                    ),
                    format!(
                        "Review whether the amendment to Class {a} creates any scope overlap with \
                         Class {o}. Amend each class separately with distinct language."
                    ),
                );
            }
        }

        if conflicts == 0 {
            let scope = join_classes(&sorted(affected));
            self.push(
                section,
                Severity::Ok,
                0,
                format!("Amendment scope: Class(es) {scope} only"),
                format!(
                    "Amendment is limited to Class(es) {scope}. No obvious cross-class \
                     terminology conflicts detected."
                ),
                "Ensure the amendment is filed with correct class-specific language and any \
                 required additional fees.",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{in_section, run, summary};
    use super::super::MultiClassContext;
    use markcheck_common::Severity;
    use pretty_assertions::assert_eq;

    fn amendment(classes: Vec<i32>, description: &str) -> MultiClassContext {
        MultiClassContext {
            amendment_requested: true,
            amendment_affects_classes: classes,
            amendment_description: description.into(),
            ..MultiClassContext::default()
        }
    }

    #[test]
    fn test_no_amendment_is_info() {
        let result = run(
            &[summary(9, "Downloadable software"), summary(25, "Shirts")],
            &MultiClassContext::default(),
        );
        let findings = in_section(&result, "§1403.02");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
    }

    #[test]
    fn test_amendment_covering_every_class_warns() {
        let classes = [summary(9, "Downloadable software"), summary(25, "Shirts")];
        for scope in [vec![], vec![25, 9]] {
            let result = run(&classes, &amendment(scope, "clarify wording"));
            let findings = in_section(&result, "§1403.02");
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0].item, "Amendment scope: ALL classes");
            assert!(findings[0].message.contains("(Class 9, Class 25)"));
        }
    }

    #[test]
    fn test_shared_vocabulary_flags_conflict() {
        let classes = [
            summary(9, "Downloadable software for project management and team collaboration"),
            summary(42, "Software as a service for project management and team scheduling"),
            summary(25, "Shirts"),
        ];
        let result = run(&classes, &amendment(vec![9], "clarify software identification"));
        let findings = in_section(&result, "§1403.02");
        assert_eq!(findings.len(), 1);
        let conflict = findings[0];
        assert_eq!(conflict.severity, Severity::Warning);
        assert_eq!(conflict.item, "Cross-class amendment conflict: Class 9 ↔ Class 42");
        assert_eq!(conflict.triggered_by.as_deref(), Some("P1+P2:Class9↔Class42"));
    }

    #[test]
    fn test_limited_amendment_without_conflict_is_ok() {
        let classes = [summary(9, "Downloadable software"), summary(25, "Shirts; hats")];
        let result = run(&classes, &amendment(vec![9], "limit to games"));
        let findings = in_section(&result, "§1403.02");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].item, "Amendment scope: Class(es) 9 only");
    }

    #[test]
    fn test_broadening_description_is_error() {
        let classes = [summary(9, "Downloadable software"), summary(25, "Shirts; hats")];
        let result = run(&classes, &amendment(vec![9], "Add new goods to the list"));
        assert!(in_section(&result, "§1403.02")
            .iter()
            .any(|f| f.severity == Severity::Error && f.item == "Amendment may attempt to broaden scope"));
        assert!(!result.is_multi_class_compliant);
    }
}

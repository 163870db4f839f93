//! The eight §1402 subsection checks. Each returns exactly one finding.

use markcheck_common::{Finding, Pillar, Pillar2Config, Severity};

use super::context::ClassContext;
use super::detectors;
use crate::text::head;

/// Inputs shared by every check for one identification.
pub(super) struct Lens<'a> {
    pub text: &'a str,
    pub context: Option<&'a ClassContext>,
    pub config: &'a Pillar2Config,
}

impl Lens<'_> {
    fn class_number(&self) -> i32 {
        self.context.map(|c| c.class_number).unwrap_or(0)
    }

    fn finding(
        &self,
        section: &str,
        severity: Severity,
        item: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Finding {
        Finding::new(
            Pillar::Identification,
            section,
            severity,
            self.class_number(),
            item,
            message,
            recommendation,
        )
    }

    // -----------------------------------------------------------------------
    // §1402.01 — particular goods/services listed
    // -----------------------------------------------------------------------

    pub fn check_items_listed(&self, segments: &[String]) -> Finding {
        const SECTION: &str = "§1402.01";
        if segments.is_empty() {
            return self.finding(
                SECTION,
                Severity::Error,
                "Identification text",
                "Identification is empty or cannot be parsed into distinct goods/services.",
                "Provide a clear, itemized list of goods/services separated by semicolons.",
            );
        }
        let preview = segments
            .iter()
            .take(3)
            .map(|s| head(s, 40))
            .collect::<Vec<_>>()
            .join("; ");
        let more = if segments.len() > 3 { "..." } else { "" };
        self.finding(
            SECTION,
            Severity::Ok,
            format!("{} item(s) identified", segments.len()),
            format!("Identification contains {} item(s): {preview}{more}", segments.len()),
            "No action required.",
        )
    }

    // -----------------------------------------------------------------------
    // §1402.02 — filing date entitlement
    // -----------------------------------------------------------------------

    pub fn check_filing_date_entitlement(&self) -> Finding {
        const SECTION: &str = "§1402.02";
        let text_lower = self.text.trim().to_lowercase();

        if detectors::placeholder_in(&text_lower) {
            return self.finding(
                SECTION,
                Severity::Error,
                "Placeholder text detected",
                "Identification contains placeholder or incomplete text. Application will not be \
                 entitled to its filing date.",
                "Replace placeholder text with a complete, definite identification of actual \
                 goods/services.",
            );
        }
        if text_lower.chars().count() < self.config.min_identification_chars {
            return self.finding(
                SECTION,
                Severity::Error,
                "Identification too short",
                "Identification is too brief to secure a filing date.",
                "Provide a complete identification of goods/services.",
            );
        }
        self.finding(
            SECTION,
            Severity::Ok,
            "Filing date entitlement",
            "Identification appears complete enough to support filing date entitlement.",
            "No action required.",
        )
    }

    // -----------------------------------------------------------------------
    // §1402.03 — specificity of terms
    // -----------------------------------------------------------------------

    pub fn check_specificity(&self, vague_found: &[&str]) -> Finding {
        const SECTION: &str = "§1402.03";
        let (severe, mild): (Vec<&str>, Vec<&str>) =
            vague_found.iter().partition(|t| detectors::is_severe(t));

        if !severe.is_empty() {
            let list = severe.join(", ");
            return self.finding(
                SECTION,
                Severity::Error,
                format!("Indefinite terms: {list}"),
                format!(
                    "Severely indefinite terms found: {list}. These are categorically unacceptable \
                     under USPTO practice."
                ),
                "Remove all indefinite terms. Replace with specific, enumerated goods/services.",
            );
        }
        if !mild.is_empty() {
            let list = mild.join(", ");
            return self.finding(
                SECTION,
                Severity::Warning,
                format!("Potentially vague terms: {list}"),
                format!(
                    "Possibly indefinite terms found: {list}. These may be acceptable with \
                     additional specificity."
                ),
                format!("Review terms: {list}. Add 'namely' clauses to specify exact goods/services."),
            );
        }
        self.finding(
            SECTION,
            Severity::Ok,
            "Specificity check",
            "No indefinite terms detected. Identification appears sufficiently specific.",
            "No action required.",
        )
    }

    // -----------------------------------------------------------------------
    // §1402.05 — accuracy against the specimen
    // -----------------------------------------------------------------------

    pub fn check_accuracy(&self) -> Finding {
        const SECTION: &str = "§1402.05";
        let Some(ctx) = self.context else {
            return self.finding(
                SECTION,
                Severity::Info,
                "Accuracy check (no Pillar 1 context)",
                "No Pillar 1 context provided. Cannot cross-check identification accuracy against \
                 specimen.",
                "Run with Pillar 1 context for full §1402.05 accuracy check.",
            );
        };

        if ctx.has_class_error {
            return self.finding(
                SECTION,
                Severity::Warning,
                format!("Class {} — Accuracy deferred", ctx.class_number),
                format!(
                    "Pillar 1 detected a classification ERROR for this class. Accuracy of \
                     identification cannot be confirmed until the class is corrected. Pillar 1 \
                     issue: {}",
                    head(&ctx.error_summary, 100)
                ),
                "Resolve Pillar 1 classification errors first, then re-assess identification \
                 accuracy in the correct class.",
            );
        }

        if ctx.filing_basis.is_intent_to_use() {
            return self.finding(
                SECTION,
                Severity::Info,
                format!("Class {} — §1(b) accuracy standard", ctx.class_number),
                "Intent-to-use application (§1(b)). Identification must accurately reflect \
                 goods/services applicant has a bona fide intention to use. Specimen not yet \
                 required — accuracy will be verified at SOU stage.",
                "Ensure identification reflects actual intended use. Overly broad identifications \
                 may cause problems at SOU stage.",
            );
        }

        if ctx.specimen_description.is_empty() {
            return self.finding(
                SECTION,
                Severity::Info,
                "No specimen description from Pillar 1",
                "Specimen description not available for accuracy cross-check.",
                "Provide specimen description in Pillar 1 class entry for full check.",
            );
        }

        let min_len = self.config.accuracy_min_word_len;
        let id_words = detectors::word_set(self.text, min_len);
        let spec_words = detectors::word_set(&ctx.specimen_description, min_len);
        let overlap = id_words.intersection(&spec_words).count();
        let ratio = overlap as f64 / spec_words.len().max(1) as f64;
        let percent = (ratio * 100.0) as u32;

        if ratio < self.config.accuracy_min_overlap
            && spec_words.len() > self.config.accuracy_min_specimen_words
        {
            return self.finding(
                SECTION,
                Severity::Warning,
                "Low overlap between identification and specimen",
                format!(
                    "Low conceptual overlap between identification and specimen description \
                     (~{percent}% word overlap). Identification may not accurately reflect the \
                     actual goods/services shown in the specimen."
                ),
                "Review whether identification accurately describes what the specimen actually \
                 shows. Amend if over-broad or misaligned.",
            );
        }

        self.finding(
            SECTION,
            Severity::Ok,
            "Accuracy vs. specimen",
            format!(
                "Identification appears consistent with the specimen provided (~{percent}% \
                 conceptual overlap)."
            ),
            "No action required.",
        )
    }

    // -----------------------------------------------------------------------
    // §1402.09 — "applicant" / "registrant"
    // -----------------------------------------------------------------------

    pub fn check_banned_terms(&self) -> Finding {
        const SECTION: &str = "§1402.09";
        let banned = detectors::banned_terms(self.text);
        if banned.is_empty() {
            return self.finding(
                SECTION,
                Severity::Ok,
                "Banned terms check",
                "No prohibited terms ('applicant', 'registrant') found.",
                "No action required.",
            );
        }
        let list = banned.join(", ");
        self.finding(
            SECTION,
            Severity::Error,
            format!("Banned terms found: {list}"),
            format!(
                "The term(s) '{list}' appear in the identification. Per §1402.09, 'applicant' and \
                 'registrant' are inappropriate in identifications of goods and services."
            ),
            format!(
                "Remove '{list}' from the identification. Rewrite the relevant clause without \
                 reference to the applicant/registrant."
            ),
        )
    }

    // -----------------------------------------------------------------------
    // §1402.10 — intent-to-use wording
    // -----------------------------------------------------------------------

    pub fn check_intent_to_use(&self) -> Finding {
        const SECTION: &str = "§1402.10";
        let basis = self
            .context
            .map(|c| c.filing_basis.as_str())
            .unwrap_or("1(a)");

        if basis != "1(b)" {
            return self.finding(
                SECTION,
                Severity::Info,
                format!("Filing basis: {basis}"),
                format!(
                    "Application is filed under {basis}, not §1(b). §1402.10 intent-to-use \
                     requirements do not apply."
                ),
                "No action required.",
            );
        }

        let future = detectors::future_tense_terms(self.text);
        if !future.is_empty() {
            return self.finding(
                SECTION,
                Severity::Warning,
                "Future-tense language in §1(b) identification",
                format!(
                    "Identification contains future-tense or speculative language ({}). Even for \
                     §1(b) applications, the identification must describe goods/services \
                     definitively, not contingently.",
                    future.join(", ")
                ),
                "Remove future-tense wording. State goods/services definitively as if already in \
                 use (the filing basis covers the intent — the identification does not need to \
                 reflect it).",
            );
        }

        self.finding(
            SECTION,
            Severity::Ok,
            "§1(b) identification format",
            "§1(b) identification is stated definitively without future-tense language.",
            "No action required. Remember: specimen must be filed with SOU.",
        )
    }

    // -----------------------------------------------------------------------
    // §1402.11 — services rendered for others
    // -----------------------------------------------------------------------

    pub fn check_services_for_others(&self) -> Finding {
        const SECTION: &str = "§1402.11";
        let is_services = match self.context {
            Some(ctx) => ctx.is_services(),
            None => detectors::mentions_services(self.text),
        };

        if !is_services {
            return self.finding(
                SECTION,
                Severity::Info,
                "§1402.11 services check",
                "This appears to be a goods class. §1402.11 services format requirement does not \
                 apply.",
                "No action required.",
            );
        }

        if detectors::has_internal_activity(self.text) {
            return self.finding(
                SECTION,
                Severity::Error,
                "Internal-activity language in service identification",
                "Identification appears to describe the applicant's own internal activities rather \
                 than services rendered FOR OTHERS. Services must be described as activities \
                 performed for the benefit of third parties.",
                "Rewrite as: 'providing X services for others in the field of Y' or 'X services \
                 rendered to others, namely...'",
            );
        }

        if !detectors::has_service_activity(self.text) {
            return self.finding(
                SECTION,
                Severity::Warning,
                "Service identification format",
                "Service identification does not explicitly state the activity is rendered for \
                 others. Per §1402.11, services must be described as activities performed for \
                 third parties.",
                "Add language such as 'providing', 'rendering', or 'offering...for others' to \
                 clarify the commercial nature.",
            );
        }

        self.finding(
            SECTION,
            Severity::Ok,
            "Service activity format",
            "Identification correctly describes a service activity rendered for others.",
            "No action required.",
        )
    }

    // -----------------------------------------------------------------------
    // §1402.12 — parentheses and brackets
    // -----------------------------------------------------------------------

    pub fn check_brackets(&self, structural_issues: &[&str]) -> Finding {
        const SECTION: &str = "§1402.12";
        if structural_issues.contains(&detectors::BRACKET_ISSUE) {
            return self.finding(
                SECTION,
                Severity::Error,
                "Parentheses/brackets in identification",
                detectors::BRACKET_ISSUE,
                "Remove all parentheses ( ), brackets [ ], and braces { } from the identification. \
                 Rewrite any parenthetical clarifications as direct language.",
            );
        }
        self.finding(
            SECTION,
            Severity::Ok,
            "Parentheses/brackets check",
            "No parentheses or brackets found.",
            "No action required.",
        )
    }
}

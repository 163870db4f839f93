//! §1401.01–.03, §1401.05 and §1401.08: basis, class validity, designation and alignment.

use std::collections::BTreeSet;

use markcheck_common::{Category, Severity};
use markcheck_nice::matcher::top_suggestion;
use markcheck_nice::tables::COMMON_MISCLASSIFICATIONS;
use markcheck_nice::{class_title, get_class_info, MAX_CLASS, MIN_CLASS};

use super::ClassificationAssessor;
use crate::model::FilingBasis;
use crate::text::{contains_any, head_with_ellipsis, join_classes, matches_of, split_terms};

const SERVICE_INDICATORS: &[&str] = &[
    "service", "services", "providing", "rendering", "consulting",
    "management of", "repair of", "installation of", "development of",
];

const GOODS_INDICATORS: &[&str] = &[
    "downloadable", "printed", "physical", "apparatus", "device", "equipment",
    "machine", "clothing", "food", "beverage", "chemical",
];

/// A term that reads as either a product or a service depending on form.
struct AmbiguousTerm {
    term: &'static str,
    goods_class: i32,
    goods_reason: &'static str,
    service_class: i32,
    service_reason: &'static str,
}

const AMBIGUOUS_TERMS: [AmbiguousTerm; 6] = [
    AmbiguousTerm {
        term: "music",
        goods_class: 9,
        goods_reason: "Downloadable music is a DIGITAL PRODUCT (what it is = a file) → Class 9",
        service_class: 41,
        service_reason: "Music streaming is an ENTERTAINMENT SERVICE (what it does = entertains) → Class 41",
    },
    AmbiguousTerm {
        term: "video",
        goods_class: 9,
        goods_reason: "Downloadable video is a DIGITAL PRODUCT → Class 9",
        service_class: 41,
        service_reason: "Video streaming is an ENTERTAINMENT SERVICE → Class 41",
    },
    AmbiguousTerm {
        term: "software",
        goods_class: 9,
        goods_reason: "Downloadable software is a DIGITAL PRODUCT → Class 9",
        service_class: 42,
        service_reason: "SaaS is a TECHNOLOGY SERVICE (what it does = provides tech access) → Class 42",
    },
    AmbiguousTerm {
        term: "book",
        goods_class: 9,
        goods_reason: "Downloadable ebooks are DIGITAL PRODUCTS → Class 9",
        service_class: 16,
        service_reason: "Printed books are PHYSICAL GOODS (paper products) → Class 16",
    },
    AmbiguousTerm {
        term: "food",
        goods_class: 30,
        goods_reason: "Packaged food is a PHYSICAL PRODUCT (what it is = food) → Class 29/30",
        service_class: 43,
        service_reason: "Restaurant is a FOOD SERVICE (what it does = serves meals) → Class 43",
    },
    AmbiguousTerm {
        term: "education",
        goods_class: 16,
        goods_reason: "Printed educational materials are GOODS → Class 16",
        service_class: 41,
        service_reason: "Educational services are SERVICES (what they do = educate) → Class 41",
    },
];

impl ClassificationAssessor<'_> {
    // -----------------------------------------------------------------------
    // §1401.01 — statutory authority
    // -----------------------------------------------------------------------

    pub(super) fn check_statutory_authority(&mut self) {
        const SECTION: &str = "§1401.01";
        let app = self.app;
        let mut invalid_found = false;

        for entry in &app.classes {
            if entry.filing_basis.is_recognized() {
                continue;
            }
            invalid_found = true;
            self.push(
                SECTION,
                Severity::Error,
                entry.class_number,
                format!("Filing basis: '{}'", entry.filing_basis),
                "Invalid or unrecognized filing basis. USPTO jurisdiction requires \
                 a recognized basis under the Lanham Act.",
                format!(
                    "Correct filing basis to one of: {}.",
                    FilingBasis::RECOGNIZED.join(", ")
                ),
            );
        }

        if !invalid_found {
            self.push(
                SECTION,
                Severity::Ok,
                0,
                "Filing Basis",
                "All filing bases are recognized under the Lanham Act. USPTO statutory authority \
                 to classify and charge per-class fees is confirmed (15 U.S.C. §1112; Lanham Act §30).",
                "No action required.",
            );
        }
    }

    // -----------------------------------------------------------------------
    // §1401.02 — international classification adopted
    // -----------------------------------------------------------------------

    pub(super) fn check_international_classification(&mut self) {
        const SECTION: &str = "§1401.02";
        let app = self.app;
        let mut invalid_found = false;

        for entry in &app.classes {
            if get_class_info(entry.class_number).is_some() {
                continue;
            }
            invalid_found = true;
            self.push(
                SECTION,
                Severity::Error,
                entry.class_number,
                format!("Class {}", entry.class_number),
                format!(
                    "Class number {} is NOT a valid International (Nice) Classification number. \
                     Valid classes are {MIN_CLASS}–{MAX_CLASS} under the Nice Agreement.",
                    entry.class_number
                ),
                "Replace with a valid Nice Classification class number (1–45). \
                 Consult the USPTO ID Manual or TMEP §1401.02.",
            );
        }

        if !invalid_found {
            let mut used: Vec<i32> = app.classes.iter().map(|c| c.class_number).collect();
            used.sort_unstable();
            self.push(
                SECTION,
                Severity::Ok,
                0,
                "Nice Classification System Compliance",
                format!(
                    "All class numbers ({}) are valid International Nice Classification numbers \
                     under the Nice Agreement (adopted by USPTO per 37 C.F.R. §2.85).",
                    join_classes(&used)
                ),
                "No action required.",
            );
        }
    }

    // -----------------------------------------------------------------------
    // §1401.03 — designation of class
    // -----------------------------------------------------------------------

    pub(super) fn check_designation_of_class(&mut self) {
        const SECTION: &str = "§1401.03";
        let app = self.app;
        let min_score = self.config.designation_min_score;

        for entry in &app.classes {
            let claimed = entry.class_number;
            let Some(class_info) = get_class_info(claimed) else {
                continue;
            };
            let id_text = entry.identification.trim().to_lowercase();

            // Known misclassification patterns
            let mut misclassified = false;
            for m in COMMON_MISCLASSIFICATIONS.iter() {
                if !id_text.contains(m.keyword)
                    || m.wrong_class != claimed
                    || m.correct_class == claimed
                {
                    continue;
                }
                let correct_title = get_class_info(m.correct_class)
                    .map(|c| c.title)
                    .unwrap_or("see TMEP");
                self.push(
                    SECTION,
                    Severity::Error,
                    claimed,
                    format!("\"{}\" in Class {claimed}", m.keyword),
                    format!(
                        "MISCLASSIFICATION DETECTED: '{}' is placed in Class {claimed} ({}), \
                         but this is incorrect. {}",
                        m.keyword, class_info.title, m.reason
                    ),
                    format!("Move '{}' to Class {} ({correct_title}).", m.keyword, m.correct_class),
                );
                misclassified = true;
            }

            // Per-term keyword suggestions
            for term in split_terms(&id_text) {
                let Some(top) = top_suggestion(&term) else {
                    continue;
                };
                if top.class_number == claimed || top.score < min_score {
                    continue;
                }
                self.push(
                    SECTION,
                    Severity::Warning,
                    claimed,
                    format!("Term: \"{term}\" in Class {claimed}"),
                    format!(
                        "Possible classification mismatch: '{term}' appears to match Class {} ({}) \
                         more closely than Class {claimed} ({}).",
                        top.class_number, top.title, class_info.title
                    ),
                    format!(
                        "Verify whether '{term}' belongs in Class {} ({}) instead of Class {claimed}. \
                         Per §1401.05: nature of goods/services determines class.",
                        top.class_number, top.title
                    ),
                );
            }

            // Goods language in a services class, or the reverse
            let service_hits = matches_of(&id_text, SERVICE_INDICATORS);
            let is_service_language = !service_hits.is_empty();
            let is_goods_language = contains_any(&id_text, GOODS_INDICATORS);
            let mismatch_item = format!("Category mismatch in Class {claimed} ({})", class_info.title);

            match class_info.category {
                Category::Goods if is_service_language && !is_goods_language => self.push(
                    SECTION,
                    Severity::Warning,
                    claimed,
                    mismatch_item,
                    format!(
                        "The identification '{}' appears to describe a SERVICE (contains service \
                         language: {}), but Class {claimed} is a GOODS class.",
                        entry.identification,
                        service_hits.join(", ")
                    ),
                    "Review the identification. Services must be placed in Classes 35–45. \
                     Consider which service class (35–45) is appropriate.",
                ),
                Category::Services if is_goods_language && !is_service_language => self.push(
                    SECTION,
                    Severity::Warning,
                    claimed,
                    mismatch_item,
                    format!(
                        "The identification '{}' appears to describe GOODS, but Class {claimed} \
                         is a SERVICES class.",
                        entry.identification
                    ),
                    "Review the identification. Goods must be placed in Classes 1–34.",
                ),
                _ => {}
            }

            if !misclassified && !self.has_finding(SECTION, claimed, |_| true) {
                self.push(
                    SECTION,
                    Severity::Ok,
                    claimed,
                    format!("Class {claimed}: {}", head_with_ellipsis(&entry.identification, 60)),
                    format!(
                        "Class designation appears correct. Class {claimed} ({}) is consistent \
                         with the identification provided.",
                        class_info.title
                    ),
                    "No action required.",
                );
            }
        }
    }

    // -----------------------------------------------------------------------
    // §1401.05 — criteria for classification
    // -----------------------------------------------------------------------

    pub(super) fn check_classification_criteria(&mut self) {
        const SECTION: &str = "§1401.05";
        let app = self.app;

        for entry in &app.classes {
            let class_number = entry.class_number;
            let Some(class_info) = get_class_info(class_number) else {
                continue;
            };
            let id_text = entry.identification.to_lowercase();

            for pair in AMBIGUOUS_TERMS.iter().filter(|p| id_text.contains(p.term)) {
                self.push(
                    SECTION,
                    Severity::Info,
                    class_number,
                    format!("Ambiguous term: \"{}\" in Class {class_number}", pair.term),
                    format!(
                        "CLASSIFICATION CRITERIA ANALYSIS for '{}':\n   \
                         • If this is a PRODUCT (goods form) → Class {}: {}\n   \
                         • If this is a SERVICE (service form) → Class {}: {}\n   \
                         Current placement: Class {class_number} ({}). [Per §1401.05: goods = \
                         classified by nature; services = classified by function]",
                        pair.term,
                        pair.goods_class,
                        pair.goods_reason,
                        pair.service_class,
                        pair.service_reason,
                        class_info.title
                    ),
                    format!(
                        "Confirm identification clearly distinguishes between the PRODUCT form \
                         (→ Class {}) and the SERVICE form (→ Class {}). If both forms are offered, \
                         file in BOTH classes with separate identifications.",
                        pair.goods_class, pair.service_class
                    ),
                );
            }

            match class_info.category {
                Category::Goods => self.push(
                    SECTION,
                    Severity::Info,
                    class_number,
                    format!("Classification Logic — Class {class_number} (GOODS)"),
                    format!(
                        "Class {class_number} is a GOODS class. Per §1401.05, classification is \
                         based on the NATURE/COMPOSITION of the goods — what the product physically IS."
                    ),
                    "Ensure identification describes the product by its nature \
                     (e.g., material, form, composition) not its marketing purpose.",
                ),
                Category::Services => self.push(
                    SECTION,
                    Severity::Info,
                    class_number,
                    format!("Classification Logic — Class {class_number} (SERVICES)"),
                    format!(
                        "Class {class_number} is a SERVICES class. Per §1401.05, classification is \
                         based on the FUNCTION/PURPOSE of the service — what activity is performed \
                         and for whose benefit."
                    ),
                    "Ensure identification describes the service activity clearly \
                     (e.g., 'providing X for Y' or 'X services for others in the field of Y').",
                ),
            }
        }
    }

    // -----------------------------------------------------------------------
    // §1401.08 — classification and identification alignment
    // -----------------------------------------------------------------------

    pub(super) fn check_identification_alignment(&mut self) {
        const SECTION: &str = "§1401.08";
        let app = self.app;
        let alignment_min = self.config.alignment_min_score;
        let bundling_min = self.config.bundling_min_score;

        for entry in &app.classes {
            let claimed = entry.class_number;
            let Some(class_info) = get_class_info(claimed) else {
                continue;
            };

            let mut foreign_classes = BTreeSet::new();
            for item in split_terms(&entry.identification) {
                let Some(top) = top_suggestion(&item) else {
                    continue;
                };
                if top.class_number == claimed {
                    continue;
                }
                if top.score >= bundling_min {
                    foreign_classes.insert(top.class_number);
                }
                if top.score < alignment_min {
                    continue;
                }
                self.push(
                    SECTION,
                    Severity::Warning,
                    claimed,
                    format!("'{item}' in Class {claimed}"),
                    format!(
                        "ALIGNMENT ISSUE: The item '{item}' is listed under Class {claimed} ({}), \
                         but it appears to better align with Class {} ({}). Class and \
                         identification must tell the same story (§1401.08).",
                        class_info.title,
                        top.class_number,
                        class_title(top.class_number)
                    ),
                    format!(
                        "Either: (a) move '{item}' to Class {}, or (b) confirm that this item is \
                         indeed a {} product/service and amend the identification to clarify.",
                        top.class_number,
                        class_info.title.to_lowercase()
                    ),
                );
            }

            if foreign_classes.len() >= self.config.bundling_min_classes {
                self.push(
                    SECTION,
                    Severity::Warning,
                    claimed,
                    format!("Class {claimed} — Possible multi-class bundling"),
                    format!(
                        "The identification for Class {claimed} may contain goods/services from \
                         multiple different classes. Items in this entry may belong to Classes: \
                         {} as well as Class {claimed}.",
                        join_classes(&foreign_classes)
                    ),
                    "Review the identification and separate goods/services into their correct \
                     individual classes. Each class must have only goods/services that properly \
                     belong in that class.",
                );
            } else if !self.has_finding(SECTION, claimed, |f| f.severity.is_actionable()) {
                self.push(
                    SECTION,
                    Severity::Ok,
                    claimed,
                    format!("Class {claimed} — Class/Identification Alignment"),
                    format!(
                        "Class {claimed} ({}) and the identification appear consistent and aligned. \
                         The written description is coherent with the class designation.",
                        class_info.title
                    ),
                    "No action required.",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use markcheck_common::{ApplicationInput, Finding, Pillar1Config, Severity};
    use serde_json::json;

    use crate::classification::ClassificationAssessor;
    use crate::model::TrademarkApplication;

    fn run(value: serde_json::Value) -> Vec<Finding> {
        let input: ApplicationInput = serde_json::from_value(value).unwrap();
        let app = TrademarkApplication::from_input(&input);
        ClassificationAssessor::new(&app, &Pillar1Config::default()).run()
    }

    fn in_section<'a>(findings: &'a [Finding], section: &str) -> Vec<&'a Finding> {
        findings.iter().filter(|f| f.section == section).collect()
    }

    #[test]
    fn test_unrecognized_basis_is_error() {
        let findings = run(json!({
            "classes": [{"class_number": 9, "identification": "Downloadable software", "filing_basis": "2(f)"}]
        }));
        let basis = in_section(&findings, "§1401.01");
        assert_eq!(basis.len(), 1);
        assert_eq!(basis[0].severity, Severity::Error);
        assert!(basis[0].item.contains("2(f)"));
    }

    #[test]
    fn test_invalid_class_gets_one_error_and_no_ok() {
        let findings = run(json!({
            "classes": [
                {"class_number": 46, "identification": "Widgets"},
                {"class_number": 0, "identification": "Gadgets"}
            ]
        }));
        let validity = in_section(&findings, "§1401.02");
        assert_eq!(validity.iter().filter(|f| f.class_number == 46).count(), 1);
        assert_eq!(validity.iter().filter(|f| f.class_number == 0 && f.severity == Severity::Error).count(), 1);
        assert!(validity.iter().all(|f| f.severity == Severity::Error));
        // Later per-class checks skip classes outside 1–45
        assert!(in_section(&findings, "§1401.03").is_empty());
    }

    #[test]
    fn test_software_in_clothing_class_is_misclassified() {
        let findings = run(json!({
            "classes": [{"class_number": 25, "identification": "Software for inventory management"}]
        }));
        let errors: Vec<_> = in_section(&findings, "§1401.03")
            .into_iter()
            .filter(|f| f.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Software is a digital product"));
        assert!(errors[0].recommendation.contains("Class 9"));
    }

    #[test]
    fn test_downloadable_software_in_class_9_has_no_designation_error() {
        let findings = run(json!({
            "classes": [{"class_number": 9, "identification": "Downloadable software for financial management"}]
        }));
        let designation = in_section(&findings, "§1401.03");
        assert!(designation.iter().all(|f| f.severity != Severity::Error));
        assert!(designation.iter().any(|f| f.severity == Severity::Ok));
    }

    #[test]
    fn test_service_language_in_goods_class_warns() {
        let findings = run(json!({
            "classes": [{"class_number": 25, "identification": "Consulting services in the field of fashion"}]
        }));
        assert!(in_section(&findings, "§1401.03")
            .iter()
            .any(|f| f.severity == Severity::Warning && f.item.starts_with("Category mismatch")));
    }

    #[test]
    fn test_ambiguous_term_adds_advisory() {
        let findings = run(json!({
            "classes": [{"class_number": 41, "identification": "Music streaming services"}]
        }));
        let criteria = in_section(&findings, "§1401.05");
        assert!(criteria.iter().any(|f| f.item.contains("\"music\"")));
        assert!(criteria.iter().any(|f| f.item.ends_with("(SERVICES)")));
    }

    #[test]
    fn test_single_aligned_item_gets_alignment_ok() {
        let findings = run(json!({
            "classes": [{"class_number": 9, "identification": "Downloadable software"}]
        }));
        let alignment = in_section(&findings, "§1401.08");
        assert_eq!(alignment.len(), 1);
        assert_eq!(alignment[0].severity, Severity::Ok);
    }
}

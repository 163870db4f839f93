//! §1401.06–.07: specimen fit for the claimed class, and specimens that force reclassification.

use markcheck_common::{Category, Severity};
use markcheck_nice::tables::{
    GOODS_INVALID_SPECIMENS, GOODS_VALID_SPECIMENS, SERVICES_INVALID_SPECIMENS,
    SERVICES_VALID_SPECIMENS,
};
use markcheck_nice::{get_class_info, NICE_CLASSES};

use super::ClassificationAssessor;
use crate::text::{contains_any, head};

/// Identification says one thing, the specimen shows another.
struct ReclassificationTrigger {
    identification_terms: &'static [&'static str],
    specimen_terms: &'static [&'static str],
    true_class: i32,
    reason: &'static str,
}

const RECLASSIFICATION_TRIGGERS: [ReclassificationTrigger; 5] = [
    ReclassificationTrigger {
        identification_terms: &["printed manual", "printed guide", "printed instruction"],
        specimen_terms: &["download", "online", "digital", "software", "app", "website"],
        true_class: 9,
        reason: "Specimen shows ONLINE/DOWNLOADABLE content. Printed manuals → Class 16, \
                 but downloadable/online content → Class 9.",
    },
    ReclassificationTrigger {
        identification_terms: &["physical software", "software disk", "cd-rom"],
        specimen_terms: &["service", "cloud", "saas", "subscription", "access to"],
        true_class: 42,
        reason: "Specimen reveals this is a SOFTWARE SERVICE (SaaS/cloud), not a downloadable \
                 product. Software products → Class 9, but software services → Class 42.",
    },
    ReclassificationTrigger {
        identification_terms: &["clothing", "apparel", "t-shirt"],
        specimen_terms: &["restaurant", "menu", "food service", "dining", "catering"],
        true_class: 43,
        reason: "Specimen shows RESTAURANT/FOOD SERVICES, not clothing. Clothing → Class 25, \
                 but restaurant services → Class 43.",
    },
    ReclassificationTrigger {
        identification_terms: &["book", "publication"],
        specimen_terms: &["download", "ebook", "digital", "epub", "kindle"],
        true_class: 9,
        reason: "Specimen shows DOWNLOADABLE/DIGITAL format. Printed books → Class 16, \
                 but downloadable ebooks → Class 9.",
    },
    ReclassificationTrigger {
        identification_terms: &["software", "application", "app"],
        specimen_terms: &[
            "web-based", "saas", "subscription service", "cloud service", "hosted service",
            "no download",
        ],
        true_class: 42,
        reason: "Specimen reveals a WEB-BASED/SAAS service, not a downloaded product. \
                 Downloadable software → Class 9, but SaaS/cloud services → Class 42.",
    },
];

/// Count of `keywords` that occur in `text`.
fn keyword_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

impl ClassificationAssessor<'_> {
    // -----------------------------------------------------------------------
    // §1401.06 — specimen as related to classification
    // -----------------------------------------------------------------------

    pub(super) fn check_specimen_classification(&mut self) {
        const SECTION: &str = "§1401.06";
        let app = self.app;
        let window = self.config.specimen_keyword_window;
        let min_other_hits = self.config.specimen_min_other_hits;

        for entry in &app.classes {
            let class_number = entry.class_number;

            if entry.filing_basis.is_intent_to_use() {
                self.push(
                    SECTION,
                    Severity::Info,
                    class_number,
                    format!("Class {class_number} — Intent to Use (§1(b))"),
                    "No specimen required at this stage for §1(b) intent-to-use applications. \
                     Specimen must be submitted with the Statement of Use (SOU) after the mark \
                     is used in commerce.",
                    "Ensure specimen is filed with SOU when the mark is put into use.",
                );
                continue;
            }

            if !entry.has_specimen() {
                self.push(
                    SECTION,
                    Severity::Error,
                    class_number,
                    format!("Class {class_number} — Specimen Missing"),
                    format!(
                        "No specimen was provided for Class {class_number}. For §1(a) use-based \
                         applications, a specimen showing actual use of the mark is required."
                    ),
                    "Submit an acceptable specimen showing the mark in actual use in connection \
                     with the goods/services in this class.",
                );
                continue;
            }

            let Some(class_info) = get_class_info(class_number) else {
                continue;
            };
            let specimen_type = entry.specimen_type.to_lowercase();
            let specimen_desc = entry.specimen_description.to_lowercase();

            let (invalid, valid, label, rule) = match class_info.category {
                Category::Goods => (
                    GOODS_INVALID_SPECIMENS,
                    GOODS_VALID_SPECIMENS,
                    "GOODS",
                    "For goods, the specimen must show the mark directly on the goods, their \
                     packaging, or a point-of-sale display.",
                ),
                Category::Services => (
                    SERVICES_INVALID_SPECIMENS,
                    SERVICES_VALID_SPECIMENS,
                    "SERVICES",
                    "For services, the specimen must show the mark being used in the rendering \
                     or advertising of the services.",
                ),
            };
            if contains_any(&specimen_type, invalid) && !contains_any(&specimen_type, valid) {
                let kind = label.to_lowercase();
                self.push(
                    SECTION,
                    Severity::Error,
                    class_number,
                    format!("Class {class_number} specimen: '{}'", entry.specimen_type),
                    format!(
                        "UNACCEPTABLE SPECIMEN for {label}: '{}' is not an acceptable specimen for \
                         {kind} in Class {class_number}. {rule}",
                        entry.specimen_type
                    ),
                    format!(
                        "Replace specimen with an acceptable {kind} specimen such as: {}.",
                        valid.join(", ")
                    ),
                );
            }

            // Strong keywords of another class outweighing the claimed class's own
            let own_keywords = &class_info.keywords[..window.min(class_info.keywords.len())];
            let own_hits = keyword_hits(&specimen_desc, own_keywords);
            let other = NICE_CLASSES
                .iter()
                .filter(|c| c.number != class_number)
                .find(|c| {
                    let strong = &c.keywords[..window.min(c.keywords.len())];
                    let hits = keyword_hits(&specimen_desc, strong);
                    hits > own_hits && hits >= min_other_hits
                });

            match other {
                Some(other) => self.push(
                    SECTION,
                    Severity::Warning,
                    class_number,
                    format!("Specimen mismatch with Class {class_number}"),
                    format!(
                        "Specimen description appears to match Class {} ({}) more closely than \
                         Class {class_number} ({}). Specimen: '{}...'",
                        other.number,
                        other.title,
                        class_info.title,
                        head(&entry.specimen_description, 100)
                    ),
                    format!(
                        "Verify the specimen actually shows use of the mark in connection with the \
                         goods/services in Class {class_number}, not Class {}.",
                        other.number
                    ),
                ),
                None => self.push(
                    SECTION,
                    Severity::Ok,
                    class_number,
                    format!("Class {class_number} specimen alignment"),
                    format!(
                        "Specimen ('{}') appears consistent with Class {class_number} ({}). \
                         No obvious class mismatch detected.",
                        entry.specimen_type, class_info.title
                    ),
                    "Confirm specimen clearly shows the mark in actual use in connection with \
                     the identified goods/services.",
                ),
            }
        }
    }

    // -----------------------------------------------------------------------
    // §1401.07 — specimen discloses special characteristics
    // -----------------------------------------------------------------------

    pub(super) fn check_specimen_characteristics(&mut self) {
        const SECTION: &str = "§1401.07";
        let app = self.app;

        for entry in app.classes.iter().filter(|c| !c.specimen_description.is_empty()) {
            let class_number = entry.class_number;
            let specimen = entry.specimen_description.to_lowercase();
            let identification = entry.identification.to_lowercase();

            let trigger = RECLASSIFICATION_TRIGGERS.iter().find(|t| {
                contains_any(&identification, t.identification_terms)
                    && contains_any(&specimen, t.specimen_terms)
            });

            match trigger {
                Some(t) => self.push(
                    SECTION,
                    Severity::Error,
                    class_number,
                    format!("Specimen reveals reclassification need — Class {class_number}"),
                    format!(
                        "RECLASSIFICATION REQUIRED: The specimen reveals special characteristics \
                         that conflict with the current class designation.\n   \
                         • Identification says: '{}'\n   \
                         • Specimen reveals: {}\n   \
                         • Current Class: {class_number} → Correct Class: {}",
                        head(&entry.identification, 80),
                        t.reason,
                        t.true_class
                    ),
                    format!(
                        "Amend classification from Class {class_number} to Class {} and update the \
                         identification accordingly. The specimen's actual content controls \
                         classification per §1401.07.",
                        t.true_class
                    ),
                ),
                None => self.push(
                    SECTION,
                    Severity::Ok,
                    class_number,
                    format!("Class {class_number} — Specimen characteristic review"),
                    format!(
                        "No special characteristics detected in the specimen that would require \
                         reclassification from Class {class_number}. Specimen appears consistent \
                         with the identification provided."
                    ),
                    "No reclassification required based on specimen characteristics.",
                ),
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

    fn findings_in(value: serde_json::Value, section: &str) -> Vec<Finding> {
        let input: ApplicationInput = serde_json::from_value(value).unwrap();
        let app = TrademarkApplication::from_input(&input);
        ClassificationAssessor::new(&app, &Pillar1Config::default())
            .run()
            .into_iter()
            .filter(|f| f.section == section)
            .collect()
    }

    #[test]
    fn test_intent_to_use_without_specimen_is_info() {
        let findings = findings_in(
            json!({"classes": [{"class_number": 9, "identification": "Downloadable software", "filing_basis": "1(b)"}]}),
            "§1401.06",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
    }

    #[test]
    fn test_use_based_without_specimen_is_error() {
        let findings = findings_in(
            json!({"classes": [{"class_number": 25, "identification": "Shirts"}]}),
            "§1401.06",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].item.ends_with("Specimen Missing"));
    }

    #[test]
    fn test_invoice_is_not_a_goods_specimen() {
        let findings = findings_in(
            json!({"classes": [{
                "class_number": 25,
                "identification": "Shirts",
                "specimen_type": "Invoice",
                "specimen_description": "Invoice listing shirts"
            }]}),
            "§1401.06",
        );
        assert!(findings
            .iter()
            .any(|f| f.severity == Severity::Error && f.message.starts_with("UNACCEPTABLE SPECIMEN for GOODS")));
    }

    #[test]
    fn test_saas_specimen_reclassifies_class_9_software() {
        let findings = findings_in(
            json!({"classes": [{
                "class_number": 9,
                "identification": "Software for tracking invoices",
                "specimen_type": "website screenshot",
                "specimen_description": "Web-based dashboard sold as a subscription service"
            }]}),
            "§1401.07",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].message.contains("Correct Class: 42"));
    }

    #[test]
    fn test_no_specimen_description_skips_characteristics_check() {
        let findings = findings_in(
            json!({"classes": [{"class_number": 25, "identification": "Shirts", "specimen_type": "hang tag"}]}),
            "§1401.07",
        );
        assert!(findings.is_empty());
    }
}

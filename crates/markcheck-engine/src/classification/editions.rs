//! §1401.09–.15: Nice edition validity, ID Manual dates and per-edition reclassifications.

use chrono::NaiveDate;

use markcheck_common::Severity;
use markcheck_nice::tables::{
    class_42_split_date, edition_period, CLASS_42_SPLIT_TERMS, CLASS_42_TECH_TERMS,
};

use super::ClassificationAssessor;
use crate::model::FilingDate;
use crate::text::contains_any;

/// ID Manual term with the date it became acceptable.
struct RecentTerm {
    term: &'static str,
    added_after: (i32, u32, u32),
    correct_class: i32,
    note: &'static str,
}

const RECENT_TERMS: [RecentTerm; 3] = [
    RecentTerm {
        term: "non-fungible token",
        added_after: (2022, 1, 1),
        correct_class: 9,
        note: "NFT-related downloadable goods were added to Class 9 in the ID Manual after USPTO \
               guidance in 2022.",
    },
    RecentTerm {
        term: "artificial intelligence",
        added_after: (2019, 1, 1),
        correct_class: 42,
        note: "AI-specific service descriptions were formally added to the ID Manual in updated \
               USPTO guidance.",
    },
    RecentTerm {
        term: "cryptocurrency",
        added_after: (2014, 1, 1),
        correct_class: 36,
        note: "Cryptocurrency financial services were added to Class 36 ID Manual entries.",
    },
];

/// (class, term, new class, note): 9th edition moves out of a class.
const NINTH_EDITION_MOVES: [(i32, &str, i32, &str); 1] = [(
    41,
    "Internet access provider",
    38,
    "Internet access provider services: Class 41 → Class 38 (Telecom) in 9th Ed.",
)];

const DIGITAL_CONTENT_TERMS: [&str; 8] = [
    "downloadable music",
    "downloadable video",
    "downloadable ringtone",
    "downloadable image",
    "downloadable audio",
    "downloadable software",
    "downloadable ebook",
    "downloadable digital content",
];

/// (term, expected class, note) codified by the 11th edition.
const ELEVENTH_EDITION_TERMS: [(&str, i32, &str); 7] = [
    ("online marketplace", 35, "11th Ed.: Online marketplace/platform services added explicitly to Class 35."),
    ("retail store", 35, "11th Ed.: Online retail store services confirmed in Class 35."),
    ("social media", 38, "11th Ed.: Social media platform services added to Class 38 (telecom)."),
    ("online social network", 38, "11th Ed.: Online social networking services → Class 38."),
    ("saas", 42, "11th Ed.: Software as a Service (SaaS) explicitly codified in Class 42."),
    ("cloud computing", 42, "11th Ed.: Cloud computing services added to Class 42."),
    ("platform as a service", 42, "11th Ed.: PaaS services → Class 42."),
];

/// 12th edition placement: expected class plus classes it is commonly misfiled in.
struct TwelfthEditionTerm {
    term: &'static str,
    expected_class: i32,
    wrong_classes: &'static [i32],
    note: &'static str,
}

const TWELFTH_EDITION_TERMS: [TwelfthEditionTerm; 7] = [
    TwelfthEditionTerm {
        term: "artificial intelligence",
        expected_class: 42,
        wrong_classes: &[9, 35],
        note: "12th Ed.: AI services (AI software development, AI consulting) → Class 42.",
    },
    TwelfthEditionTerm {
        term: "machine learning",
        expected_class: 42,
        wrong_classes: &[9, 35],
        note: "12th Ed.: Machine learning services → Class 42.",
    },
    TwelfthEditionTerm {
        term: "non-fungible token",
        expected_class: 9,
        wrong_classes: &[35, 36],
        note: "12th Ed.: NFT digital files/goods → Class 9. NFT marketplace services → Class 35.",
    },
    TwelfthEditionTerm {
        term: "nft",
        expected_class: 9,
        wrong_classes: &[35, 36, 42],
        note: "12th Ed.: Downloadable NFT goods → Class 9. NFT authentication services → Class 42.",
    },
    TwelfthEditionTerm {
        term: "virtual goods",
        expected_class: 9,
        wrong_classes: &[28, 35],
        note: "12th Ed.: Virtual/digital goods (metaverse items, in-game items) → Class 9.",
    },
    TwelfthEditionTerm {
        term: "blockchain",
        expected_class: 42,
        wrong_classes: &[9, 36],
        note: "12th Ed.: Blockchain technology services → Class 42. Blockchain financial services → Class 36.",
    },
    TwelfthEditionTerm {
        term: "metaverse",
        expected_class: 41,
        wrong_classes: &[9, 42],
        note: "12th Ed.: Metaverse entertainment/virtual events → Class 41. Virtual goods within metaverse → Class 9.",
    },
];

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

impl ClassificationAssessor<'_> {
    // -----------------------------------------------------------------------
    // §1401.09 — implementation of Nice changes
    // -----------------------------------------------------------------------

    pub(super) fn check_nice_edition(&mut self) {
        const SECTION: &str = "§1401.09";
        let app = self.app;
        let edition = app.nice_edition_claimed.as_str();
        let current = self.config.current_edition.clone();

        let Some(period) = edition_period(edition) else {
            self.push(
                SECTION,
                Severity::Warning,
                0,
                format!("Nice Edition: '{edition}'"),
                format!(
                    "Unrecognized or unspecified Nice Agreement edition: '{edition}'. \
                     Cannot verify edition-specific compliance."
                ),
                format!(
                    "Confirm the application uses the {current} Edition of the Nice Agreement \
                     (current as of Nov 2025)."
                ),
            );
            return;
        };

        match app.filing_date() {
            FilingDate::Missing => {}
            FilingDate::Invalid => self.push(
                SECTION,
                Severity::Info,
                0,
                "Filing date format",
                "Filing date could not be parsed. Unable to verify Nice edition validity against \
                 filing date.",
                "Provide filing date in YYYY-MM-DD format for edition compliance check.",
            ),
            FilingDate::Valid(filed) if filed < period.start_date() => self.push(
                SECTION,
                Severity::Error,
                0,
                format!("Edition/Date mismatch: {edition} edition, filed {filed}"),
                format!(
                    "Filing date {filed} predates the {edition} Edition (effective {}). \
                     The edition claimed was not yet in effect at filing.",
                    period.start_date()
                ),
                "Use the edition that was in effect on the filing date. Check TMEP \
                 §1401.09-§1401.15 for edition effective dates.",
            ),
            FilingDate::Valid(filed) if filed > period.end_date() && edition != current => self.push(
                SECTION,
                Severity::Warning,
                0,
                format!("Outdated edition: {edition} (filed {filed})"),
                format!(
                    "Application uses the {edition} Edition of the Nice Agreement, but a newer \
                     edition was in effect on the filing date {filed}. Current edition: {current}."
                ),
                format!(
                    "Update classification to the {current} Edition requirements. Review §1401.15 \
                     for current edition changes."
                ),
            ),
            FilingDate::Valid(filed) => {
                let end = if period.is_open_ended() {
                    "present".to_string()
                } else {
                    period.end_date().to_string()
                };
                let current_note = if edition == current { "This is the current edition." } else { "" };
                self.push(
                    SECTION,
                    Severity::Ok,
                    0,
                    "Nice Edition Version Check",
                    format!(
                        "Application uses the {edition} Edition of the Nice Agreement, which was in \
                         effect on filing date {filed} (Edition effective: {} to {end}).",
                        period.start_date()
                    ),
                    format!("No edition conflict detected. {current_note}"),
                );
            }
        }
    }

    // -----------------------------------------------------------------------
    // §1401.10 — effective date of ID Manual changes
    // -----------------------------------------------------------------------

    pub(super) fn check_id_manual_dates(&mut self) {
        const SECTION: &str = "§1401.10";
        let app = self.app;
        // Terms are only dated against a parseable filing date
        if let Some(filed) = app.filing_date().valid() {
            self.note_recent_terms(filed);
        }

        self.push(
            SECTION,
            Severity::Info,
            0,
            "ID Manual Compliance",
            "Per §1401.10, identification language must conform to ID Manual entries as they \
             existed at the time the registration is sought (not just at filing). The ID Manual \
             is updated periodically and applicants must use current acceptable identification \
             at time of registration.",
            "Verify all identification language against the current USPTO ID Manual at: \
             https://idm.uspto.gov. Use pre-approved ID Manual language where possible.",
        );
    }

    fn note_recent_terms(&mut self, filed: NaiveDate) {
        const SECTION: &str = "§1401.10";
        let app = self.app;

        for entry in &app.classes {
            let id_text = entry.identification.to_lowercase();

            for term in RECENT_TERMS.iter().filter(|t| id_text.contains(t.term)) {
                if filed < ymd(term.added_after) {
                    self.push(
                        SECTION,
                        Severity::Warning,
                        entry.class_number,
                        format!("'{}' — ID Manual date check", term.term),
                        format!(
                            "The term '{}' in the identification may not have been accepted in \
                             the ID Manual at the time of filing ({filed}). {}",
                            term.term, term.note
                        ),
                        "Verify this term was acceptable in the USPTO ID Manual at the time of \
                         filing. If not, amend to use language acceptable as of the filing date.",
                    );
                } else {
                    self.push(
                        SECTION,
                        Severity::Info,
                        entry.class_number,
                        format!("'{}' — Modern term detected", term.term),
                        format!(
                            "Modern/specialized term '{}' detected. {} This term is acceptable in \
                             the current ID Manual.",
                            term.term, term.note
                        ),
                        format!(
                            "Ensure identification uses the exact accepted ID Manual language for \
                             this term in Class {}.",
                            term.correct_class
                        ),
                    );
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // §1401.11 — Class 42 restructuring (8th edition)
    // -----------------------------------------------------------------------

    pub(super) fn check_class_42_split(&mut self) {
        const SECTION: &str = "§1401.11";
        let app = self.app;

        for entry in app.classes.iter().filter(|c| c.class_number == 42) {
            let id_text = entry.identification.to_lowercase();
            for (term, correct_class, reason) in CLASS_42_SPLIT_TERMS.iter() {
                if !id_text.contains(term) {
                    continue;
                }
                self.push(
                    SECTION,
                    Severity::Error,
                    42,
                    format!("'{term}' in Class 42"),
                    format!(
                        "POST-8TH EDITION CLASS 42 VIOLATION: '{term}' is placed in Class 42, but \
                         this service was moved to Class {correct_class} when the 8th Edition of the \
                         Nice Agreement restructured Class 42 (effective Jan 1, 2002). {reason}"
                    ),
                    format!(
                        "Move '{term}' from Class 42 to Class {correct_class}. Class 42 \
                         (post-8th Edition) covers only scientific and technological services, IT \
                         services, and software-related services."
                    ),
                );
            }
        }

        let Some(filed) = app.filing_date().valid() else {
            return;
        };

        if filed < class_42_split_date() {
            if let Some(entry) = app.classes.iter().find(|c| (43..=45).contains(&c.class_number)) {
                self.push(
                    SECTION,
                    Severity::Info,
                    entry.class_number,
                    format!("Pre-8th Edition filing using Class {}", entry.class_number),
                    format!(
                        "This application has a filing date ({}) BEFORE the 8th Edition \
                         restructuring of Class 42 (effective Jan 1, 2002). Classes 43, 44, and 45 \
                         did not exist before this date.",
                        app.filing_date
                    ),
                    "Review the application against the edition in effect at the time of filing. \
                     Consult §1401.11 for transition rules for pre-8th Edition applications.",
                );
            }
            return;
        }

        let class_42: Vec<_> = app.classes.iter().filter(|c| c.class_number == 42).collect();
        if class_42.is_empty() {
            self.push(
                SECTION,
                Severity::Info,
                0,
                "Class 42 Restructuring Check",
                "No Class 42 entries in this application. Note: As of 8th Edition (Jan 1, 2002), \
                 Class 42 covers only scientific/technological/IT services. Restaurant services → \
                 Class 43; Medical → Class 44; Legal → Class 45.",
                "No action required for §1401.11.",
            );
            return;
        }

        for entry in class_42 {
            if contains_any(&entry.identification.to_lowercase(), CLASS_42_TECH_TERMS) {
                self.push(
                    SECTION,
                    Severity::Ok,
                    42,
                    "Class 42 usage (post-8th Edition)",
                    "Class 42 is being used for technology/scientific services consistent with \
                     the post-8th Edition restructuring.",
                    "No action required.",
                );
            }
        }
    }

    // -----------------------------------------------------------------------
    // §1401.12 — 9th edition
    // -----------------------------------------------------------------------

    pub(super) fn check_ninth_edition(&mut self) {
        const SECTION: &str = "§1401.12";
        let app = self.app;

        for entry in &app.classes {
            let id_text = entry.identification.to_lowercase();
            for (old_class, old_term, new_class, note) in NINTH_EDITION_MOVES.iter() {
                if entry.class_number != *old_class || !id_text.contains(&old_term.to_lowercase()) {
                    continue;
                }
                self.push(
                    SECTION,
                    Severity::Warning,
                    entry.class_number,
                    format!("'{old_term}' in Class {old_class}"),
                    format!(
                        "9TH EDITION CHANGE: '{old_term}' was reclassified from Class {old_class} \
                         to Class {new_class} in the 9th Edition. {note}"
                    ),
                    format!("Move '{old_term}' from Class {old_class} to Class {new_class}."),
                );
            }
        }

        self.push(
            SECTION,
            Severity::Info,
            0,
            "9th Edition Nice Agreement Review",
            "9th Edition (2002–2006): Key changes included refinements to educational and \
             entertainment services (Class 41), further definition of Class 42 technology \
             services, and movement of internet-related services to Class 38. No critical \
             violations detected under 9th Edition rules in this application.",
            "If application was filed during 2002–2006, verify against 9th Edition ID Manual \
             entries. For current applications, 12th Edition applies.",
        );
    }

    // -----------------------------------------------------------------------
    // §1401.13 — 10th edition
    // -----------------------------------------------------------------------

    pub(super) fn check_tenth_edition(&mut self) {
        const SECTION: &str = "§1401.13";
        let app = self.app;

        for entry in &app.classes {
            let class_number = entry.class_number;
            let id_text = entry.identification.to_lowercase();

            if class_number != 9 {
                for term in DIGITAL_CONTENT_TERMS.iter().filter(|t| id_text.contains(*t)) {
                    self.push(
                        SECTION,
                        Severity::Error,
                        class_number,
                        format!("'{term}' in Class {class_number}"),
                        format!(
                            "10TH EDITION CHANGE VIOLATION: '{term}' is a DOWNLOADABLE DIGITAL \
                             PRODUCT. Per the 10th Edition expansion of Class 9 (effective 2007), \
                             all downloadable digital content belongs in Class 9 — not in \
                             Class {class_number}."
                        ),
                        format!(
                            "Move '{term}' to Class 9 (Scientific and Electronic Apparatus). \
                             Class 9 now explicitly includes downloadable digital content per \
                             §1401.13 and 10th Edition Nice Agreement."
                        ),
                    );
                }
            } else if contains_any(&id_text, &DIGITAL_CONTENT_TERMS) {
                self.push(
                    SECTION,
                    Severity::Ok,
                    9,
                    "Class 9 — Downloadable digital content",
                    "Downloadable digital content correctly placed in Class 9 per 10th Edition \
                     Nice Agreement expansion.",
                    "Ensure identification specifies 'downloadable' to distinguish from streaming \
                     services (which go in Class 41/42).",
                );
            }
        }
    }

    // -----------------------------------------------------------------------
    // §1401.14 — 11th edition
    // -----------------------------------------------------------------------

    pub(super) fn check_eleventh_edition(&mut self) {
        const SECTION: &str = "§1401.14";
        let app = self.app;

        for entry in &app.classes {
            let class_number = entry.class_number;
            let id_text = entry.identification.to_lowercase();

            for (term, expected, note) in ELEVENTH_EDITION_TERMS.iter() {
                if !id_text.contains(term) {
                    continue;
                }
                if class_number != *expected {
                    self.push(
                        SECTION,
                        Severity::Error,
                        class_number,
                        format!("'{term}' in Class {class_number}"),
                        format!(
                            "11TH EDITION CHANGE: '{term}' should be in Class {expected} per 11th \
                             Edition changes. {note} Currently placed in Class {class_number}."
                        ),
                        format!("Move '{term}' to Class {expected}."),
                    );
                } else {
                    self.push(
                        SECTION,
                        Severity::Ok,
                        class_number,
                        format!("'{term}' classification (11th Edition)"),
                        format!(
                            "'{term}' correctly placed in Class {class_number} per 11th Edition \
                             Nice Agreement changes."
                        ),
                        "No action required.",
                    );
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // §1401.15 — 12th edition (current)
    // -----------------------------------------------------------------------

    pub(super) fn check_twelfth_edition(&mut self) {
        const SECTION: &str = "§1401.15";
        let app = self.app;

        for entry in &app.classes {
            let class_number = entry.class_number;
            let id_text = entry.identification.to_lowercase();

            for check in TWELFTH_EDITION_TERMS.iter().filter(|c| id_text.contains(c.term)) {
                if check.wrong_classes.contains(&class_number) {
                    self.push(
                        SECTION,
                        Severity::Warning,
                        class_number,
                        format!("'{}' in Class {class_number}", check.term),
                        format!(
                            "12TH EDITION (CURRENT) NOTE: '{}' may be misplaced in Class \
                             {class_number}. {}",
                            check.term, check.note
                        ),
                        format!(
                            "Per the 12th Edition Nice Agreement (current), consider whether '{}' \
                             belongs in Class {}. Review the latest USPTO ID Manual entries.",
                            check.term, check.expected_class
                        ),
                    );
                } else if class_number == check.expected_class {
                    self.push(
                        SECTION,
                        Severity::Ok,
                        class_number,
                        format!("'{}' — 12th Edition compliance", check.term),
                        format!(
                            "'{}' correctly placed in Class {class_number} per 12th Edition Nice \
                             Agreement (current edition). {}",
                            check.term, check.note
                        ),
                        "No action required.",
                    );
                }
            }
        }

        self.push(
            SECTION,
            Severity::Info,
            0,
            "12th Edition (Current) Compliance — Nov 2025",
            "This assessment is based on the 12th Edition of the Nice Agreement (effective \
             January 1, 2023), which is the current edition as of Nov 2025. Key additions: AI/ML \
             services (Class 42), virtual goods/NFTs (Class 9), blockchain services (Class 42), \
             metaverse entertainment (Class 41).",
            "Ensure all identification language conforms to 12th Edition requirements and current \
             USPTO ID Manual entries.",
        );
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
    fn test_edition_predating_filing_date_is_error() {
        let findings = findings_in(
            json!({"filing_date": "2020-05-01", "nice_edition_claimed": "12th", "classes": []}),
            "§1401.09",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn test_outdated_edition_is_warning() {
        let findings = findings_in(
            json!({"filing_date": "2024-05-01", "nice_edition_claimed": "11th", "classes": []}),
            "§1401.09",
        );
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_current_edition_ok_mentions_present() {
        let findings = findings_in(
            json!({"filing_date": "2024-05-01", "classes": []}),
            "§1401.09",
        );
        assert_eq!(findings[0].severity, Severity::Ok);
        assert!(findings[0].message.contains("2023-01-01 to present"));
        assert_eq!(findings[0].recommendation, "No edition conflict detected. This is the current edition.");
    }

    #[test]
    fn test_unparseable_filing_date_degrades_to_info() {
        let findings = findings_in(
            json!({"filing_date": "May 2024", "classes": []}),
            "§1401.09",
        );
        assert_eq!(findings[0].severity, Severity::Info);
    }

    #[test]
    fn test_restaurant_in_class_42_is_error() {
        let findings = findings_in(
            json!({"filing_date": "2024-05-01", "classes": [{"class_number": 42, "identification": "Restaurant services"}]}),
            "§1401.11",
        );
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(findings[0].message.contains("Class 43"));
    }

    #[test]
    fn test_pre_split_filing_notes_first_new_class_only() {
        let findings = findings_in(
            json!({
                "filing_date": "1999-05-01",
                "nice_edition_claimed": "8th",
                "classes": [
                    {"class_number": 43, "identification": "Restaurant services"},
                    {"class_number": 44, "identification": "Medical services"}
                ]
            }),
            "§1401.11",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].class_number, 43);
    }

    #[test]
    fn test_downloadable_music_outside_class_9_is_error() {
        let findings = findings_in(
            json!({"classes": [{"class_number": 41, "identification": "Downloadable music"}]}),
            "§1401.13",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn test_saas_outside_class_42_is_error_and_inside_is_ok() {
        let wrong = findings_in(
            json!({"classes": [{"class_number": 9, "identification": "SaaS platform"}]}),
            "§1401.14",
        );
        assert_eq!(wrong[0].severity, Severity::Error);
        let right = findings_in(
            json!({"classes": [{"class_number": 42, "identification": "SaaS platform"}]}),
            "§1401.14",
        );
        assert_eq!(right[0].severity, Severity::Ok);
    }

    #[test]
    fn test_ai_in_class_9_warns_under_twelfth_edition() {
        let findings = findings_in(
            json!({"classes": [{"class_number": 9, "identification": "Artificial intelligence software"}]}),
            "§1401.15",
        );
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings.last().unwrap().class_number, 0);
    }
}

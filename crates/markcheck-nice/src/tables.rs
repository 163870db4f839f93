//! Auxiliary USPTO tables: Nice edition timeline, known misclassifications,
//! specimen taxonomy and the per-class fee schedule.

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Nice edition timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EditionPeriod {
    pub edition: &'static str,
    pub start: (i32, u32, u32),
    /// `None` for the edition currently in force.
    pub end: Option<(i32, u32, u32)>,
    /// TMEP subsection that discusses the edition.
    pub section: &'static str,
    pub note: Option<&'static str>,
}

impl EditionPeriod {
    pub fn start_date(&self) -> NaiveDate {
        ymd(self.start)
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.map(ymd).unwrap_or(NaiveDate::MAX)
    }

    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date() <= date && date <= self.end_date()
    }
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub static EDITION_TIMELINE: [EditionPeriod; 6] = [
    EditionPeriod { edition: "7th",  start: (1992, 1, 1), end: Some((1996, 12, 31)), section: "1401.09", note: None },
    EditionPeriod { edition: "8th",  start: (1997, 1, 1), end: Some((2001, 12, 31)), section: "1401.11",
        note: Some("Class 42 was split into Classes 42, 43, 44, and 45.") },
    EditionPeriod { edition: "9th",  start: (2002, 1, 1), end: Some((2006, 12, 31)), section: "1401.12",
        note: Some("Major reclassification of services in Class 41 and 42.") },
    EditionPeriod { edition: "10th", start: (2007, 1, 1), end: Some((2011, 12, 31)), section: "1401.13",
        note: Some("Expansion of Class 9 to include downloadable digital content.") },
    EditionPeriod { edition: "11th", start: (2012, 1, 1), end: Some((2022, 12, 31)), section: "1401.14",
        note: Some("Additions to Class 35, 38, and 42 for internet-based services.") },
    EditionPeriod { edition: "12th", start: (2023, 1, 1), end: None,                 section: "1401.15",
        note: Some("Current edition. Refinements to tech, AI, and digital service classifications.") },
];

pub fn edition_period(edition: &str) -> Option<&'static EditionPeriod> {
    EDITION_TIMELINE.iter().find(|p| p.edition == edition)
}

/// Edition in force on a given date.
pub fn edition_in_force(date: NaiveDate) -> Option<&'static EditionPeriod> {
    EDITION_TIMELINE.iter().find(|p| p.contains(date))
}

pub fn edition_names() -> Vec<&'static str> {
    EDITION_TIMELINE.iter().map(|p| p.edition).collect()
}

// ---------------------------------------------------------------------------
// Class 42 split (8th edition, effective 2002-01-01)
// ---------------------------------------------------------------------------

/// First day on which Classes 43–45 existed.
pub const CLASS_42_SPLIT_DATE: (i32, u32, u32) = (2002, 1, 1);

/// Service terms that left Class 42 in the split: `(term, current class, reason)`.
pub static CLASS_42_SPLIT_TERMS: [(&str, i32, &str); 15] = [
    ("restaurant",      43, "Food/restaurant services → Class 43 (split from old Class 42 in 8th Ed.)"),
    ("food service",    43, "Food services → Class 43"),
    ("hotel",           43, "Hotel/accommodation → Class 43"),
    ("catering",        43, "Catering services → Class 43"),
    ("accommodation",   43, "Accommodation → Class 43"),
    ("medical service", 44, "Medical services → Class 44 (split from old Class 42 in 8th Ed.)"),
    ("dental service",  44, "Dental services → Class 44"),
    ("veterinary",      44, "Veterinary services → Class 44"),
    ("beauty service",  44, "Beauty services → Class 44"),
    ("salon",           44, "Salon services → Class 44"),
    ("healthcare",      44, "Healthcare services → Class 44"),
    ("legal service",   45, "Legal services → Class 45 (split from old Class 42 in 8th Ed.)"),
    ("law firm",        45, "Law firm services → Class 45"),
    ("security guard",  45, "Security guard services → Class 45"),
    ("social service",  45, "Social services → Class 45"),
];

/// Vocabulary that marks a Class 42 entry as the post-split tech/science class.
pub const CLASS_42_TECH_TERMS: &[&str] = &[
    "software", "technology", "it service", "computer", "research", "cloud", "saas",
    "data", "programming", "cybersecurity", "network", "engineering service",
];

pub fn class_42_split_date() -> NaiveDate {
    ymd(CLASS_42_SPLIT_DATE)
}

// ---------------------------------------------------------------------------
// Known misclassification patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Misclassification {
    pub keyword: &'static str,
    pub wrong_class: i32,
    pub correct_class: i32,
    pub reason: &'static str,
}

const fn mis(keyword: &'static str, wrong_class: i32, correct_class: i32, reason: &'static str) -> Misclassification {
    Misclassification { keyword, wrong_class, correct_class, reason }
}

/// Entries where `wrong_class == correct_class` record a confirmed placement and never fire.
pub static COMMON_MISCLASSIFICATIONS: [Misclassification; 16] = [
    // Tech goods
    mis("software", 25, 9, "Software is a digital product → Class 9, not clothing (Class 25)"),
    mis("software", 35, 42, "Software development is a tech service → Class 42, not business services (Class 35)"),
    mis("app", 35, 9, "Mobile app (downloadable) → Class 9; if SaaS → Class 42"),
    mis("website", 35, 42, "Website development is IT service → Class 42"),
    mis("downloadable music", 41, 9, "Downloadable music is a digital product → Class 9"),
    mis("music streaming service", 9, 41, "Streaming service is entertainment → Class 41"),
    mis("printed manual", 9, 16, "Printed manuals are printed matter → Class 16"),
    // Food and beverage
    mis("restaurant", 43, 43, "OK"),
    mis("restaurant", 35, 43, "Restaurant services → Class 43, not business services"),
    mis("coffee beverage", 30, 30, "OK - coffee as a product"),
    mis("coffee shop", 30, 43, "Coffee shop (service) → Class 43"),
    // Medical
    mis("medical device", 5, 10, "Medical devices → Class 10, not pharmaceuticals (Class 5)"),
    mis("pharmaceutical", 10, 5, "Pharmaceuticals → Class 5, not medical devices (Class 10)"),
    // Old Class 42
    mis("restaurant service", 42, 43, "Post 8th Ed.: restaurant services → Class 43 (split from old Class 42)"),
    mis("medical service", 42, 44, "Post 8th Ed.: medical services → Class 44 (split from old Class 42)"),
    mis("legal service", 42, 45, "Post 8th Ed.: legal services → Class 45 (split from old Class 42)"),
];

// ---------------------------------------------------------------------------
// Specimen taxonomy
// ---------------------------------------------------------------------------

pub const GOODS_VALID_SPECIMENS: &[&str] = &[
    "product label", "product packaging", "product tag", "product photo",
    "hang tag", "point of sale display", "screenshot showing product for sale",
];

pub const GOODS_INVALID_SPECIMENS: &[&str] = &[
    "invoice", "purchase order", "business card", "letterhead",
    "press release", "rendering", "mockup", "logo alone",
];

pub const SERVICES_VALID_SPECIMENS: &[&str] = &[
    "website screenshot", "advertisement", "brochure", "promotional material",
    "screenshot of service", "service description page",
];

pub const SERVICES_INVALID_SPECIMENS: &[&str] = &[
    "product label", "invoice", "business card alone", "rendering",
];

// ---------------------------------------------------------------------------
// Fees (USPTO, November 2025)
// ---------------------------------------------------------------------------

/// Per-class application fee by filing type.
pub static USPTO_FEES: [(&str, u32); 3] = [
    ("TEAS_PLUS", 250),
    ("TEAS_STANDARD", 350),
    ("PAPER", 750),
];

/// Charged when the filing type is not in [`USPTO_FEES`].
pub const DEFAULT_FEE_PER_CLASS: u32 = 350;

/// Statement of Use fee, per intent-to-use class.
pub const SOU_FEE_PER_CLASS: u32 = 100;

pub fn fee_per_class(filing_type: &str) -> u32 {
    USPTO_FEES
        .iter()
        .find(|(name, _)| *name == filing_type)
        .map(|(_, fee)| *fee)
        .unwrap_or(DEFAULT_FEE_PER_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_contiguous() {
        for pair in EDITION_TIMELINE.windows(2) {
            let next_day = pair[0].end_date().succ_opt().unwrap();
            assert_eq!(next_day, pair[1].start_date(), "{} → {}", pair[0].edition, pair[1].edition);
        }
        assert!(EDITION_TIMELINE.last().unwrap().is_open_ended());
    }

    #[test]
    fn test_edition_in_force_by_date() {
        let date = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
        assert_eq!(edition_in_force(date).map(|p| p.edition), Some("11th"));
        let date = NaiveDate::from_ymd_opt(1985, 6, 1).unwrap();
        assert!(edition_in_force(date).is_none());
        assert!(edition_period("13th").is_none());
    }

    #[test]
    fn test_unknown_filing_type_charged_standard_rate() {
        assert_eq!(fee_per_class("TEAS_PLUS"), 250);
        assert_eq!(fee_per_class("PAPER"), 750);
        assert_eq!(fee_per_class("FAX"), DEFAULT_FEE_PER_CLASS);
    }

    #[test]
    fn test_split_terms_target_new_service_classes() {
        assert!(CLASS_42_SPLIT_TERMS.iter().all(|(_, class, _)| (43..=45).contains(class)));
        assert_eq!(class_42_split_date(), EDITION_TIMELINE[2].start_date());
    }

    #[test]
    fn test_self_mapping_entries_are_inert() {
        let inert: Vec<_> = COMMON_MISCLASSIFICATIONS
            .iter()
            .filter(|m| m.wrong_class == m.correct_class)
            .map(|m| m.keyword)
            .collect();
        assert_eq!(inert, vec!["restaurant", "coffee beverage"]);
    }
}

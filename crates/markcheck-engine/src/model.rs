//! Parsed application model. Built once from [`ApplicationInput`] and never mutated.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use markcheck_common::{ApplicationInput, ClassInput};

// ---------------------------------------------------------------------------
// Filing basis
// ---------------------------------------------------------------------------

/// Lanham Act filing basis. Unrecognised values are kept so §1401.01 can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilingBasis {
    /// §1(a) use in commerce
    UseInCommerce,
    /// §1(b) intent to use
    IntentToUse,
    /// §44(d) foreign application priority
    ForeignApplication,
    /// §44(e) foreign registration
    ForeignRegistration,
    /// §66(a) Madrid Protocol extension
    MadridProtocol,
    Other(String),
}

impl FilingBasis {
    pub const RECOGNIZED: [&'static str; 5] = ["1(a)", "1(b)", "44(d)", "44(e)", "66(a)"];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "1(a)" => FilingBasis::UseInCommerce,
            "1(b)" => FilingBasis::IntentToUse,
            "44(d)" => FilingBasis::ForeignApplication,
            "44(e)" => FilingBasis::ForeignRegistration,
            "66(a)" => FilingBasis::MadridProtocol,
            other => FilingBasis::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilingBasis::UseInCommerce => "1(a)",
            FilingBasis::IntentToUse => "1(b)",
            FilingBasis::ForeignApplication => "44(d)",
            FilingBasis::ForeignRegistration => "44(e)",
            FilingBasis::MadridProtocol => "66(a)",
            FilingBasis::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, FilingBasis::Other(_))
    }

    /// Bases that require a specimen and dates of use at filing.
    pub fn is_use_based(&self) -> bool {
        matches!(self, FilingBasis::UseInCommerce | FilingBasis::ForeignRegistration)
    }

    pub fn is_intent_to_use(&self) -> bool {
        matches!(self, FilingBasis::IntentToUse)
    }
}

impl Default for FilingBasis {
    fn default() -> Self {
        FilingBasis::UseInCommerce
    }
}

impl From<String> for FilingBasis {
    fn from(raw: String) -> Self {
        FilingBasis::parse(&raw)
    }
}

impl From<FilingBasis> for String {
    fn from(basis: FilingBasis) -> Self {
        basis.as_str().to_string()
    }
}

impl std::fmt::Display for FilingBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Filing type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilingType {
    TeasPlus,
    TeasStandard,
    Paper,
    Other(String),
}

impl FilingType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "TEAS_PLUS" => FilingType::TeasPlus,
            "TEAS_STANDARD" => FilingType::TeasStandard,
            "PAPER" => FilingType::Paper,
            other => FilingType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilingType::TeasPlus => "TEAS_PLUS",
            FilingType::TeasStandard => "TEAS_STANDARD",
            FilingType::Paper => "PAPER",
            FilingType::Other(raw) => raw,
        }
    }

    /// Per-class application fee; unknown types pay the TEAS Standard rate.
    pub fn fee_per_class(&self) -> u32 {
        markcheck_nice::tables::fee_per_class(self.as_str())
    }
}

impl From<String> for FilingType {
    fn from(raw: String) -> Self {
        FilingType::parse(&raw)
    }
}

impl From<FilingType> for String {
    fn from(filing_type: FilingType) -> Self {
        filing_type.as_str().to_string()
    }
}

impl std::fmt::Display for FilingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Outcome of reading an optional `YYYY-MM-DD` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilingDate {
    Missing,
    Invalid,
    Valid(NaiveDate),
}

impl FilingDate {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return FilingDate::Missing;
        }
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => FilingDate::Valid(date),
            Err(_) => FilingDate::Invalid,
        }
    }

    pub fn valid(&self) -> Option<NaiveDate> {
        match self {
            FilingDate::Valid(date) => Some(*date),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Class entry and application
// ---------------------------------------------------------------------------

/// One claimed class line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub class_number: i32,
    pub identification: String,
    pub specimen_type: String,
    pub specimen_description: String,
    pub fee_paid: bool,
    pub filing_basis: FilingBasis,
    pub date_of_first_use: Option<String>,
    pub date_of_first_use_commerce: Option<String>,
}

impl From<&ClassInput> for ClassEntry {
    fn from(input: &ClassInput) -> Self {
        Self {
            class_number: input.class_number,
            identification: input.identification.clone(),
            specimen_type: input.specimen_type.clone(),
            specimen_description: input.specimen_description.clone(),
            fee_paid: input.fee_paid,
            filing_basis: FilingBasis::parse(&input.filing_basis),
            date_of_first_use: input.date_of_first_use.clone(),
            date_of_first_use_commerce: input.date_of_first_use_commerce.clone(),
        }
    }
}

impl ClassEntry {
    pub fn has_specimen(&self) -> bool {
        !self.specimen_type.is_empty() || !self.specimen_description.is_empty()
    }
}

/// The whole filing as Pillar 1 sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrademarkApplication {
    pub applicant_name: String,
    pub mark_text: String,
    pub mark_type: String,
    pub filing_date: String,
    pub nice_edition_claimed: String,
    pub application_serial: String,
    pub filing_type: FilingType,
    pub classes: Vec<ClassEntry>,
    /// Fees actually submitted. Expected to equal the distinct class count; checked, not enforced.
    pub fees_paid_count: u32,
    pub total_fee_paid: f64,
    pub notes: String,
}

impl TrademarkApplication {
    pub fn from_input(input: &ApplicationInput) -> Self {
        Self {
            applicant_name: input.applicant_name.clone(),
            mark_text: input.mark_text.clone(),
            mark_type: input.mark_type.clone(),
            filing_date: input.filing_date.clone(),
            nice_edition_claimed: input.nice_edition_claimed.clone(),
            application_serial: input.application_serial.clone(),
            filing_type: FilingType::parse(&input.filing_type),
            classes: input.classes.iter().map(ClassEntry::from).collect(),
            fees_paid_count: input.effective_fees_paid(),
            total_fee_paid: input.total_fee_paid,
            notes: input.notes.clone(),
        }
    }

    /// Sorted distinct class numbers.
    pub fn distinct_classes(&self) -> BTreeSet<i32> {
        self.classes.iter().map(|c| c.class_number).collect()
    }

    pub fn is_multi_class(&self) -> bool {
        self.distinct_classes().len() > 1
    }

    pub fn filing_date(&self) -> FilingDate {
        FilingDate::parse(&self.filing_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basis_round_trips_through_string() {
        for raw in FilingBasis::RECOGNIZED {
            let basis = FilingBasis::parse(raw);
            assert!(basis.is_recognized());
            assert_eq!(basis.as_str(), raw);
        }
        let odd = FilingBasis::parse("2(f)");
        assert!(!odd.is_recognized());
        assert_eq!(odd.as_str(), "2(f)");
    }

    #[test]
    fn test_use_based_covers_1a_and_44e_only() {
        assert!(FilingBasis::UseInCommerce.is_use_based());
        assert!(FilingBasis::ForeignRegistration.is_use_based());
        assert!(!FilingBasis::ForeignApplication.is_use_based());
        assert!(!FilingBasis::IntentToUse.is_use_based());
        assert!(FilingBasis::IntentToUse.is_intent_to_use());
    }

    #[test]
    fn test_filing_date_states() {
        assert_eq!(FilingDate::parse(""), FilingDate::Missing);
        assert_eq!(FilingDate::parse("20-11-2024"), FilingDate::Invalid);
        assert_eq!(
            FilingDate::parse("2024-11-20").valid(),
            NaiveDate::from_ymd_opt(2024, 11, 20),
        );
    }

    #[test]
    fn test_application_from_input_applies_fee_default() {
        let input = ApplicationInput::from_json(
            r#"{"filing_type": "PAPER", "classes": [{"class_number": 9}, {"class_number": 42}]}"#,
        )
        .unwrap();
        let app = TrademarkApplication::from_input(&input);
        assert_eq!(app.fees_paid_count, 2);
        assert_eq!(app.filing_type, FilingType::Paper);
        assert_eq!(app.filing_type.fee_per_class(), 750);
        assert!(app.is_multi_class());
    }

    #[test]
    fn test_unknown_filing_type_uses_standard_fee() {
        assert_eq!(FilingType::parse("FAX").fee_per_class(), 350);
    }
}

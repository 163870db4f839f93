//! Field and class-block recognition over normalised filing text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use markcheck_common::{ApplicationInput, ClassInput};

/// Application fields plus the registry details the engine does not consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedApplication {
    #[serde(flatten)]
    pub application: ApplicationInput,
    pub registration_number: String,
    pub entity_type: String,
    pub citizenship: String,
}

// ---------------------------------------------------------------------------
// Single-line fields
// ---------------------------------------------------------------------------

/// Each field lists its patterns in priority order; group 1 is the value.
const SERIAL_PATTERNS: &[&str] = &[r"(?i)Serial\s+Number[:\s]+([\d/]+)", r"(?i)\bSN[:\s]+([\d/]+)"];
const REGISTRATION_PATTERNS: &[&str] = &[
    r"(?i)Registration\s+Number[:\s]+([\d/]+)",
    r"(?i)Reg\.\s*No\.?[:\s]+([\d/]+)",
];
const MARK_PATTERNS: &[&str] = &[r"(?i)\bMark[:\s]+([A-Z0-9\-& ]+)", r"(?i)Literal\s+Element[:\s]+(.+)"];
const OWNER_PATTERNS: &[&str] = &[r"(?i)\bOwner[:\s]+(.+)", r"(?i)\bApplicant[:\s]+(.+)"];
const ENTITY_PATTERNS: &[&str] = &[r"(?i)Entity\s+Type[:\s]+(.+)", r"(?i)Legal\s+Entity[:\s]+(.+)"];
const CITIZENSHIP_PATTERNS: &[&str] = &[
    r"(?i)Citizenship[:\s]+(.+)",
    r"(?i)Country\s+of\s+Organization[:\s]+(.+)",
];
const GOODS_PATTERNS: &[&str] = &[r"(?i)Goods\s+and\s+Services[:\s]+(.+)"];

/// Compiled field patterns, one list per field.
struct FieldRegexes {
    serial: Vec<Regex>,
    registration: Vec<Regex>,
    mark: Vec<Regex>,
    owner: Vec<Regex>,
    entity: Vec<Regex>,
    citizenship: Vec<Regex>,
    goods: Vec<Regex>,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

fn field_regexes() -> &'static FieldRegexes {
    use std::sync::OnceLock;
    static RE: OnceLock<FieldRegexes> = OnceLock::new();
    RE.get_or_init(|| FieldRegexes {
        serial: compile(SERIAL_PATTERNS),
        registration: compile(REGISTRATION_PATTERNS),
        mark: compile(MARK_PATTERNS),
        owner: compile(OWNER_PATTERNS),
        entity: compile(ENTITY_PATTERNS),
        citizenship: compile(CITIZENSHIP_PATTERNS),
        goods: compile(GOODS_PATTERNS),
    })
}

/// First pattern that matches wins. `.` stops at a newline, so values end at the line end.
fn first_capture(patterns: &[Regex], text: &str) -> String {
    patterns
        .iter()
        .find_map(|re| re.captures(text).and_then(|c| c.get(1)))
        .map(|value| value.as_str().trim().to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Class blocks
// ---------------------------------------------------------------------------

/// Header styles, most specific first. Only the first style that matches is used.
fn class_header_regexes() -> &'static [Regex; 3] {
    use std::sync::OnceLock;
    static RE: OnceLock<[Regex; 3]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            Regex::new(r"(?i)International\s+Class\s+(\d+)[:\-]?\s*").unwrap(),
            Regex::new(r"(?i)\bClass\s+(\d+)[:\-]?\s*").unwrap(),
            Regex::new(r"(?i)\bIC\s*0*(\d+)[:\-]?\s*").unwrap(),
        ]
    })
}

fn first_international_class_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)International\s+Class\s+(\d+)").unwrap())
}

/// Dates-of-use trailers that follow the identification in a class block.
fn use_trailer_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(First Use|Use in Commerce)").unwrap())
}

fn class_entry(class_number: i32, identification: String, filing_basis: &str) -> ClassInput {
    ClassInput {
        class_number,
        identification,
        fee_paid: true,
        filing_basis: filing_basis.to_string(),
        ..ClassInput::default()
    }
}

/// Split `text` into `(class number, description)` blocks. Each description runs
/// from its header to the next header of the same style.
fn class_blocks(text: &str) -> Vec<(i32, String)> {
    for (style, header) in class_header_regexes().iter().enumerate() {
        let headers: Vec<_> = header.captures_iter(text).collect();
        if headers.is_empty() {
            continue;
        }

        let mut blocks = Vec::with_capacity(headers.len());
        for (i, caps) in headers.iter().enumerate() {
            let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let Ok(class_number) = digits.as_str().parse::<i32>() else {
                warn!(digits = digits.as_str(), "Class number out of range, skipping block");
                continue;
            };
            let end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |m| m.start());

            let flat = text[whole.end()..end].trim().replace('\n', " ");
            let description = match use_trailer_regex().find(&flat) {
                Some(m) => &flat[..m.start()],
                None => flat.as_str(),
            };
            blocks.push((class_number, description.trim().to_string()));
        }

        debug!(style, blocks = blocks.len(), "Class headers recognised");
        return blocks;
    }
    Vec::new()
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Build an application from normalised filing text.
pub fn parse_application_text(text: &str) -> ExtractedApplication {
    let fields = field_regexes();
    let filing_basis = if text.to_lowercase().contains("use in commerce") {
        "1(a)"
    } else {
        "1(b)"
    };

    let mut classes: Vec<ClassInput> = class_blocks(text)
        .into_iter()
        .map(|(n, desc)| class_entry(n, desc, filing_basis))
        .collect();

    // Header-only layouts put the wording under a separate "Goods and Services" line.
    if classes.iter().all(|c| c.identification.is_empty()) {
        let first_class = first_international_class_regex()
            .captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<i32>().ok());
        if let Some(n) = first_class {
            let goods = first_capture(&fields.goods, text);
            debug!(class_number = n, "Falling back to Goods and Services line");
            classes = vec![class_entry(n, goods, filing_basis)];
        }
    }

    let application = ApplicationInput {
        applicant_name: first_capture(&fields.owner, text),
        mark_text: first_capture(&fields.mark, text),
        mark_type: "standard_character".to_string(),
        nice_edition_claimed: "12th".to_string(),
        application_serial: first_capture(&fields.serial, text),
        filing_type: "TEAS_PLUS".to_string(),
        fees_paid_count: Some(classes.len() as u32),
        classes,
        ..ApplicationInput::default()
    };

    ExtractedApplication {
        application,
        registration_number: first_capture(&fields.registration, text),
        entity_type: first_capture(&fields.entity, text),
        citizenship: first_capture(&fields.citizenship, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FILING: &str = "Serial Number: 97123456\n\
        Registration Number: 7012345\n\
        Mark: NORTHWIND\n\
        Owner: Northwind Outfitters LLC\n\
        Entity Type: limited liability company\n\
        Citizenship: Delaware\n\
        International Class 25: Shirts; hats; jackets First Use: 2023-04-01\n\
        International Class 35: Online retail store services featuring clothing\n\
        Use in Commerce: 2023-05-01";

    #[test]
    fn test_single_line_fields() {
        let extracted = parse_application_text(FILING);
        assert_eq!(extracted.application.application_serial, "97123456");
        assert_eq!(extracted.registration_number, "7012345");
        assert_eq!(extracted.application.mark_text, "NORTHWIND");
        assert_eq!(extracted.application.applicant_name, "Northwind Outfitters LLC");
        assert_eq!(extracted.entity_type, "limited liability company");
        assert_eq!(extracted.citizenship, "Delaware");
    }

    #[test]
    fn test_international_class_blocks() {
        let app = parse_application_text(FILING).application;
        assert_eq!(app.classes.len(), 2);
        assert_eq!(app.classes[0].class_number, 25);
        assert_eq!(app.classes[0].identification, "Shirts; hats; jackets");
        assert_eq!(app.classes[1].class_number, 35);
        assert_eq!(app.classes[1].identification, "Online retail store services featuring clothing");
        assert!(app.classes.iter().all(|c| c.filing_basis == "1(a)"));
        assert_eq!(app.fees_paid_count, Some(2));
    }

    #[test]
    fn test_ic_style_headers_and_intent_to_use_basis() {
        let app = parse_application_text("IC 009: Downloadable software\nIC 042: Hosting software").application;
        let classes: Vec<_> = app
            .classes
            .iter()
            .map(|c| (c.class_number, c.identification.as_str(), c.filing_basis.as_str()))
            .collect();
        assert_eq!(
            classes,
            vec![(9, "Downloadable software", "1(b)"), (42, "Hosting software", "1(b)")]
        );
    }

    #[test]
    fn test_goods_and_services_fallback() {
        let text = "Goods and Services: Downloadable software\nInternational Class 9";
        let app = parse_application_text(text).application;
        assert_eq!(app.classes.len(), 1);
        assert_eq!(app.classes[0].class_number, 9);
        assert_eq!(app.classes[0].identification, "Downloadable software");
    }

    #[test]
    fn test_field_pattern_tables_compile() {
        let fields = field_regexes();
        let tables = [
            (&fields.serial, SERIAL_PATTERNS),
            (&fields.registration, REGISTRATION_PATTERNS),
            (&fields.mark, MARK_PATTERNS),
            (&fields.owner, OWNER_PATTERNS),
            (&fields.entity, ENTITY_PATTERNS),
            (&fields.citizenship, CITIZENSHIP_PATTERNS),
            (&fields.goods, GOODS_PATTERNS),
        ];
        for (compiled, patterns) in tables {
            assert_eq!(compiled.len(), patterns.len());
            assert!(compiled.iter().all(|re| re.captures_len() == 2));
        }
    }

    #[test]
    fn test_serial_falls_back_to_sn_pattern() {
        let extracted = parse_application_text("SN: 90000001\nClass 9: Downloadable software");
        assert_eq!(extracted.application.application_serial, "90000001");
        assert_eq!(first_capture(&field_regexes().registration, "no number here"), "");
    }

    #[test]
    fn test_no_classes_found() {
        let extracted = parse_application_text("Nothing useful here");
        assert!(extracted.application.classes.is_empty());
        assert_eq!(extracted.application.fees_paid_count, Some(0));
        assert_eq!(extracted.application.applicant_name, "");
    }
}

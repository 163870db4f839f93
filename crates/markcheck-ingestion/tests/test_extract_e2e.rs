//! Raw page text → normalised text → application input.

use markcheck_ingestion::{normalize_text, parse_application_text};
use pretty_assertions::assert_eq;

const RAW_PAGES: &str = "United States Patent and Trademark Office\n\
Page 1 of 2\n\
Serial Number: 98765432\n\
Literal Element: Ledgerline\n\
Applicant: Ledgerline LLC\n\
Legal Entity: corporation\n\
Country of Organization: United States\n\
Class 9: Downloadable software for\n\
financial management and budgeting\n\
\n\
\n\
Page 2 of 2\n\
Class 42: Providing temporary use of\n\
online non-downloadable software for accounting\n";

#[test]
fn test_tsdr_style_pages() {
    let text = normalize_text(RAW_PAGES);
    let extracted = parse_application_text(&text);
    let app = &extracted.application;

    assert_eq!(app.application_serial, "98765432");
    assert_eq!(app.mark_text, "Ledgerline");
    assert_eq!(app.applicant_name, "Ledgerline LLC");
    assert_eq!(extracted.entity_type, "corporation");
    assert_eq!(extracted.citizenship, "United States");
    assert_eq!(extracted.registration_number, "");

    let classes: Vec<_> = app
        .classes
        .iter()
        .map(|c| (c.class_number, c.identification.as_str()))
        .collect();
    assert_eq!(
        classes,
        vec![
            (9, "Downloadable software for financial management and budgeting"),
            (42, "Providing temporary use of online non-downloadable software for accounting"),
        ]
    );
    assert!(app.classes.iter().all(|c| c.filing_basis == "1(b)"));
    assert_eq!(app.fees_paid_count, Some(2));
}

#[test]
fn test_extracted_json_flattens_application_fields() {
    let extracted = parse_application_text("Owner: Acme\nInternational Class 25: Shirts");
    let json = serde_json::to_value(&extracted).unwrap();

    assert_eq!(json["applicant_name"], "Acme");
    assert_eq!(json["classes"][0]["class_number"], 25);
    assert_eq!(json["registration_number"], "");
    assert_eq!(json["filing_type"], "TEAS_PLUS");
}

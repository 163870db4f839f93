//! Shared fixtures and finding queries for markcheck tests.

use markcheck_common::{ApplicationInput, Finding, Severity};
use serde_json::{json, Value};

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse a JSON literal into an input. Panics on malformed fixtures.
pub fn application(value: Value) -> ApplicationInput {
    serde_json::from_value(value).expect("fixture must deserialize into ApplicationInput")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// One correctly classified, fully documented software class.
pub fn single_class_software() -> ApplicationInput {
    application(json!({
        "applicant_name": "Ledgerline LLC",
        "mark_text": "LEDGERLINE",
        "filing_date": "2025-03-14",
        "filing_type": "TEAS_PLUS",
        "fees_paid_count": 1,
        "classes": [{
            "class_number": 9,
            "identification": "Downloadable software for financial management",
            "filing_basis": "1(a)",
            "fee_paid": true,
            "specimen_type": "screenshot",
            "specimen_description": "Screenshot of the app store download page showing the mark",
            "date_of_first_use": "2024-01-10",
            "date_of_first_use_commerce": "2024-02-01"
        }]
    }))
}

/// Software wording filed under the clothing class.
pub fn misclassified_software() -> ApplicationInput {
    application(json!({
        "applicant_name": "Stockroom Inc.",
        "mark_text": "STOCKROOM",
        "filing_date": "2025-05-02",
        "fees_paid_count": 1,
        "classes": [{
            "class_number": 25,
            "identification": "Software for inventory management",
            "filing_basis": "1(b)"
        }]
    }))
}

/// Three classes: one clean, one defective, one intent-to-use.
pub fn mixed_multi_class() -> ApplicationInput {
    application(json!({
        "applicant_name": "Northwind Outfitters",
        "mark_text": "NORTHWIND",
        "filing_date": "2025-06-20",
        "fees_paid_count": 3,
        "classes": [
            {
                "class_number": 25,
                "identification": "Shirts; hats; jackets",
                "filing_basis": "1(a)",
                "specimen_type": "photograph",
                "specimen_description": "Photograph of hang tags on shirts bearing the mark",
                "date_of_first_use": "2023-04-01",
                "date_of_first_use_commerce": "2023-05-01"
            },
            {
                "class_number": 9,
                "identification": "Miscellaneous goods (downloadable)",
                "filing_basis": "1(a)"
            },
            {
                "class_number": 35,
                "identification": "Online retail store services featuring clothing",
                "filing_basis": "1(b)"
            }
        ]
    }))
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

pub fn in_section<'a>(findings: &'a [Finding], section: &str) -> Vec<&'a Finding> {
    findings.iter().filter(|f| f.section == section).collect()
}

pub fn has_finding(findings: &[Finding], section: &str, severity: Severity, class_number: i32) -> bool {
    findings
        .iter()
        .any(|f| f.section == section && f.severity == severity && f.class_number == class_number)
}

pub fn count(findings: &[Finding], severity: Severity) -> usize {
    findings.iter().filter(|f| f.severity == severity).count()
}

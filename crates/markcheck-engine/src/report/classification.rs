//! Pillar 1 classification report.

use std::collections::HashSet;

use chrono::NaiveDate;

use markcheck_common::{Finding, Severity, SeverityCounts};
use markcheck_nice::get_class_info;

use super::{rule, symbol, LINE_WIDTH};
use crate::model::{ClassEntry, TrademarkApplication};
use crate::text::condense;

/// Sections whose findings carry cross-class legal weight.
const CRITICAL_SECTIONS: [&str; 6] =
    ["§1401.07", "§1401.08", "§1401.11", "§1401.13", "§1401.14", "§1401.15"];

const MAX_LISTED_ERRORS: usize = 6;

fn section_label(section: &str) -> &str {
    match section {
        "§1401.01" => "Filing Authority",
        "§1401.02" => "Classification System",
        "§1401.03" => "Class Designation",
        "§1401.04" => "Filing Fees",
        "§1401.05" => "Classification Basis",
        "§1401.06" => "Specimen — Class Alignment",
        "§1401.07" => "Specimen — Reclassification",
        "§1401.08" => "Class / Identification Alignment",
        "§1401.09" => "Nice Edition Compliance",
        "§1401.10" => "ID Manual Currency",
        "§1401.11" => "Class 42 Restructuring (8th Ed.)",
        "§1401.12" => "9th Edition Changes",
        "§1401.13" => "10th Edition Changes",
        "§1401.14" => "11th Edition Changes",
        "§1401.15" => "12th Edition (Current)",
        other => other,
    }
}

fn class_prefix(class_number: i32, sep: &str) -> String {
    if class_number > 0 {
        format!("Class {class_number}{sep}")
    } else {
        String::new()
    }
}

/// Render the full Pillar 1 report. `prepared` is printed in the header.
pub fn render(
    app: &TrademarkApplication,
    findings: &[Finding],
    summary: &SeverityCounts,
    prepared: NaiveDate,
) -> String {
    let mut sorted_classes: Vec<&ClassEntry> = app.classes.iter().collect();
    sorted_classes.sort_by_key(|c| c.class_number);

    let blocks = [
        header(prepared),
        application_summary(app, &sorted_classes),
        overall_status(summary),
        key_findings(findings),
        classwise_evaluation(&sorted_classes, findings),
        critical_observations(findings),
        final_recommendation(findings),
        footer(),
    ];
    blocks
        .into_iter()
        .filter(|b| !b.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn header(prepared: NaiveDate) -> String {
    let line = rule();
    format!(
        "\n{line}\n  TRADEMARK CLASSIFICATION ASSESSMENT\n  TMEP Chapter 1400  |  November 2025 \
         Edition\n  Prepared: {}\n{line}",
        prepared.format("%B %d, %Y")
    )
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "—"
    } else {
        s
    }
}

fn application_summary(app: &TrademarkApplication, classes: &[&ClassEntry]) -> String {
    let classes_str = classes
        .iter()
        .map(|c| {
            let title = get_class_info(c.class_number).map(|i| i.title).unwrap_or("?");
            format!("Class {} ({title})", c.class_number)
        })
        .collect::<Vec<_>>()
        .join("  ");
    let serial: &str = if app.application_serial.is_empty() {
        "Not yet assigned"
    } else {
        &app.application_serial
    };

    let mut lines = vec![
        "\nAPPLICATION SUMMARY".to_string(),
        format!("  Applicant        :  {}", or_dash(&app.applicant_name)),
        format!("  Mark             :  {}", or_dash(&app.mark_text)),
        format!("  Serial Number    :  {serial}"),
        format!("  Filing Date      :  {}", or_dash(&app.filing_date)),
        format!("  Filing Type      :  {}", app.filing_type),
        format!("  Classes Filed    :  {classes_str}"),
    ];

    let required = app.distinct_classes().len();
    let paid = app.fees_paid_count as usize;
    if paid > 0 && paid != required {
        lines.push(format!(
            "  Fees             :  {paid} paid / {required} required  ⚠ MISMATCH"
        ));
    }
    lines.join("\n")
}

fn overall_status(summary: &SeverityCounts) -> String {
    let (verdict, note) = if summary.errors > 0 {
        (
            "REQUIRES CORRECTION",
            format!(
                "{} mandatory issue(s) must be resolved before registration can proceed.",
                summary.errors
            ),
        )
    } else if summary.warnings > 0 {
        (
            "REVIEW RECOMMENDED",
            format!(
                "{} advisory issue(s) identified. Address before submission.",
                summary.warnings
            ),
        )
    } else {
        (
            "COMPLIANT",
            "No classification errors detected. Application may proceed.".to_string(),
        )
    };
    format!("\nOVERALL STATUS\n  {verdict}\n  {note}")
}

fn key_findings(findings: &[Finding]) -> String {
    let actionable: Vec<&Finding> = findings.iter().filter(|f| f.severity.is_actionable()).collect();
    if actionable.is_empty() {
        return "\nKEY FINDINGS\n  No issues requiring action.".to_string();
    }

    let mut lines = vec!["\nKEY FINDINGS".to_string()];
    let mut seen = HashSet::new();
    for f in actionable {
        if !seen.insert((f.section.as_str(), f.severity, f.class_number)) {
            continue;
        }
        lines.push(format!(
            "  {} [{}]  {}{}",
            symbol(f.severity),
            section_label(&f.section),
            class_prefix(f.class_number, " — "),
            condense(&f.message, LINE_WIDTH)
        ));
        lines.push(format!("      → {}", condense(&f.recommendation, LINE_WIDTH)));
    }
    lines.join("\n")
}

fn classwise_evaluation(classes: &[&ClassEntry], findings: &[Finding]) -> String {
    let mut lines = vec!["\nCLASS-WISE EVALUATION".to_string()];

    for entry in classes {
        let info = get_class_info(entry.class_number);
        let title = info.map(|i| i.title).unwrap_or("Unknown");
        let category = info.map(|i| i.category.as_str()).unwrap_or("?");

        let own: Vec<&Finding> = findings
            .iter()
            .filter(|f| f.class_number == entry.class_number)
            .collect();
        let counts = SeverityCounts::from_findings(own.iter().copied());
        let status = if counts.errors > 0 {
            format!("■ ERRORS ({})", counts.errors)
        } else if counts.warnings > 0 {
            format!("▲ WARNINGS ({})", counts.warnings)
        } else {
            "✓ Clear".to_string()
        };

        lines.push(format!(
            "\n  Class {}  {title}  [{category}]  —  {status}",
            entry.class_number
        ));
        lines.push(format!("  Identification: {}", condense(&entry.identification, 100)));
        let specimen: &str = if entry.specimen_type.is_empty() {
            "Not provided"
        } else {
            &entry.specimen_type
        };
        lines.push(format!("  Specimen:  {specimen}   |  Basis: {}", entry.filing_basis));

        // Worst actionable finding only; ties keep emission order.
        let top = own
            .iter()
            .filter(|f| f.severity.is_actionable())
            .min_by_key(|f| f.severity);
        if let Some(top) = top {
            lines.push(format!("  Issue:  {}", condense(&top.message, LINE_WIDTH)));
        }
    }
    lines.join("\n")
}

fn critical_observations(findings: &[Finding]) -> String {
    let notable = findings.iter().filter(|f| {
        f.severity != Severity::Ok && CRITICAL_SECTIONS.contains(&f.section.as_str())
    });

    let mut lines = Vec::new();
    let mut seen = HashSet::new();
    for f in notable {
        let short = condense(&f.message, 120);
        if seen.contains(&short) {
            continue;
        }
        lines.push(format!("  [{}]  {short}", section_label(&f.section)));
        seen.insert(short);
    }

    if lines.is_empty() {
        return String::new();
    }
    lines.insert(0, "\nCRITICAL OBSERVATIONS".to_string());
    lines.join("\n")
}

fn final_recommendation(findings: &[Finding]) -> String {
    let errors: Vec<&Finding> = findings.iter().filter(|f| f.severity == Severity::Error).collect();
    let warnings = findings.iter().filter(|f| f.severity == Severity::Warning).count();

    let mut lines = vec!["\nFINAL RECOMMENDATION".to_string()];
    if errors.is_empty() && warnings == 0 {
        lines.push(
            "  The application meets classification requirements under TMEP §1401.\n  Proceed to \
             examination. No corrective action required at this stage."
                .to_string(),
        );
        return lines.join("\n");
    }

    if !errors.is_empty() {
        lines.push("  The following corrections are mandatory before this application".to_string());
        lines.push("  can proceed to registration:\n".to_string());
        for (i, e) in errors.iter().take(MAX_LISTED_ERRORS).enumerate() {
            lines.push(format!(
                "  {}. [{}]  {}{}",
                i + 1,
                section_label(&e.section),
                class_prefix(e.class_number, ": "),
                condense(&e.recommendation, 100)
            ));
        }
        if errors.len() > MAX_LISTED_ERRORS {
            lines.push(format!(
                "     ... and {} additional error(s) — see Key Findings.",
                errors.len() - MAX_LISTED_ERRORS
            ));
        }
    }

    if warnings > 0 {
        lines.push(format!(
            "\n  {warnings} advisory item(s) should be reviewed prior to submission. These do not \
             block registration but may cause delays."
        ));
    }
    lines.join("\n")
}

fn footer() -> String {
    let line = rule();
    format!(
        "\n{line}\n  This assessment is generated under TMEP November 2025 Edition.\n  It does not \
         constitute legal advice. Consult a trademark attorney\n  for representation before the \
         USPTO.\n  Reference: https://tmep.uspto.gov  |  https://idm.uspto.gov\n{line}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use markcheck_common::{ApplicationInput, Pillar};
    use serde_json::json;

    fn app(value: serde_json::Value) -> TrademarkApplication {
        let input: ApplicationInput = serde_json::from_value(value).unwrap();
        TrademarkApplication::from_input(&input)
    }

    fn finding(section: &str, severity: Severity, class_number: i32, message: &str) -> Finding {
        Finding::new(Pillar::Classification, section, severity, class_number, "item", message, "Fix it.")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    #[test]
    fn test_compliant_report() {
        let app = app(json!({"applicant_name": "Acme", "classes": [{"class_number": 25, "identification": "Shirts"}]}));
        let findings = vec![finding("§1401.02", Severity::Ok, 0, "fine")];
        let report = render(&app, &findings, &SeverityCounts::from_findings(&findings), date());
        assert!(report.contains("Prepared: November 03, 2025"));
        assert!(report.contains("  COMPLIANT\n"));
        assert!(report.contains("No issues requiring action."));
        assert!(report.contains("Class 25 (Clothing and Footwear)"));
        assert!(!report.contains("CRITICAL OBSERVATIONS"));
        assert!(!report.contains("MISMATCH"));
    }

    #[test]
    fn test_key_findings_deduplicate_by_section_severity_class() {
        let app = app(json!({"classes": [{"class_number": 9}]}));
        let findings = vec![
            finding("§1401.03", Severity::Error, 9, "first"),
            finding("§1401.03", Severity::Error, 9, "second"),
            finding("§1401.03", Severity::Warning, 9, "third"),
        ];
        let report = render(&app, &findings, &SeverityCounts::from_findings(&findings), date());
        assert!(report.contains("REQUIRES CORRECTION"));
        assert!(report.contains("■ [Class Designation]  Class 9 — first"));
        assert!(!report.contains("Class 9 — second"));
        assert!(report.contains("▲ [Class Designation]  Class 9 — third"));
        assert!(report.contains("■ ERRORS (2)"));
        assert!(report.contains("  Issue:  first"));
    }

    #[test]
    fn test_fee_mismatch_and_error_cap() {
        let app = app(json!({
            "fees_paid_count": 1,
            "classes": [{"class_number": 9}, {"class_number": 25}]
        }));
        let findings: Vec<Finding> = (0..8)
            .map(|i| finding("§1401.04", Severity::Error, 0, &format!("error {i}")))
            .collect();
        let report = render(&app, &findings, &SeverityCounts::from_findings(&findings), date());
        assert!(report.contains("1 paid / 2 required  ⚠ MISMATCH"));
        assert!(report.contains("  6. [Filing Fees]  Fix it."));
        assert!(!report.contains("  7. "));
        assert!(report.contains("... and 2 additional error(s)"));
    }

    #[test]
    fn test_critical_observations_skip_duplicates() {
        let app = app(json!({"classes": [{"class_number": 42}]}));
        let findings = vec![
            finding("§1401.11", Severity::Info, 42, "Class 42 was split"),
            finding("§1401.11", Severity::Info, 0, "Class 42 was split"),
            finding("§1401.02", Severity::Info, 0, "ignored section"),
        ];
        let report = render(&app, &findings, &SeverityCounts::from_findings(&findings), date());
        assert_eq!(report.matches("[Class 42 Restructuring (8th Ed.)]").count(), 1);
        assert!(!report.contains("ignored section"));
    }
}

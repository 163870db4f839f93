//! Pillar 2 identification review block.

use super::{rule, symbol, LINE_WIDTH};
use crate::identification::IdentificationAnalysis;
use crate::text::condense;

pub fn render(analysis: &IdentificationAnalysis) -> String {
    let subject = if analysis.class_number > 0 {
        format!("Class {}", analysis.class_number)
    } else {
        "Identification".to_string()
    };
    let status = if analysis.is_definite {
        "DEFINITE"
    } else {
        "NOT DEFINITE — REQUIRES AMENDMENT"
    };

    let mut lines = vec![
        rule(),
        format!("  IDENTIFICATION REVIEW  |  {subject}  |  §1402"),
        format!("  Status: {status}"),
    ];

    let issues: Vec<_> = analysis.errors().chain(analysis.warnings()).collect();
    if issues.is_empty() {
        lines.push("\n  No identification issues detected.".to_string());
    } else {
        lines.push("\n  Issues Identified:".to_string());
        for f in issues {
            lines.push(format!(
                "  {} [{}]  {}",
                symbol(f.severity),
                f.section,
                condense(&f.message, LINE_WIDTH)
            ));
            lines.push(format!("      → {}", condense(&f.recommendation, LINE_WIDTH)));
        }
    }

    // Only surface the context note when Pillar 1 flagged something about this class.
    let note = &analysis.context_note;
    if note.contains("ERROR") || note.contains('⚠') {
        lines.push(format!("\n  Note:  {}", condense(note, 120)));
    }

    lines.push(rule());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use markcheck_common::{Finding, Pillar, Severity, SeverityCounts};

    fn analysis(findings: Vec<Finding>, note: &str) -> IdentificationAnalysis {
        let summary = SeverityCounts::from_findings(&findings);
        IdentificationAnalysis {
            class_number: 9,
            verbatim_text: "Software".into(),
            is_definite: !summary.has_errors(),
            identified_goods_services: vec!["Software".into()],
            purpose_detected: false,
            vague_terms_found: Vec::new(),
            structural_issues: Vec::new(),
            reasoning: String::new(),
            findings,
            context_note: note.into(),
            summary,
        }
    }

    fn finding(section: &str, severity: Severity, message: &str) -> Finding {
        Finding::new(Pillar::Identification, section, severity, 9, "item", message, "Amend.")
    }

    #[test]
    fn test_definite_identification_block() {
        let report = render(&analysis(
            vec![finding("§1402.01", Severity::Ok, "fine")],
            "No Pillar 1 context — standalone assessment only.",
        ));
        assert!(report.contains("IDENTIFICATION REVIEW  |  Class 9  |  §1402"));
        assert!(report.contains("Status: DEFINITE"));
        assert!(report.contains("No identification issues detected."));
        assert!(!report.contains("Note:"));
    }

    #[test]
    fn test_errors_listed_before_warnings() {
        let report = render(&analysis(
            vec![
                finding("§1402.03", Severity::Warning, "vague wording"),
                finding("§1402.01", Severity::Error, "no purpose stated"),
            ],
            "⚠ Pillar 1 flagged this class.",
        ));
        assert!(report.contains("NOT DEFINITE — REQUIRES AMENDMENT"));
        let error_at = report.find("■ [§1402.01]  no purpose stated").unwrap();
        let warning_at = report.find("▲ [§1402.03]  vague wording").unwrap();
        assert!(error_at < warning_at);
        assert!(report.contains("Note:  ⚠ Pillar 1 flagged this class."));
    }
}

//! Closing block printed after all three pillar reports.

use super::rule;
use crate::multiclass::class_list;
use crate::pipeline::CombinedSummary;

pub fn render(summary: &CombinedSummary) -> String {
    let status = if summary.overall_compliant {
        "COMPLIANT"
    } else {
        "REQUIRES CORRECTION"
    };
    let mut lines = vec![
        rule(),
        "  ASSESSMENT CONCLUSION".to_string(),
        format!("  Overall Status:  {status}"),
    ];

    if summary.total_errors > 0 {
        lines.push(format!(
            "  {} mandatory error(s) must be resolved before registration.",
            summary.total_errors
        ));
    }
    if summary.total_warnings > 0 {
        lines.push(format!(
            "  {} advisory item(s) recommended for review.",
            summary.total_warnings
        ));
    }
    if summary.total_errors == 0 && summary.total_warnings == 0 {
        lines.push("  No issues detected across all three assessment pillars.".to_string());
    }

    if !summary.partial_refusal_classes.is_empty() {
        lines.push(format!(
            "\n  Partial Refusal Indicated:  {}",
            class_list(&summary.partial_refusal_classes)
        ));
    }
    if summary.division_recommended {
        lines.push(format!(
            "  Division Recommended:  {}",
            class_list(&summary.division_eligible_classes)
        ));
    }

    lines.push(rule());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_conclusion() {
        let summary = CombinedSummary { overall_compliant: true, ..CombinedSummary::default() };
        let text = render(&summary);
        assert!(text.contains("Overall Status:  COMPLIANT"));
        assert!(text.contains("No issues detected across all three assessment pillars."));
        assert!(!text.contains("Partial Refusal"));
    }

    #[test]
    fn test_conclusion_with_refusal_and_division() {
        let summary = CombinedSummary {
            total_errors: 3,
            total_warnings: 1,
            partial_refusal_classes: vec![25],
            division_recommended: true,
            division_eligible_classes: vec![9, 42],
            ..CombinedSummary::default()
        };
        let text = render(&summary);
        assert!(text.contains("Overall Status:  REQUIRES CORRECTION"));
        assert!(text.contains("  3 mandatory error(s) must be resolved before registration."));
        assert!(text.contains("  1 advisory item(s) recommended for review."));
        assert!(text.contains("Partial Refusal Indicated:  Class 25"));
        assert!(text.contains("Division Recommended:  Class 9, Class 42"));
    }
}

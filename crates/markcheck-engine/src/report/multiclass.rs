//! Pillar 3 multi-class filing review block.

use std::collections::HashSet;

use markcheck_common::Finding;

use super::{rule, symbol, LINE_WIDTH};
use crate::multiclass::{class_list, MultiClassResult};
use crate::text::condense;

pub fn render(result: &MultiClassResult) -> String {
    let status = if result.is_multi_class_compliant {
        "COMPLIANT"
    } else {
        "NON-COMPLIANT — CORRECTIONS REQUIRED"
    };
    let mut lines = vec![
        rule(),
        "  MULTI-CLASS FILING REVIEW  |  §1403".to_string(),
        format!("  Status: {status}"),
    ];

    if !result.partial_refusal_classes.is_empty() {
        lines.push(format!(
            "\n  PARTIAL REFUSAL INDICATED:  {}",
            class_list(&result.partial_refusal_classes)
        ));
        for (n, reason) in &result.partial_refusal_reasons {
            lines.push(format!("    Class {n}: {}", condense(reason, 100)));
        }
    }

    if result.division_recommended {
        lines.push("\n  DIVISION RECOMMENDED".to_string());
        lines.push(format!(
            "  Classes eligible to proceed independently: {}",
            class_list(&result.division_eligible_classes)
        ));
    }

    let mut issues: Vec<&Finding> = result
        .findings
        .iter()
        .filter(|f| f.severity.is_actionable())
        .collect();
    issues.sort_by_key(|f| (f.severity, f.class_number));

    let mut seen = HashSet::new();
    issues.retain(|&f| seen.insert((f.section.as_str(), f.class_number, f.severity)));

    if issues.is_empty() {
        lines.push("\n  No multi-class filing issues detected.".to_string());
    } else {
        lines.push("\n  Filing Issues:".to_string());
        for f in issues {
            let class = if f.class_number > 0 {
                format!("Class {}: ", f.class_number)
            } else {
                String::new()
            };
            lines.push(format!(
                "  {} [{}]  {class}{}",
                symbol(f.severity),
                f.section,
                condense(&f.message, LINE_WIDTH)
            ));
            lines.push(format!("      → {}", condense(&f.recommendation, LINE_WIDTH)));
        }
    }

    lines.push(rule());
    lines.join("\n")
}

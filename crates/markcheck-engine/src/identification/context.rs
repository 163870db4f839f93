//! Per-class context handed from Pillar 1 to the identification lens.

use serde::Serialize;

use markcheck_common::{Category, Finding, Severity};
use markcheck_nice::get_class_info;

use crate::model::{ClassEntry, FilingBasis};
use crate::text::head;

/// What Pillar 1 established about one class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassContext {
    pub class_number: i32,
    /// Empty when the class number is outside 1–45.
    pub class_title: String,
    pub category: Option<Category>,
    pub filing_basis: FilingBasis,
    pub specimen_type: String,
    pub specimen_description: String,
    pub has_class_error: bool,
    pub has_class_warning: bool,
    /// First two Pillar 1 error messages, 80 chars each, `; `-joined.
    pub error_summary: String,
}

impl ClassContext {
    /// Context for one entry from the full Pillar 1 finding list.
    /// Application-level findings (class 0) count against every class.
    pub fn from_class(entry: &ClassEntry, p1_findings: &[Finding]) -> Self {
        let relevant = p1_findings
            .iter()
            .filter(|f| f.concerns_class(entry.class_number));

        let mut has_class_warning = false;
        let mut errors: Vec<&str> = Vec::new();
        for f in relevant {
            match f.severity {
                Severity::Error => errors.push(&f.message),
                Severity::Warning => has_class_warning = true,
                _ => {}
            }
        }

        let error_summary = errors
            .iter()
            .take(2)
            .map(|m| head(m, 80))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            has_class_error: !errors.is_empty(),
            has_class_warning,
            error_summary,
            ..Self::from_kb(
                entry.class_number,
                entry.filing_basis.clone(),
                &entry.specimen_type,
                &entry.specimen_description,
            )
        }
    }

    /// Context from the knowledge base alone, for standalone identification reviews.
    pub fn from_kb(
        class_number: i32,
        filing_basis: FilingBasis,
        specimen_type: &str,
        specimen_description: &str,
    ) -> Self {
        let info = get_class_info(class_number);
        Self {
            class_number,
            class_title: info.map(|c| c.title.to_string()).unwrap_or_default(),
            category: info.map(|c| c.category),
            filing_basis,
            specimen_type: specimen_type.to_string(),
            specimen_description: specimen_description.to_string(),
            has_class_error: false,
            has_class_warning: false,
            error_summary: String::new(),
        }
    }

    pub fn is_services(&self) -> bool {
        self.category == Some(Category::Services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markcheck_common::Pillar;
    use pretty_assertions::assert_eq;

    fn finding(severity: Severity, class_number: i32, message: &str) -> Finding {
        Finding::new(Pillar::Classification, "§1401.03", severity, class_number, "item", message, "")
    }

    fn entry(class_number: i32) -> ClassEntry {
        ClassEntry {
            class_number,
            identification: "Shirts".into(),
            specimen_type: "hang tag".into(),
            specimen_description: "Hang tag on a shirt".into(),
            fee_paid: true,
            filing_basis: FilingBasis::UseInCommerce,
            date_of_first_use: None,
            date_of_first_use_commerce: None,
        }
    }

    #[test]
    fn test_context_counts_own_and_application_findings() {
        let findings = vec![
            finding(Severity::Error, 9, "other class"),
            finding(Severity::Warning, 25, "own warning"),
            finding(Severity::Error, 0, "application-level error"),
        ];
        let ctx = ClassContext::from_class(&entry(25), &findings);
        assert!(ctx.has_class_error);
        assert!(ctx.has_class_warning);
        assert_eq!(ctx.error_summary, "application-level error");
        assert_eq!(ctx.class_title, "Clothing and Footwear");
        assert!(!ctx.is_services());
    }

    #[test]
    fn test_error_summary_keeps_two_truncated_messages() {
        let long = "x".repeat(120);
        let findings = vec![
            finding(Severity::Error, 25, &long),
            finding(Severity::Error, 25, "second"),
            finding(Severity::Error, 25, "third"),
        ];
        let ctx = ClassContext::from_class(&entry(25), &findings);
        assert_eq!(ctx.error_summary, format!("{}; second", "x".repeat(80)));
    }

    #[test]
    fn test_unknown_class_has_no_category() {
        let ctx = ClassContext::from_kb(99, FilingBasis::IntentToUse, "", "");
        assert_eq!(ctx.category, None);
        assert_eq!(ctx.class_title, "");
    }
}

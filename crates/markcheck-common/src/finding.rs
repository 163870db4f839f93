//! The single finding record every pillar emits, plus severity tallies.

use serde::{Deserialize, Serialize};

use crate::types::{Pillar, Severity};

/// One rule-evaluation result. Append-only: pillars create findings and never mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub pillar: Pillar,
    /// Regulation section tag, e.g. `§1401.04`.
    pub section: String,
    pub severity: Severity,
    /// Class the finding applies to; 0 means the whole application.
    pub class_number: i32,
    pub item: String,
    pub message: String,
    pub recommendation: String,
    /// Upstream check whose result caused this finding, e.g. `P1:§1401.04`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,
}

impl Finding {
    pub fn new(
        pillar: Pillar,
        section: impl Into<String>,
        severity: Severity,
        class_number: i32,
        item: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            pillar,
            section: section.into(),
            severity,
            class_number,
            item: item.into(),
            message: message.into(),
            recommendation: recommendation.into(),
            triggered_by: None,
        }
    }

    pub fn triggered_by(mut self, source: impl Into<String>) -> Self {
        self.triggered_by = Some(source.into());
        self
    }

    /// True for findings about `class_number` itself or about the whole application.
    pub fn concerns_class(&self, class_number: i32) -> bool {
        self.class_number == class_number || self.class_number == 0
    }
}

/// Severity tally over a finding list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub total:    usize,
    pub errors:   usize,
    pub warnings: usize,
    pub info:     usize,
    pub ok:       usize,
}

impl SeverityCounts {
    pub fn from_findings<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        let mut counts = Self::default();
        for f in findings {
            counts.total += 1;
            match f.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Info => counts.info += 1,
                Severity::Ok => counts.ok += 1,
            }
        }
        counts
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(severity: Severity, class_number: i32) -> Finding {
        Finding::new(Pillar::Classification, "§1401.02", severity, class_number, "item", "message", "")
    }

    #[test]
    fn test_counts_tally_each_severity() {
        let findings = vec![
            sample(Severity::Error, 9),
            sample(Severity::Error, 25),
            sample(Severity::Warning, 0),
            sample(Severity::Ok, 0),
        ];
        let counts = SeverityCounts::from_findings(&findings);
        assert_eq!(counts, SeverityCounts { total: 4, errors: 2, warnings: 1, info: 0, ok: 1 });
        assert!(counts.has_errors());
    }

    #[test]
    fn test_application_level_finding_concerns_every_class() {
        assert!(sample(Severity::Info, 0).concerns_class(42));
        assert!(!sample(Severity::Info, 9).concerns_class(42));
    }

    #[test]
    fn test_trigger_is_omitted_from_json_when_absent() {
        let json = serde_json::to_value(sample(Severity::Ok, 1)).unwrap();
        assert!(json.get("triggered_by").is_none());
        let tagged = sample(Severity::Ok, 1).triggered_by("P1:§1401.04");
        assert_eq!(tagged.triggered_by.as_deref(), Some("P1:§1401.04"));
    }
}

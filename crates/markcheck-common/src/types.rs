//! Closed enumerations shared by every pillar.

use serde::{Deserialize, Serialize};

/// Finding severity. Declaration order is the ranking: `Error` is worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Ok,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Ok => "OK",
        }
    }

    /// ERROR and WARNING call for applicant action; INFO and OK do not.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Severity::Error | Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nice classes 1–34 cover goods, 35–45 cover services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Goods,
    Services,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Goods => "GOODS",
            Category::Services => "SERVICES",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which assessment pass produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    /// TMEP §1401 — classification.
    Classification,
    /// TMEP §1402 — identification of goods and services.
    Identification,
    /// TMEP §1403 — multi-class applications.
    MultiClass,
}

impl Pillar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Classification => "classification",
            Pillar::Identification => "identification",
            Pillar::MultiClass => "multi_class",
        }
    }
}

/// Where the filing sits in its lifecycle. Supplied by the caller, never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStage {
    PreFiling,
    #[default]
    FiledPending,
    OfficeAction,
    StatementOfUse,
    Registered,
    PostRegistration,
}

impl ApplicationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStage::PreFiling => "PRE_FILING",
            ApplicationStage::FiledPending => "FILED_PENDING",
            ApplicationStage::OfficeAction => "OFFICE_ACTION",
            ApplicationStage::StatementOfUse => "STATEMENT_OF_USE",
            ApplicationStage::Registered => "REGISTERED",
            ApplicationStage::PostRegistration => "POST_REGISTRATION",
        }
    }

    pub fn is_pre_examination(&self) -> bool {
        matches!(self, ApplicationStage::PreFiling | ApplicationStage::FiledPending)
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, ApplicationStage::Registered | ApplicationStage::PostRegistration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ranking_puts_error_first() {
        let mut all = vec![Severity::Ok, Severity::Info, Severity::Error, Severity::Warning];
        all.sort();
        assert_eq!(all, vec![Severity::Error, Severity::Warning, Severity::Info, Severity::Ok]);
        assert!(Severity::Error < Severity::Ok);
    }

    #[test]
    fn test_severity_serializes_uppercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
    }

    #[test]
    fn test_stage_parses_screaming_snake_case() {
        let stage: ApplicationStage = serde_json::from_str("\"STATEMENT_OF_USE\"").unwrap();
        assert_eq!(stage, ApplicationStage::StatementOfUse);
        assert_eq!(ApplicationStage::default(), ApplicationStage::FiledPending);
        assert!(ApplicationStage::PostRegistration.is_registered());
    }
}

//! JSON-compatible application input. Every key is optional; missing keys take the documented defaults.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MarkcheckError, Result};
use crate::types::ApplicationStage;

/// One claimed class line as it arrives from JSON or the PDF extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInput {
    #[serde(default)]
    pub class_number: i32,
    #[serde(default)]
    pub identification: String,
    #[serde(default)]
    pub specimen_type: String,
    #[serde(default)]
    pub specimen_description: String,
    #[serde(default = "default_fee_paid")]
    pub fee_paid: bool,
    #[serde(default = "default_filing_basis")]
    pub filing_basis: String,
    #[serde(default)]
    pub date_of_first_use: Option<String>,
    #[serde(default)]
    pub date_of_first_use_commerce: Option<String>,
}

fn default_fee_paid()     -> bool { true }
fn default_filing_basis() -> String { "1(a)".to_string() }

impl Default for ClassInput {
    fn default() -> Self {
        Self {
            class_number: 0,
            identification: String::new(),
            specimen_type: String::new(),
            specimen_description: String::new(),
            fee_paid: default_fee_paid(),
            filing_basis: default_filing_basis(),
            date_of_first_use: None,
            date_of_first_use_commerce: None,
        }
    }
}

/// The whole filing, including the optional multi-class intents only Pillar 3 reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInput {
    #[serde(default)]
    pub applicant_name: String,
    #[serde(default)]
    pub mark_text: String,
    #[serde(default = "default_mark_type")]
    pub mark_type: String,
    /// `YYYY-MM-DD`; may be empty or malformed.
    #[serde(default)]
    pub filing_date: String,
    #[serde(default = "default_edition")]
    pub nice_edition_claimed: String,
    #[serde(default)]
    pub application_serial: String,
    #[serde(default = "default_filing_type")]
    pub filing_type: String,
    /// Missing means "one fee per distinct class".
    #[serde(default)]
    pub fees_paid_count: Option<u32>,
    #[serde(default)]
    pub total_fee_paid: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub classes: Vec<ClassInput>,

    #[serde(default)]
    pub application_stage: ApplicationStage,
    #[serde(default)]
    pub amendment_requested: bool,
    #[serde(default)]
    pub amendment_affects_classes: Vec<i32>,
    #[serde(default)]
    pub amendment_description: String,
    #[serde(default)]
    pub division_requested: bool,
    #[serde(default)]
    pub classes_to_divide_out: Vec<i32>,
    #[serde(default)]
    pub surrender_requested: bool,
    #[serde(default)]
    pub classes_to_surrender: Vec<i32>,
    #[serde(default)]
    pub post_filing_action_type: String,
}

fn default_mark_type()   -> String { "standard_character".to_string() }
fn default_edition()     -> String { "12th".to_string() }
fn default_filing_type() -> String { "TEAS_PLUS".to_string() }

impl Default for ApplicationInput {
    fn default() -> Self {
        Self {
            applicant_name: String::new(),
            mark_text: String::new(),
            mark_type: default_mark_type(),
            filing_date: String::new(),
            nice_edition_claimed: default_edition(),
            application_serial: String::new(),
            filing_type: default_filing_type(),
            fees_paid_count: None,
            total_fee_paid: 0.0,
            notes: String::new(),
            classes: Vec::new(),
            application_stage: ApplicationStage::default(),
            amendment_requested: false,
            amendment_affects_classes: Vec::new(),
            amendment_description: String::new(),
            division_requested: false,
            classes_to_divide_out: Vec::new(),
            surrender_requested: false,
            classes_to_surrender: Vec::new(),
            post_filing_action_type: String::new(),
        }
    }
}

impl ApplicationInput {
    pub fn from_json(json: &str) -> Result<Self> {
        let input: ApplicationInput = serde_json::from_str(json)?;
        Ok(input)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| {
            MarkcheckError::InvalidInput(format!("{}: {}", path.display(), e))
        })
    }

    /// Sorted distinct class numbers.
    pub fn distinct_classes(&self) -> BTreeSet<i32> {
        self.classes.iter().map(|c| c.class_number).collect()
    }

    /// Declared fee count, or one per distinct class when the key was absent.
    pub fn effective_fees_paid(&self) -> u32 {
        self.fees_paid_count
            .unwrap_or(self.distinct_classes().len() as u32)
    }
}

//! Application-level facts that only the multi-class checks need.

use serde::Serialize;

use markcheck_common::{ApplicationInput, ApplicationStage};

use crate::model::FilingType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiClassContext {
    pub applicant_name: String,
    pub mark_text: String,
    pub filing_date: String,
    pub filing_type: FilingType,
    pub fees_paid_count: u32,
    pub total_fee_paid: f64,
    pub application_stage: ApplicationStage,

    pub amendment_requested: bool,
    /// Empty means the amendment touches every class.
    pub amendment_affects_classes: Vec<i32>,
    pub amendment_description: String,

    pub division_requested: bool,
    pub classes_to_divide_out: Vec<i32>,

    pub surrender_requested: bool,
    pub classes_to_surrender: Vec<i32>,
    /// `amendment`, `response`, `surrender`, `sou` or empty.
    pub post_filing_action_type: String,
}

impl Default for MultiClassContext {
    fn default() -> Self {
        Self {
            applicant_name: String::new(),
            mark_text: String::new(),
            filing_date: String::new(),
            filing_type: FilingType::TeasPlus,
            fees_paid_count: 0,
            total_fee_paid: 0.0,
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

impl MultiClassContext {
    pub fn from_input(input: &ApplicationInput) -> Self {
        Self {
            applicant_name: input.applicant_name.clone(),
            mark_text: input.mark_text.clone(),
            filing_date: input.filing_date.clone(),
            filing_type: FilingType::parse(&input.filing_type),
            fees_paid_count: input.effective_fees_paid(),
            total_fee_paid: input.total_fee_paid,
            application_stage: input.application_stage,
            amendment_requested: input.amendment_requested,
            amendment_affects_classes: input.amendment_affects_classes.clone(),
            amendment_description: input.amendment_description.clone(),
            division_requested: input.division_requested,
            classes_to_divide_out: input.classes_to_divide_out.clone(),
            surrender_requested: input.surrender_requested,
            classes_to_surrender: input.classes_to_surrender.clone(),
            post_filing_action_type: input.post_filing_action_type.trim().to_lowercase(),
        }
    }

    pub(super) fn fee_per_class(&self) -> u32 {
        self.filing_type.fee_per_class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_input_defaults_fee_count_to_distinct_classes() {
        let input: ApplicationInput = serde_json::from_value(json!({
            "filing_type": "PAPER",
            "application_stage": "REGISTERED",
            "post_filing_action_type": " Amendment ",
            "classes": [{"class_number": 9}, {"class_number": 9}, {"class_number": 42}]
        }))
        .unwrap();
        let ctx = MultiClassContext::from_input(&input);
        assert_eq!(ctx.fees_paid_count, 2);
        assert_eq!(ctx.fee_per_class(), 750);
        assert_eq!(ctx.application_stage, ApplicationStage::Registered);
        assert_eq!(ctx.post_filing_action_type, "amendment");
    }
}

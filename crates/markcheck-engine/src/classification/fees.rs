//! §1401.04 — classification determines the number of fees.

use markcheck_common::Severity;

use super::ClassificationAssessor;
use crate::text::join_classes;

impl ClassificationAssessor<'_> {
    pub(super) fn check_fees(&mut self) {
        const SECTION: &str = "§1401.04";
        let app = self.app;

        let claimed: Vec<i32> = app.classes.iter().map(|c| c.class_number).collect();
        let distinct: Vec<i32> = app.distinct_classes().into_iter().collect();
        let num_distinct = distinct.len() as u32;
        let fees_paid = app.fees_paid_count;
        let filing_type = app.filing_type.as_str();
        let fee = app.filing_type.fee_per_class();
        let class_list = join_classes(&distinct);

        if claimed.len() != distinct.len() {
            let duplicates: Vec<i32> = distinct
                .iter()
                .copied()
                .filter(|c| claimed.iter().filter(|x| *x == c).count() > 1)
                .collect();
            let dup_list = format!("[{}]", join_classes(&duplicates));
            self.push(
                SECTION,
                Severity::Warning,
                0,
                format!("Duplicate class entries: {dup_list}"),
                format!(
                    "Class(es) {dup_list} appear more than once in the application. \
                     Each class should appear once with a consolidated identification."
                ),
                "Consolidate all goods/services for each class into a single class entry. \
                 Duplicate class entries may cause processing issues.",
            );
        }

        if fees_paid == 0 {
            self.push(
                SECTION,
                Severity::Info,
                0,
                "Fee Count Not Specified",
                "The number of fees paid was not specified in the application input. \
                 Cannot perform fee count verification.",
                format!(
                    "Verify that {num_distinct} fee(s) were submitted — one per class: \
                     Classes {class_list}. At {filing_type} rate: ${fee}/class = ${} total.",
                    num_distinct * fee
                ),
            );
        } else if fees_paid < num_distinct {
            let shortage = num_distinct - fees_paid;
            self.push(
                SECTION,
                Severity::Error,
                0,
                format!("Fee Shortage: {fees_paid} fees paid, {num_distinct} classes claimed"),
                format!(
                    "UNDERPAYMENT DETECTED: Application claims {num_distinct} class(es) ({class_list}) \
                     but only {fees_paid} fee(s) were submitted. Shortfall: {shortage} fee(s) = \
                     ${} at {filing_type} rate.",
                    shortage * fee
                ),
                format!(
                    "Submit {shortage} additional fee(s) of ${fee} each (${} total) to cover all \
                     classes. Failure to pay per-class fees will result in the uncovered class(es) \
                     being deleted from the application.",
                    shortage * fee
                ),
            );
        } else if fees_paid > num_distinct {
            let excess = fees_paid - num_distinct;
            self.push(
                SECTION,
                Severity::Warning,
                0,
                format!("Fee Excess: {fees_paid} fees paid, {num_distinct} classes claimed"),
                format!(
                    "OVERPAYMENT: {fees_paid} fees paid but only {num_distinct} class(es) claimed. \
                     Excess: {excess} fee(s) = ${}.",
                    excess * fee
                ),
                "Request refund of overpaid fees or add additional classes to match the number \
                 of fees submitted.",
            );
        } else {
            self.push(
                SECTION,
                Severity::Ok,
                0,
                "Fee Verification",
                format!(
                    "Fee count CORRECT: {fees_paid} fee(s) paid for {num_distinct} class(es). \
                     Classes: {class_list}. Filing type: {filing_type} (${fee}/class). Total: ${}.",
                    fees_paid * fee
                ),
                "No action required.",
            );
        }

        for entry in app.classes.iter().filter(|c| !c.fee_paid) {
            self.push(
                SECTION,
                Severity::Error,
                entry.class_number,
                format!("Class {} — No fee", entry.class_number),
                format!(
                    "No filing fee has been paid for Class {}. Per §1401.04, each class requires \
                     a separate fee.",
                    entry.class_number
                ),
                format!("Submit ${fee} ({filing_type}) for Class {}.", entry.class_number),
            );
        }
    }
}

//! End-to-end scenarios through the three-pillar pipeline.
//!
//! ```bash
//! cargo test --package markcheck-engine --test test_pipeline_e2e
//! ```

use markcheck_common::{EngineConfig, Pillar2Config, Severity};
use markcheck_engine::{analyze_identification, run_full_pipeline};
use markcheck_nice::matcher::suggest_class_for_keyword;
use markcheck_test_utils::{
    application, count, has_finding, in_section, init_tracing, mixed_multi_class,
    misclassified_software, single_class_software,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_correct_software_class_passes_classification() {
    init_tracing();
    let result = run_full_pipeline(&single_class_software(), &EngineConfig::default());
    let p1 = &result.pillar1.findings;

    assert!(has_finding(p1, "§1401.02", Severity::Ok, 0));
    assert!(has_finding(p1, "§1401.04", Severity::Ok, 0));
    assert!(!in_section(p1, "§1401.03")
        .iter()
        .any(|f| f.severity == Severity::Error));
}

#[test]
fn test_single_class_short_circuits_pillar3() {
    let result = run_full_pipeline(&single_class_software(), &EngineConfig::default());
    let p3 = &result.pillar3;

    assert_eq!(p3.findings.len(), 1);
    assert_eq!(p3.findings[0].severity, Severity::Info);
    assert!(p3.division_eligible_classes.is_empty());
    assert!(p3.partial_refusal_classes.is_empty());
    assert!(!p3.division_recommended);
}

#[test]
fn test_software_in_clothing_class_is_misclassified() {
    let result = run_full_pipeline(&misclassified_software(), &EngineConfig::default());
    let designation: Vec<_> = in_section(&result.pillar1.findings, "§1401.03")
        .into_iter()
        .filter(|f| f.severity == Severity::Error && f.class_number == 25)
        .collect();

    assert!(!designation.is_empty());
    assert!(designation
        .iter()
        .any(|f| f.message.contains("MISCLASSIFICATION") && f.recommendation.contains("Class 9")));
    assert!(result.pillar1.report.contains("REQUIRES CORRECTION"));
    assert!(!result.summary.overall_compliant);
}

#[test]
fn test_intent_to_use_without_specimen_is_info() {
    let result = run_full_pipeline(&misclassified_software(), &EngineConfig::default());
    let specimen = in_section(&result.pillar1.findings, "§1401.06");

    assert_eq!(specimen.len(), 1);
    assert_eq!(specimen[0].severity, Severity::Info);
}

#[test]
fn test_invalid_class_number_gets_one_error_and_no_ok() {
    let input = application(json!({
        "fees_paid_count": 2,
        "classes": [
            {"class_number": 0, "identification": "Shirts"},
            {"class_number": 46, "identification": "Hats"}
        ]
    }));
    let result = run_full_pipeline(&input, &EngineConfig::default());
    let validity = in_section(&result.pillar1.findings, "§1401.02");

    for class in [0, 46] {
        let for_class: Vec<_> = validity.iter().filter(|f| f.class_number == class).collect();
        assert_eq!(for_class.len(), 1, "class {class}");
        assert_eq!(for_class[0].severity, Severity::Error);
    }
    assert!(!validity.iter().any(|f| f.severity == Severity::Ok));
}

#[test]
fn test_fee_count_against_distinct_classes() {
    let classes = json!([
        {"class_number": 9, "identification": "Downloadable software"},
        {"class_number": 25, "identification": "Shirts"}
    ]);
    let cases = [(2, Severity::Ok), (1, Severity::Error), (3, Severity::Warning)];

    for (paid, expected) in cases {
        let input = application(json!({"fees_paid_count": paid, "classes": classes.clone()}));
        let result = run_full_pipeline(&input, &EngineConfig::default());
        let fees: Vec<_> = in_section(&result.pillar1.findings, "§1401.04")
            .into_iter()
            .filter(|f| f.class_number == 0)
            .collect();
        assert_eq!(fees.len(), 1, "paid {paid}");
        assert_eq!(fees[0].severity, expected, "paid {paid}");
    }
}

#[test]
fn test_brackets_are_prohibited() {
    let analysis = analyze_identification(
        "Computer software (downloadable) for word processing",
        None,
        &Pillar2Config::default(),
    );
    assert!(has_finding(&analysis.findings, "§1402.12", Severity::Error, 0));
    assert!(!analysis.is_definite);
}

#[test]
fn test_severe_vague_term_flips_definiteness() {
    let config = Pillar2Config::default();
    let before = analyze_identification("Shirts; hats; jackets", None, &config);
    assert!(before.is_definite);

    let after = analyze_identification("Shirts; hats; jackets; miscellaneous goods", None, &config);
    assert!(!after.is_definite);
}

#[test]
fn test_suggestions_are_deterministic() {
    for term in ["software", "restaurant services", "shirts", "widgets"] {
        assert_eq!(suggest_class_for_keyword(term), suggest_class_for_keyword(term));
    }
}

#[test]
fn test_mixed_application_surfaces_partial_refusal() {
    let result = run_full_pipeline(&mixed_multi_class(), &EngineConfig::default());

    assert!(result.pillar3.partial_refusal_classes.contains(&9));
    assert!(result.pillar2[&9].findings.iter().any(|f| f.section == "§1402.12"));
    assert!(count(&result.pillar3.findings, Severity::Error) > 0);
    assert!(!result.summary.overall_compliant);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["summary"]["overall_compliant"], false);
    assert!(json["assessment_id"].is_string());
}

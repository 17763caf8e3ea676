//! Unit tests for the test case entity

use qag_domain::TestCase;

#[test]
fn test_deserializes_model_field_names() {
    let raw = r#"{
        "Test_ID": "TC-001",
        "Feature": "Discount",
        "Test_Scenario": "Apply SAVE15",
        "Expected_Result": "Total reduced by 15%",
        "Grounded_In": "spec.md"
    }"#;
    let case: TestCase = serde_json::from_str(raw).expect("valid test case");

    assert_eq!(case.test_id, "TC-001");
    assert_eq!(case.grounded_in, "spec.md");
}

#[test]
fn test_missing_fields_decode_as_empty() {
    let raw = r#"{"Test_ID": "TC-001", "Feature": "Discount"}"#;
    let case: TestCase = serde_json::from_str(raw).expect("partial test case");

    assert_eq!(case.test_id, "TC-001");
    assert_eq!(case.feature, "Discount");
    assert!(case.test_scenario.is_empty());
    assert!(case.grounded_in.is_empty());
}

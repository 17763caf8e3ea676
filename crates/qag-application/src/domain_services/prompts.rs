//! Prompt construction
//!
//! The system instructions constrain the model to supplied material: the
//! retrieved evidence for test cases, the page's selector inventory for
//! scripts.

use qag_domain::entities::{ElementInventory, TestCase};
use qag_domain::value_objects::RetrievedEvidence;
use std::fmt::Write;

/// System instruction for test case generation
pub const TEST_CASE_SYSTEM_PROMPT: &str = r#"You are an intelligent QA Agent. Your goal is to generate comprehensive test cases based STRICTLY on the provided context.

RULES:
1. Use ONLY the provided "Context" to generate test cases. Do not hallucinate features not mentioned.
2. Output must be a valid JSON array of objects. Do not add prose, explanations or markdown code fences.
3. Each object must have exactly these keys:
   - "Test_ID": (e.g., TC-001)
   - "Feature": (The feature being tested)
   - "Test_Scenario": (Action to perform)
   - "Expected_Result": (The documented outcome)
   - "Grounded_In": (The exact source name from the context where this rule is found)

If the context does not contain enough information to answer the query, return an empty JSON array []."#;

/// System instruction for Selenium script generation
pub const SCRIPT_SYSTEM_PROMPT: &str = r#"You are a Senior QA Automation Engineer specializing in Python and Selenium.
Your task is to convert a functional test case into a robust, executable Selenium script.

STRICT RULES:
1. Use ONLY the element ids, names and CSS classes listed in the ELEMENT INVENTORY. The raw HTML is provided for structure only.
2. Do NOT invent element IDs, names or selectors that do not exist in the inventory.
3. The script must be a standalone Python file including `import unittest` and `from selenium import webdriver`.
4. Use `webdriver.Chrome()` (headless mode optional but recommended).
5. Include assertions that match the "Expected Result" in the test case.
6. Return ONLY the Python code. No markdown formatting, no explanations outside the code."#;

/// Concatenate evidence into labelled context blocks
///
/// Each item becomes `--- SOURCE <n>: <source> ---` followed by its text,
/// numbered from 1 in retrieval order.
pub fn format_evidence_context(evidence: &[RetrievedEvidence]) -> String {
    let mut context = String::new();
    for (i, item) in evidence.iter().enumerate() {
        let _ = write!(
            context,
            "--- SOURCE {}: {} ---\n{}\n\n",
            i + 1,
            item.metadata.source,
            item.document
        );
    }
    context
}

/// User message for test case generation
pub fn build_test_case_prompt(query: &str, evidence: &[RetrievedEvidence]) -> String {
    format!(
        "Context:\n{}\nUser Query: \"{}\"\n\nGenerate the test cases in JSON format now:",
        format_evidence_context(evidence),
        query
    )
}

/// User message for script generation
///
/// The inventory is rendered as JSON so the model sees the exact attribute
/// values it may use.
pub fn build_script_prompt(
    test_case: &TestCase,
    inventory: &ElementInventory,
    markup: &str,
) -> serde_json::Result<String> {
    let inventory_json = serde_json::to_string_pretty(inventory)?;
    Ok(format!(
        "### ELEMENT INVENTORY:\n{inventory_json}\n\n\
         ### TARGET HTML:\n{markup}\n\n\
         ### TEST CASE TO AUTOMATE:\n\
         Test ID: {}\n\
         Feature: {}\n\
         Scenario: {}\n\
         Expected Result: {}\n\n\
         ### INSTRUCTION:\n\
         Write the Selenium script now.",
        test_case.test_id, test_case.feature, test_case.test_scenario, test_case.expected_result
    ))
}

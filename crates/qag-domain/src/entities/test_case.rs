//! Generated test case entity

use serde::{Deserialize, Serialize};

/// A structured test case produced from retrieved evidence
///
/// Field names on the wire follow the JSON shape the generative model is
/// instructed to emit (`Test_ID`, `Feature`, ...).
///
/// `grounded_in` is expected to name a `source` present in the evidence
/// supplied for generation. The generator does not enforce this; it can
/// only flag mismatches. Keys the model leaves out decode as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TestCase {
    /// Test identifier (e.g. `TC-001`)
    #[serde(rename = "Test_ID")]
    pub test_id: String,
    /// Feature under test
    #[serde(rename = "Feature")]
    pub feature: String,
    /// Action to perform
    #[serde(rename = "Test_Scenario")]
    pub test_scenario: String,
    /// Documented outcome
    #[serde(rename = "Expected_Result")]
    pub expected_result: String,
    /// Source document the rule was found in
    #[serde(rename = "Grounded_In")]
    pub grounded_in: String,
}

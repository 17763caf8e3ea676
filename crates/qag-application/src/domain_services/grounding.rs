//! Grounding validation for generated test cases

use qag_domain::entities::TestCase;
use qag_domain::value_objects::RetrievedEvidence;
use std::collections::HashSet;

/// `Test_ID`s whose `Grounded_In` is not a source of the supplied evidence
///
/// Sources are compared after trimming. Cases are only flagged; callers
/// decide what to do with them.
pub fn ungrounded_test_ids(test_cases: &[TestCase], evidence: &[RetrievedEvidence]) -> Vec<String> {
    let sources: HashSet<&str> = evidence
        .iter()
        .map(|item| item.metadata.source.trim())
        .collect();

    test_cases
        .iter()
        .filter(|case| !sources.contains(case.grounded_in.trim()))
        .map(|case| case.test_id.clone())
        .collect()
}

//! Generative Output Parser
//!
//! Model output is untrusted. The parser never fails: it either recovers a
//! test case array or hands back the raw text for diagnosis.
//!
//! 1. Strip fenced code-block markers.
//! 2. Find the first balanced `[...]` that decodes as test cases.
//! 3. A decoded array is returned as is, even when empty.
//! 4. Without an array, an explanation that the context was insufficient
//!    yields an empty sequence.
//! 5. Anything else is unparseable.

use qag_domain::entities::TestCase;
use regex::Regex;
use std::sync::LazyLock;

static FENCE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[A-Za-z0-9_+\-]*").expect("Invalid regex"));

const CONTEXT_TERMS: &[&str] = &[
    "context",
    "provided document",
    "provided information",
    "supplied information",
];

const LACK_TERMS: &[&str] = &[
    "insufficient",
    "not enough",
    "does not contain",
    "doesn't contain",
    "do not contain",
    "don't contain",
    "does not provide",
    "doesn't provide",
    "does not include",
    "doesn't include",
    "does not mention",
    "doesn't mention",
    "lack",
    "no information",
    "not sufficient",
    "missing",
];

/// Result of parsing one model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    /// Recovered test cases, possibly none
    TestCases(Vec<TestCase>),
    /// No usable array; carries the verbatim response
    Unparseable(String),
}

/// Parse a model response into test cases
///
/// # Example
///
/// ```
/// use qag_application::domain_services::{ParsedResponse, parse_test_cases};
///
/// let parsed = parse_test_cases("The context does not contain enough information.");
/// assert_eq!(parsed, ParsedResponse::TestCases(Vec::new()));
/// ```
pub fn parse_test_cases(raw: &str) -> ParsedResponse {
    let stripped = strip_code_fences(raw);

    if let Some(test_cases) = extract_first_test_case_array(&stripped) {
        return ParsedResponse::TestCases(test_cases);
    }

    if indicates_insufficient_context(&stripped) {
        return ParsedResponse::TestCases(Vec::new());
    }

    ParsedResponse::Unparseable(raw.to_string())
}

/// Remove every ```` ``` ```` marker (with optional language tag) and trim
pub fn strip_code_fences(text: &str) -> String {
    FENCE_MARKER.replace_all(text, "").trim().to_string()
}

/// Decode the first balanced array literal that holds test cases
///
/// Every `[` is tried as a candidate start, in order. A candidate whose
/// balanced span is not a test case array is skipped, so bracketed prose
/// before the payload does not hide it.
pub fn extract_first_test_case_array(text: &str) -> Option<Vec<TestCase>> {
    text.match_indices('[').find_map(|(start, _)| {
        let end = balanced_array_end(text, start)?;
        serde_json::from_str::<Vec<TestCase>>(&text[start..end]).ok()
    })
}

/// Byte offset just past the `]` closing the array opened at `start`
///
/// Brackets inside JSON string literals, including escaped quotes, do not
/// count toward nesting.
fn balanced_array_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset + ch.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// Heuristic: does the text explain that the context was insufficient?
///
/// True when a term meaning "context" co-occurs with a term meaning
/// "insufficient" or "lacking", case-insensitively. Kept separate from the
/// parse path so it can be tuned or replaced on its own.
pub fn indicates_insufficient_context(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CONTEXT_TERMS.iter().any(|term| lowered.contains(term))
        && LACK_TERMS.iter().any(|term| lowered.contains(term))
}

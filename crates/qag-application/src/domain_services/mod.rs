//! Domain Services
//!
//! Pure business rules used by the use cases. Nothing here performs I/O,
//! so every rule is unit-testable in isolation.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`response_parser`] | Recovers a test case array from unreliable model output |
//! | [`prompts`] | System instructions and user messages sent to the model |
//! | [`grounding`] | Flags test cases citing sources absent from the evidence |
//! | [`selectors`] | Finds selectors a script references that the page lacks |

pub mod grounding;
pub mod prompts;
pub mod response_parser;
pub mod selectors;

pub use grounding::ungrounded_test_ids;
pub use prompts::{
    SCRIPT_SYSTEM_PROMPT, TEST_CASE_SYSTEM_PROMPT, build_script_prompt, build_test_case_prompt,
    format_evidence_context,
};
pub use response_parser::{
    ParsedResponse, extract_first_test_case_array, indicates_insufficient_context,
    parse_test_cases, strip_code_fences,
};
pub use selectors::find_unknown_selectors;

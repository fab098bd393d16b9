//! Error types for the fallible edges of the crate: response parsing, test-case validation and
//! program execution. Comparing and rendering outputs never fails.

#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// JSON is malformed or does not match the expected record.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The test-case list is well-formed JSON but not a list of `[input, output]` pairs.
    #[error("invalid test cases: {0}")]
    InvalidTestCases(String),
    /// The external program runner could not execute a test case.
    #[error("execution failed for test case {test_case}: {message}")]
    Execution { test_case: u32, message: String },
}

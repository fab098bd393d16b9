//! # Verdicts
//!
//! Grades a program against an ordered list of test cases and produces the
//! [`GradingResponse`] the feedback panel consumes. Evaluation stops at the first failing
//! case, which is reported with its 1-based index.

use log::{debug, info};
use serde_json::Value;

use crate::error::DiffError;
use crate::normalize::{clean_output, is_correct};
use crate::response::{GradingResponse, RESULT_ERROR, RESULT_SUCCESS};
use crate::traits::runner::ProgramRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}

/// Parses a test-case list: a JSON array of `[input, output]` string pairs.
pub fn parse_test_cases(json: &str) -> Result<Vec<TestCase>, DiffError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(DiffError::InvalidTestCases(
            "test cases must be a JSON list".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Array(pair) => match pair.as_slice() {
                [Value::String(input), Value::String(output)] => Ok(TestCase {
                    input: input.clone(),
                    expected_output: output.clone(),
                }),
                _ => Err(DiffError::InvalidTestCases(format!(
                    "test case {} must be a pair of strings [input, output]",
                    index + 1
                ))),
            },
            _ => Err(DiffError::InvalidTestCases(format!(
                "test case {} is not a list",
                index + 1
            ))),
        })
        .collect()
}

/// Runs every case through `runner` and returns the response for the first failure, or a
/// success response carrying `score = 1.0` when all cases pass.
pub fn evaluate(
    cases: &[TestCase],
    runner: &mut dyn ProgramRunner,
) -> Result<GradingResponse, DiffError> {
    for (index, case) in cases.iter().enumerate() {
        let test_case = u32::try_from(index + 1).map_err(|_| {
            DiffError::InvalidTestCases(format!("too many test cases ({})", cases.len()))
        })?;
        let expected_output = clean_output(case.expected_output.as_bytes());
        let result = runner.run(&case.input).map_err(|e| match e {
            DiffError::Execution { .. } => e,
            other => DiffError::Execution {
                test_case,
                message: other.to_string(),
            },
        })?;
        let stdout = clean_output(&result.stdout);
        let stderr = clean_output(&result.stderr);

        if !is_correct(result.exit_code, &stdout, &expected_output) {
            info!(
                "test case {test_case} failed (exit code {})",
                result.exit_code
            );
            return Ok(GradingResponse {
                result: RESULT_ERROR.to_string(),
                exit_code: Some(result.exit_code),
                test_case: Some(test_case),
                input: Some(case.input.clone()),
                expected_output: Some(expected_output),
                student_output: Some(stdout),
                stderr: Some(stderr),
                ..Default::default()
            });
        }
        debug!("test case {test_case} passed");
    }

    Ok(GradingResponse {
        result: RESULT_SUCCESS.to_string(),
        message: Some(format!(
            "Your program passed all {} test cases!",
            cases.len()
        )),
        score: Some(1.0),
        ..Default::default()
    })
}

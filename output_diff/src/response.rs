//! # Response records
//!
//! JSON records returned by the grading endpoints. The grading endpoint answers a submission
//! with a [`GradingResponse`]; the free "run code" endpoint answers with a [`RunResponse`].
//! Absent and `null` fields both deserialize to `None`.

use serde::{Deserialize, Serialize};

use crate::error::DiffError;

pub const RESULT_SUCCESS: &str = "success";
pub const RESULT_ERROR: &str = "error";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradingResponse {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    /// 1-based index of the failing test case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_case: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl GradingResponse {
    pub fn from_json(json: &str) -> Result<Self, DiffError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, DiffError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_success(&self) -> bool {
        self.result == RESULT_SUCCESS
    }

    /// The program's output: `student_output`, or `stdout` when the former is absent.
    pub fn actual_output(&self) -> Option<&str> {
        self.student_output.as_deref().or(self.stdout.as_deref())
    }

    /// True when the program exited with code 0 and wrote nothing to stderr.
    pub fn ran_cleanly(&self) -> bool {
        self.exit_code == Some(0) && self.stderr.as_deref().is_none_or(str::is_empty)
    }

    pub fn is_full_score(&self) -> bool {
        self.score == Some(1.0)
    }
}

/// What a run-code request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Clean exit; carries standard output.
    Output(String),
    Failed { exit_code: Option<i32>, stderr: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResponse {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub exit_code: Option<i32>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
}

impl RunResponse {
    pub fn from_json(json: &str) -> Result<Self, DiffError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn outcome(&self) -> RunOutcome {
        let stderr = self.stderr.clone().unwrap_or_default();
        if self.exit_code == Some(0) && stderr.is_empty() {
            RunOutcome::Output(self.stdout.clone().unwrap_or_default())
        } else {
            RunOutcome::Failed {
                exit_code: self.exit_code,
                stderr,
            }
        }
    }
}

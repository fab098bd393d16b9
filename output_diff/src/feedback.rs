//! # Feedback Report
//!
//! Turns a [`GradingResponse`] into the report a student sees after submitting:
//! a success line, a failure section, or both.
//!
//! ## Overview
//!
//! - A success message is shown whenever `result == "success"`.
//! - A failure section is shown when the result is not a success, or when the response names
//!   a test case. A clean run (exit code 0, empty stderr) means the output was wrong, and the
//!   section carries the [`Divergence`] between expected and actual output. Anything else is a
//!   runtime error, reported with its exit code and stderr.
//! - A full score unlocks the model answer.
//!
//! Oversized streams are truncated before anything is compared or rendered.

use crate::differ::{Divergence, diff_outputs};
use crate::renderers::html::{HtmlRenderer, escape_html, replace_new_lines};
use crate::renderers::{RenderedDiff, render_divergence};
use crate::response::{GradingResponse, RunOutcome};
use crate::traits::renderer::MarkRenderer;
use crate::truncate::{MAX_OUTPUT_LEN, truncate_response_to};

#[derive(Debug, Clone, PartialEq)]
pub enum FailureKind {
    WrongOutput {
        expected: String,
        actual: Option<String>,
        divergence: Divergence,
    },
    RuntimeError {
        exit_code: Option<i32>,
        stderr: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestFailure {
    pub test_case: Option<u32>,
    pub input: String,
    pub kind: FailureKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackReport {
    pub success_message: Option<String>,
    pub failure: Option<TestFailure>,
    pub unlocks_model_answer: bool,
}

fn test_label(test_case: Option<u32>) -> String {
    test_case.map_or_else(|| "?".to_string(), |n| n.to_string())
}

fn exit_code_label(exit_code: Option<i32>) -> String {
    exit_code.map_or_else(|| "?".to_string(), |c| c.to_string())
}

impl FeedbackReport {
    pub fn from_response(response: GradingResponse) -> Self {
        Self::from_response_with_limit(response, MAX_OUTPUT_LEN)
    }

    /// Like [`FeedbackReport::from_response`], truncating streams to `limit` characters.
    pub fn from_response_with_limit(mut response: GradingResponse, limit: usize) -> Self {
        truncate_response_to(&mut response, limit);

        let success_message = response
            .is_success()
            .then(|| response.message.clone().unwrap_or_default());

        let failure = (!response.is_success() || response.test_case.is_some()).then(|| {
            let kind = if response.ran_cleanly() {
                let expected = response.expected_output.clone().unwrap_or_default();
                let actual = response.actual_output().map(str::to_string);
                let divergence = diff_outputs(&expected, actual.as_deref());
                FailureKind::WrongOutput {
                    expected,
                    actual,
                    divergence,
                }
            } else {
                FailureKind::RuntimeError {
                    exit_code: response.exit_code,
                    stderr: response.stderr.clone().unwrap_or_default(),
                }
            };
            TestFailure {
                test_case: response.test_case,
                input: response.input.clone().unwrap_or_default(),
                kind,
            }
        });

        FeedbackReport {
            success_message,
            failure,
            unlocks_model_answer: response.is_full_score(),
        }
    }

    /// Renders the report as the HTML fragment shown in the feedback panel.
    pub fn render_html(&self) -> String {
        let mut html = String::new();

        if let Some(message) = &self.success_message {
            html.push_str(r#"<i aria-hidden="true" class="fa fa-check" style="color:green"></i> "#);
            html.push_str(&escape_html(message));
        }

        let Some(failure) = &self.failure else {
            return html;
        };

        let (icon, title) = match failure.kind {
            FailureKind::WrongOutput { .. } => ("fa-times", "Wrong output in"),
            FailureKind::RuntimeError { .. } => ("fa-warning", "Error in"),
        };
        html.push_str(&format!(
            r#"<h3 class='feedback_title'><span aria-hidden="true" class="fa {icon}" style="color:darkred"></span> {title} <b>Test {}</b></h3>"#,
            test_label(failure.test_case)
        ));
        html.push_str(&format!(
            r#"<label for="submission_input">Input</label><pre class="code-runner-output" id="submission_input">{}</pre>"#,
            replace_new_lines(&escape_html(&failure.input))
        ));

        match &failure.kind {
            FailureKind::RuntimeError { exit_code, stderr } => {
                html.push_str(&render_error_html(*exit_code, stderr));
            }
            FailureKind::WrongOutput {
                expected,
                actual,
                divergence,
            } => {
                let (actual, expected) = match render_divergence(
                    expected,
                    actual.as_deref(),
                    divergence,
                    &HtmlRenderer,
                ) {
                    RenderedDiff::Pair { actual, expected } => (actual, expected),
                    RenderedDiff::NoOutput(label) => (escape_html(&label), escape_html(expected)),
                };
                html.push_str(&format!(
                    concat!(
                        "<div class='action error_window'>",
                        "<div style='margin-right: 10px'><label for=\"submission_student_output\">Your program's output (first difference in red)</label>",
                        "<pre class=\"code-runner-output\" id=\"submission_student_output\">{}</pre></div>",
                        "<div><label for=\"submission_expected_output\">Expected output</label>",
                        "<pre class=\"code-runner-output\" id=\"submission_expected_output\">{}</pre></div></div>"
                    ),
                    replace_new_lines(&actual),
                    replace_new_lines(&expected)
                ));
            }
        }

        html
    }

    /// Renders the report as plain lines, emphasising the divergence with `renderer`.
    pub fn render_text(&self, renderer: &dyn MarkRenderer) -> String {
        let mut lines = Vec::new();

        if let Some(message) = &self.success_message {
            lines.push(format!("PASSED: {message}"));
        }

        if let Some(failure) = &self.failure {
            let title = match failure.kind {
                FailureKind::WrongOutput { .. } => "Wrong output in test",
                FailureKind::RuntimeError { .. } => "Error in test",
            };
            lines.push(format!("FAILED: {title} {}", test_label(failure.test_case)));
            lines.push("Input:".to_string());
            lines.push(failure.input.clone());

            match &failure.kind {
                FailureKind::RuntimeError { exit_code, stderr } => {
                    lines.push(format!("Exit code: {}", exit_code_label(*exit_code)));
                    lines.push(stderr.clone());
                }
                FailureKind::WrongOutput {
                    expected,
                    actual,
                    divergence,
                } => match render_divergence(expected, actual.as_deref(), divergence, renderer) {
                    RenderedDiff::Pair { actual, expected } => {
                        lines.push("Your program's output (first difference highlighted):".to_string());
                        lines.push(actual);
                        lines.push("Expected output:".to_string());
                        lines.push(expected);
                    }
                    RenderedDiff::NoOutput(label) => {
                        lines.push(format!("Your program's output: {label}"));
                        lines.push("Expected output:".to_string());
                        lines.push(renderer.escape(expected));
                    }
                },
            }
        }

        lines.join("\n")
    }
}

/// The error block shown for a crashed or failing program.
pub fn render_error_html(exit_code: Option<i32>, stderr: &str) -> String {
    format!(
        r#"<div class='error_window'><label for="submission_program_error">Exit code: <b>{}</b></label><pre class="code-runner-output" id="submission_program_error">{}</pre></div>"#,
        exit_code_label(exit_code),
        replace_new_lines(&escape_html(stderr))
    )
}

/// Renders the result of a free "run code" request: the program's output, or an error block.
pub fn render_run_html(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Output(stdout) => replace_new_lines(&escape_html(stdout)),
        RunOutcome::Failed { exit_code, stderr } => render_error_html(*exit_code, stderr),
    }
}

pub fn render_run_text(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Output(stdout) => stdout.clone(),
        RunOutcome::Failed { exit_code, stderr } => {
            format!("RUNTIME ERROR (exit code {})\n{stderr}", exit_code_label(*exit_code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::Mark;
    use crate::renderers::plain::PlainRenderer;

    fn wrong_output_response() -> GradingResponse {
        GradingResponse {
            result: "error".to_string(),
            exit_code: Some(0),
            test_case: Some(3),
            input: Some("Menino".to_string()),
            expected_output: Some("Hello, Menino".to_string()),
            student_output: Some("Hello, Menina".to_string()),
            stderr: Some(String::new()),
            ..Default::default()
        }
    }

    #[test]
    fn test_success_only() {
        let report = FeedbackReport::from_response(GradingResponse {
            result: "success".to_string(),
            message: Some("Your program passed all 3 test cases!".to_string()),
            score: Some(1.0),
            ..Default::default()
        });
        assert_eq!(
            report.success_message.as_deref(),
            Some("Your program passed all 3 test cases!")
        );
        assert!(report.failure.is_none());
        assert!(report.unlocks_model_answer);
        assert_eq!(
            report.render_text(&PlainRenderer),
            "PASSED: Your program passed all 3 test cases!"
        );
    }

    #[test]
    fn test_wrong_output_carries_divergence() {
        let report = FeedbackReport::from_response(wrong_output_response());
        assert!(report.success_message.is_none());
        assert!(!report.unlocks_model_answer);
        let failure = report.failure.clone().unwrap();
        assert_eq!(failure.test_case, Some(3));
        assert_eq!(
            failure.kind,
            FailureKind::WrongOutput {
                expected: "Hello, Menino".to_string(),
                actual: Some("Hello, Menina".to_string()),
                divergence: Divergence::Diverged {
                    actual: Mark::Char(12),
                    expected: Mark::Char(12)
                },
            }
        );
        assert_eq!(
            report.render_text(&PlainRenderer),
            [
                "FAILED: Wrong output in test 3",
                "Input:",
                "Menino",
                "Your program's output (first difference highlighted):",
                "Hello, Menin>>a<<",
                "Expected output:",
                "Hello, Menin>>o<<",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_stdout_used_when_student_output_absent() {
        let mut response = wrong_output_response();
        response.student_output = None;
        response.stdout = Some("Hello, Menino".to_string());
        let report = FeedbackReport::from_response(response);
        match report.failure.unwrap().kind {
            FailureKind::WrongOutput { divergence, .. } => {
                assert_eq!(divergence, Divergence::Identical)
            }
            other => panic!("unexpected failure kind {other:?}"),
        }
    }

    #[test]
    fn test_missing_output_renders_label() {
        let mut response = wrong_output_response();
        response.student_output = None;
        let report = FeedbackReport::from_response(response);
        let text = report.render_text(&PlainRenderer);
        assert!(text.contains("Your program's output: (no output captured)"));
        assert!(text.ends_with("Expected output:\nHello, Menino"));
    }

    #[test]
    fn test_runtime_error() {
        let response = GradingResponse {
            result: "error".to_string(),
            exit_code: Some(1),
            test_case: Some(1),
            input: Some("x".to_string()),
            stderr: Some("main.cpp:3: error: expected ';'".to_string()),
            ..Default::default()
        };
        let report = FeedbackReport::from_response(response);
        assert_eq!(
            report.failure.as_ref().unwrap().kind,
            FailureKind::RuntimeError {
                exit_code: Some(1),
                stderr: "main.cpp:3: error: expected ';'".to_string()
            }
        );
        let html = report.render_html();
        assert!(html.contains("fa-warning"));
        assert!(html.contains("Error in <b>Test 1</b>"));
        assert!(html.contains("Exit code: <b>1</b>"));
        assert!(html.contains("expected &#39;;&#39;"));
    }

    #[test]
    fn test_html_wrong_output() {
        let html = FeedbackReport::from_response(wrong_output_response()).render_html();
        assert!(html.starts_with("<h3 class='feedback_title'>"));
        assert!(html.contains("Wrong output in <b>Test 3</b>"));
        assert!(html.contains(
            r#"Hello, Menin<span style="color:red;font-weight: bold">a</span>"#
        ));
        assert!(html.contains(
            r#"Hello, Menin<span style="color:red;font-weight: bold">o</span>"#
        ));
    }

    #[test]
    fn test_html_replaces_newlines_in_input() {
        let mut response = wrong_output_response();
        response.input = Some("a\nb".to_string());
        let html = FeedbackReport::from_response(response).render_html();
        assert!(html.contains(r#"id="submission_input">a<br>b</pre>"#));
    }

    #[test]
    fn test_streams_truncated_before_diffing() {
        let mut response = wrong_output_response();
        response.expected_output = Some("a".repeat(20));
        response.student_output = Some(format!("{}b", "a".repeat(10)));
        let report = FeedbackReport::from_response_with_limit(response, 10);
        match report.failure.unwrap().kind {
            FailureKind::WrongOutput {
                expected,
                actual,
                divergence,
            } => {
                assert_eq!(expected.len(), 10);
                assert_eq!(actual.as_deref().map(str::len), Some(10));
                assert_eq!(divergence, Divergence::Identical);
            }
            other => panic!("unexpected failure kind {other:?}"),
        }
    }

    #[test]
    fn test_success_with_test_case_shows_both() {
        let mut response = wrong_output_response();
        response.result = "success".to_string();
        response.message = Some("Run finished".to_string());
        let report = FeedbackReport::from_response(response);
        assert!(report.success_message.is_some());
        assert!(report.failure.is_some());
    }

    #[test]
    fn test_run_rendering() {
        assert_eq!(
            render_run_html(&RunOutcome::Output("1\n2".to_string())),
            "1<br>2"
        );
        let failed = RunOutcome::Failed {
            exit_code: Some(139),
            stderr: "Segmentation fault".to_string(),
        };
        assert!(render_run_html(&failed).contains("Exit code: <b>139</b>"));
        assert_eq!(
            render_run_text(&failed),
            "RUNTIME ERROR (exit code 139)\nSegmentation fault"
        );
    }
}

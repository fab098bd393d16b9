//! Caps displayed program output so a runaway program cannot flood the feedback panel.

use log::warn;

use crate::response::GradingResponse;

/// Longest text shown, in characters.
pub const MAX_OUTPUT_LEN: usize = 10_000;

/// Keeps the first [`MAX_OUTPUT_LEN`] characters of `text`.
pub fn truncate(text: &str) -> String {
    truncate_to(text, MAX_OUTPUT_LEN)
}

/// Keeps the first `limit` characters of `text`; shorter texts are returned unchanged.
pub fn truncate_to(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

fn truncate_field(field: &mut Option<String>, name: &str, limit: usize) {
    if let Some(text) = field.as_mut() {
        let truncated = truncate_to(text, limit);
        if truncated.len() != text.len() {
            warn!("truncating {name} to {limit} characters");
            *text = truncated;
        }
    }
}

/// Truncates `stderr`, `expected_output`, `student_output` and `stdout` independently,
/// each only when present.
pub fn truncate_response(response: &mut GradingResponse) {
    truncate_response_to(response, MAX_OUTPUT_LEN);
}

pub fn truncate_response_to(response: &mut GradingResponse, limit: usize) {
    truncate_field(&mut response.stderr, "stderr", limit);
    truncate_field(&mut response.expected_output, "expected_output", limit);
    truncate_field(&mut response.student_output, "student_output", limit);
    truncate_field(&mut response.stdout, "stdout", limit);
}

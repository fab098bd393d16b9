//! # Renderers
//!
//! Implementations of [`MarkRenderer`](crate::traits::renderer::MarkRenderer), plus
//! [`render_divergence`], which applies one of them to both sides of a comparison.
//!
//! The available renderers are:
//! - [`html`]: red bold `<span>` emphasis, HTML-escaped text.
//! - [`plain`]: `>>`/`<<` brackets, for logs and plain-text mail.
//! - [`terminal`]: red bold ANSI colour.

pub mod html;
pub mod plain;
pub mod terminal;

use crate::differ::Divergence;
use crate::traits::renderer::MarkRenderer;

/// Shown instead of a pair when no actual output was captured.
pub const NO_OUTPUT_LABEL: &str = "(no output captured)";

/// Both sides of a comparison, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedDiff {
    /// No actual output existed; carries [`NO_OUTPUT_LABEL`].
    NoOutput(String),
    Pair { actual: String, expected: String },
}

/// Applies `renderer` to both texts according to `divergence`.
///
/// Identical outputs come back unmarked (but escaped for the renderer's medium).
pub fn render_divergence(
    expected: &str,
    actual: Option<&str>,
    divergence: &Divergence,
    renderer: &dyn MarkRenderer,
) -> RenderedDiff {
    match (divergence, actual) {
        (Divergence::NoOutput, _) | (_, None) => RenderedDiff::NoOutput(NO_OUTPUT_LABEL.to_string()),
        (Divergence::Identical, Some(actual)) => RenderedDiff::Pair {
            actual: renderer.escape(actual),
            expected: renderer.escape(expected),
        },
        (
            Divergence::Diverged {
                actual: actual_mark,
                expected: expected_mark,
            },
            Some(actual),
        ) => RenderedDiff::Pair {
            actual: renderer.render(actual, actual_mark),
            expected: renderer.render(expected, expected_mark),
        },
    }
}

/// Diffs and renders in one step.
pub fn format_output_diff(
    expected: &str,
    actual: Option<&str>,
    renderer: &dyn MarkRenderer,
) -> RenderedDiff {
    let divergence = crate::differ::diff_outputs(expected, actual);
    render_divergence(expected, actual, &divergence, renderer)
}

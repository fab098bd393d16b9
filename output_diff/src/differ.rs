//! # Output Differ
//!
//! Locates the first point at which a program's output diverges from the expected output.
//!
//! Runs of `'\n'` and `' '` are skipped on both sides before each comparison, so the outputs
//! may distribute spaces and line breaks differently between tokens and still agree. Every
//! other character, tabs and carriage returns included, is significant.
//!
//! The differ only computes positions. Turning a [`Mark`] into something a person can see is
//! the job of a [`MarkRenderer`](crate::traits::renderer::MarkRenderer).

use log::debug;

/// Where a text is flagged as the first point of disagreement.
///
/// Indices count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// The single character at this index.
    Char(usize),
    /// Every character from this index to the end of the text.
    Tail(usize),
    /// The text ended too early; a marker goes after its last character.
    EndOfOutput,
}

/// Result of comparing an expected output with an actual one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divergence {
    /// No actual output was captured, so nothing was compared.
    NoOutput,
    /// The outputs agree once separator runs are skipped.
    Identical,
    /// The outputs disagree; each side carries the mark to display.
    Diverged { actual: Mark, expected: Mark },
}

impl Divergence {
    pub fn is_identical(&self) -> bool {
        matches!(self, Divergence::Identical)
    }

    pub fn is_diverged(&self) -> bool {
        matches!(self, Divergence::Diverged { .. })
    }
}

fn is_separator(c: char) -> bool {
    c == '\n' || c == ' '
}

fn skip_separators(text: &[char], mut at: usize) -> usize {
    while at < text.len() && is_separator(text[at]) {
        at += 1;
    }
    at
}

/// Compares `expected` against `actual` and returns the first divergence.
///
/// `actual == None` means the program produced no capturable output, which is different from
/// an empty output and short-circuits to [`Divergence::NoOutput`].
///
/// When `actual` runs out first, the whole unmatched suffix of `expected` is marked with
/// [`Mark::Tail`] and `actual` gets [`Mark::EndOfOutput`]. When `expected` runs out first,
/// the offending character of `actual` is marked and `expected` gets the end marker.
///
/// Separators are only skipped ahead of a comparison, so trailing separators are not ignored:
/// a run of them at the end of `actual` diverges with end markers, and a leftover run at the
/// end of `expected` is part of the marked tail.
pub fn diff_outputs(expected: &str, actual: Option<&str>) -> Divergence {
    let Some(actual) = actual else {
        return Divergence::NoOutput;
    };

    let expected: Vec<char> = expected.chars().collect();
    let actual: Vec<char> = actual.chars().collect();

    let mut i = 0;
    let mut j = 0;
    while j < actual.len() {
        i = skip_separators(&expected, i);
        j = skip_separators(&actual, j);

        // Trailing separators in `actual` leave nothing to compare against, which counts as
        // running out of output.
        if i >= expected.len() || j >= actual.len() || expected[i] != actual[j] {
            let actual_mark = if j >= actual.len() {
                Mark::EndOfOutput
            } else {
                Mark::Char(j)
            };
            let expected_mark = if i >= expected.len() {
                Mark::EndOfOutput
            } else {
                Mark::Char(i)
            };
            debug!("outputs diverge at actual {actual_mark:?} / expected {expected_mark:?}");
            return Divergence::Diverged {
                actual: actual_mark,
                expected: expected_mark,
            };
        }

        i += 1;
        j += 1;
    }

    if i < expected.len() {
        debug!("actual output ended early; expected continues from {i}");
        return Divergence::Diverged {
            actual: Mark::EndOfOutput,
            expected: Mark::Tail(i),
        };
    }

    Divergence::Identical
}

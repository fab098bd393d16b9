//! # Output Diff
//!
//! Feedback logic for an online coding judge. Given the output a program was expected to
//! print and the output it actually printed, this crate finds the first point where the two
//! disagree and renders that point for a human reviewer.
//!
//! ## Key Concepts
//! - **Divergence**: the tagged result of [`differ::diff_outputs`]; either no output was
//!   captured, both outputs agree, or a [`differ::Mark`] pair locates the first difference.
//! - **Renderers**: pluggable strategies ([`traits::renderer::MarkRenderer`]) that turn a mark
//!   into HTML, plain text or coloured terminal text.
//! - **Responses**: the JSON records returned by the grading endpoints ([`response`]).
//! - **Feedback**: the report shown to a student after a submission ([`feedback`]).
//! - **Verdicts**: first-failure evaluation of a program over a list of test cases ([`verdict`]).

pub mod differ;
pub mod error;
pub mod feedback;
pub mod normalize;
pub mod renderers;
pub mod response;
pub mod traits;
pub mod truncate;
pub mod verdict;

pub use differ::{Divergence, Mark, diff_outputs};
pub use error::DiffError;

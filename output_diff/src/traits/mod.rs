//!
//! Traits Module
//!
//! Extension points of the feedback pipeline.
//!
//! - [`renderer`]: turns a [`Mark`](crate::differ::Mark) into visible emphasis.
//! - [`runner`]: executes a program against one test case (the sandbox lives elsewhere).

pub mod renderer;
pub mod runner;

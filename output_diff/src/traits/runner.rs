use crate::error::DiffError;

/// Raw result of running a program once, as reported by the sandbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Runs the program under test with the given standard input.
///
/// Compilation and sandboxing are owned by the caller; [`crate::verdict::evaluate`] only
/// drives the runner one test case at a time and stops at the first failure.
pub trait ProgramRunner {
    fn run(&mut self, stdin: &str) -> Result<ExecutionResult, DiffError>;
}

impl<F> ProgramRunner for F
where
    F: FnMut(&str) -> Result<ExecutionResult, DiffError>,
{
    fn run(&mut self, stdin: &str) -> Result<ExecutionResult, DiffError> {
        self(stdin)
    }
}

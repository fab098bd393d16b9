use colored::Colorize;

use crate::traits::renderer::MarkRenderer;

/// Red bold ANSI emphasis for terminal output.
///
/// Respects `colored`'s global override and the `NO_COLOR`/`CLICOLOR` variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRenderer;

impl MarkRenderer for TerminalRenderer {
    fn emphasize(&self, span: &str) -> String {
        span.red().bold().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::Mark;

    #[test]
    fn test_terminal_emphasis_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(TerminalRenderer.render("abd", &Mark::Char(2)), "abd");
        assert_eq!(
            TerminalRenderer.render("ab", &Mark::EndOfOutput),
            "ab[end of output]"
        );
        colored::control::unset_override();
    }
}

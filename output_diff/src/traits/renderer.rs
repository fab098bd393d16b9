use crate::differ::Mark;

/// Label appended to a text that ended before the other one did.
pub const END_OF_OUTPUT_LABEL: &str = "[end of output]";

/// MarkRenderer is a strategy trait for making a divergence visible.
///
/// Implementations decide how to emphasise a span and how to escape ordinary text for their
/// medium; [`MarkRenderer::render`] combines the two for any [`Mark`].
pub trait MarkRenderer: Send + Sync {
    /// Wraps `span` in the medium's emphasis.
    fn emphasize(&self, span: &str) -> String;

    /// Escapes text that is shown without emphasis. Identity by default.
    fn escape(&self, text: &str) -> String {
        text.to_string()
    }

    /// The marker appended to a text that ended early.
    fn end_of_output(&self) -> String {
        self.emphasize(END_OF_OUTPUT_LABEL)
    }

    /// Renders `text` with `mark` applied. Indices past the end of `text` fall back to an
    /// end-of-output marker.
    fn render(&self, text: &str, mark: &Mark) -> String {
        let split_at = |index: usize| text.char_indices().nth(index).map(|(byte, _)| byte);

        match *mark {
            Mark::EndOfOutput => format!("{}{}", self.escape(text), self.end_of_output()),
            Mark::Char(index) => match split_at(index) {
                Some(start) => {
                    let (head, rest) = text.split_at(start);
                    let width = rest.chars().next().map_or(0, char::len_utf8);
                    let (marked, tail) = rest.split_at(width);
                    format!(
                        "{}{}{}",
                        self.escape(head),
                        self.emphasize(&self.escape(marked)),
                        self.escape(tail)
                    )
                }
                None => format!("{}{}", self.escape(text), self.end_of_output()),
            },
            Mark::Tail(index) => match split_at(index) {
                Some(start) => {
                    let (head, tail) = text.split_at(start);
                    format!("{}{}", self.escape(head), self.emphasize(&self.escape(tail)))
                }
                None => format!("{}{}", self.escape(text), self.end_of_output()),
            },
        }
    }
}

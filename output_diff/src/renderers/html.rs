use crate::traits::renderer::MarkRenderer;

const EMPHASIS_OPEN: &str = r#"<span style="color:red;font-weight: bold">"#;
const EMPHASIS_CLOSE: &str = "</span>";

/// Renders marks as red bold `<span>` elements for the judge's web feedback panel.
///
/// Unmarked text is HTML-escaped so program output cannot inject markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl MarkRenderer for HtmlRenderer {
    fn emphasize(&self, span: &str) -> String {
        format!("{EMPHASIS_OPEN}{span}{EMPHASIS_CLOSE}")
    }

    fn escape(&self, text: &str) -> String {
        escape_html(text)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Turns `\r\n`, `\r` and `\n` line breaks into `<br>`.
pub fn replace_new_lines(text: &str) -> String {
    text.replace("\r\n", "<br>")
        .replace('\r', "<br>")
        .replace('\n', "<br>")
}

//! Normalisation applied to captured program output before it is graded or stored.

/// Decodes raw captured output and tidies it for comparison and display.
///
/// Invalid UTF-8 is replaced lossily. Leading and trailing spaces and newlines are stripped,
/// then every carriage return becomes a newline.
pub fn clean_output(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_matches(|c| c == ' ' || c == '\n')
        .replace('\r', "\n")
}

fn squeeze(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| *c != ' ' && *c != '\n')
}

/// Two outputs match when they are equal after removing every space and newline.
pub fn outputs_match(left: &str, right: &str) -> bool {
    squeeze(left).eq(squeeze(right))
}

/// A test case passes when the program exits with code 0 and its output matches.
pub fn is_correct(exit_code: i32, stdout: &str, expected: &str) -> bool {
    exit_code == 0 && outputs_match(stdout, expected)
}

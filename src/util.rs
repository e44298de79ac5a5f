use std::ops::Range;

use coloured_strings::*;

/// Echoes `input` on a new line with the `span` region coloured red. An empty span (end of
/// input) is shown as a red underscore at that position.
pub fn error_message(input: &str, span: Range<usize>) -> String {
    let start = span.start.min(input.len());
    let end = span.end.clamp(start, input.len());
    let region = if start == end {
        "_".to_string()
    } else {
        input[start..end].to_string()
    };
    format!(
        "\n{}{}{}",
        &input[..start],
        colour(&region, "red"),
        &input[end..]
    )
}

//! Highlight lists and their bullet-joined display form.

/// Literal separator between highlights in the display string.
pub const HIGHLIGHT_DELIMITER: &str = " • ";

/// Splits display text into highlights on the literal delimiter.
///
/// Empty text means no highlights. Pieces are not trimmed, so joining the
/// result gives back the original text.
pub fn split_highlights(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(HIGHLIGHT_DELIMITER).map(String::from).collect()
}

/// Joins highlights for display.
pub fn join_highlights(highlights: &[String]) -> String {
    highlights.join(HIGHLIGHT_DELIMITER)
}

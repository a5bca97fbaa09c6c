/// Maximum number of characters kept from a candidate's trimmed text.
pub const MAX_ENTRY_CHARS: usize = 50;
/// Marker appended when the trimmed text was longer than the cap.
pub const ELLIPSIS: &str = "...";

/// Display text for a candidate, or `None` when nothing remains after
/// trimming. Text longer than [`MAX_ENTRY_CHARS`] characters keeps the first
/// [`MAX_ENTRY_CHARS`] and gains the [`ELLIPSIS`] marker.
pub fn display_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(truncate_chars(trimmed))
}

fn truncate_chars(text: &str) -> String {
    // nth(MAX) yields the byte offset of the first character past the cap,
    // which is a valid boundary for the slice below.
    match text.char_indices().nth(MAX_ENTRY_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_text, ELLIPSIS, MAX_ENTRY_CHARS};

    #[test]
    fn short_text_kept_as_is() {
        assert_eq!(display_text("Hi"), Some("Hi".to_string()));
    }

    #[test]
    fn text_at_the_cap_is_not_marked() {
        let text = "a".repeat(MAX_ENTRY_CHARS);
        assert_eq!(display_text(&text), Some(text.clone()));
    }

    #[test]
    fn long_text_is_truncated_with_marker() {
        let text = "a".repeat(MAX_ENTRY_CHARS + 10);
        let display = display_text(&text).unwrap();
        assert!(display.ends_with(ELLIPSIS));
        assert_eq!(display.chars().count(), MAX_ENTRY_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_the_cap() {
        let text = format!("  {}  ", "b".repeat(MAX_ENTRY_CHARS));
        assert_eq!(display_text(&text), Some("b".repeat(MAX_ENTRY_CHARS)));
    }

    #[test]
    fn whitespace_only_text_yields_nothing() {
        assert_eq!(display_text("   \n\t "), None);
        assert_eq!(display_text(""), None);
    }

    #[test]
    fn multibyte_text_is_cut_on_a_char_boundary() {
        let text = "é".repeat(MAX_ENTRY_CHARS + 5);
        let display = display_text(&text).unwrap();
        assert!(display.ends_with(ELLIPSIS));
        assert_eq!(display.chars().count(), MAX_ENTRY_CHARS + ELLIPSIS.len());
        assert!(display.starts_with('é'));
    }
}

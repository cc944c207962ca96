//! Configuration constants and option types for nullwidth.

/// Cover text used when the operator does not supply one.
pub const DEFAULT_COVER_TEXT: &str = "This is some default cover text.";

/// Number of characters of cover text shown in log lines.
pub const PREVIEW_CHARS: usize = 50;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Options for hiding a message.
#[derive(Debug, Clone, Default)]
pub struct HideOptions {
    /// Message to hide. Prompted for when absent.
    pub message: Option<String>,

    /// Cover text. Prompted for when absent.
    pub cover: Option<String>,

    /// Read the cover text until a blank line instead of a single line.
    pub multiline: bool,
}

impl HideOptions {
    /// Resolve the cover text, falling back to [`DEFAULT_COVER_TEXT`] when empty.
    pub fn cover_or_default(cover: &str) -> &str {
        if cover.is_empty() {
            DEFAULT_COVER_TEXT
        } else {
            cover
        }
    }
}

/// Options for revealing a hidden message.
#[derive(Debug, Clone, Default)]
pub struct RevealOptions {
    /// Decode the whole text directly instead of searching for markers.
    pub raw: bool,

    /// Emit a JSON report instead of plain text.
    pub json: bool,
}

/// Shorten `text` to at most `max` characters for logging.
pub fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_or_default() {
        assert_eq!(HideOptions::cover_or_default(""), DEFAULT_COVER_TEXT);
        assert_eq!(HideOptions::cover_or_default("Hello"), "Hello");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("héllo wörld", 4), "héll");
        assert_eq!(preview("short", PREVIEW_CHARS), "short");
        assert_eq!(preview("", 3), "");
    }
}

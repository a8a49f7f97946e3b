//! Hard truncation for free-text sections.

use ragwindow_core::sentinel::{ELLIPSIS, ELLIPSIS_CHARS};

/// Cut `text` to at most `limit` characters.
///
/// Text within the limit is returned unchanged. Longer text keeps its first
/// `limit - 3` characters followed by `...`, so the result is exactly
/// `limit` characters long.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    if limit < ELLIPSIS_CHARS {
        return ELLIPSIS[..limit].to_string();
    }

    let mut out: String = text.chars().take(limit - ELLIPSIS_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}

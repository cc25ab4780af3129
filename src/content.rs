//! Content normalization for bubble text.
//!
//! Everything that becomes bubble content passes through [`prepare_content`]
//! first. Uniqueness checks, storage, and display all operate on the
//! normalized form, so caret-anchor artifacts and surrounding whitespace
//! never produce spurious distinct bubbles.

/// Zero-width space (U+200B).
///
/// Appended as a text node to give the caret an anchor point in otherwise
/// empty editable regions. Never part of committed bubble content.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Normalize raw text into bubble content.
///
/// Removes every zero-width space, then trims surrounding whitespace.
/// Idempotent: normalizing already-normalized content changes nothing.
pub fn prepare_content(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|&ch| ch != ZERO_WIDTH_SPACE).collect();
    stripped.trim().to_string()
}

/// True when `text` is a bare caret anchor: a single zero-width space and
/// nothing else.
pub fn is_caret_anchor(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some(ZERO_WIDTH_SPACE) && chars.next().is_none()
}

//! Script detection and matching normalization.
//!
//! The classifier picks its rule subset by the Unicode script of the input,
//! independent of the site's configured display language: a visitor can
//! write Arabic while the UI is set to French. Detection inspects the
//! Arabic Unicode block (U+0600..=U+06FF).

/// Whether `text` contains at least one character from the Arabic block.
///
/// Presentation forms and supplement blocks are deliberately not covered;
/// everyday typed Arabic lands in U+0600..=U+06FF.
#[must_use]
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

/// Normalize input for rule matching.
///
/// Matching is case-insensitive: the stored message keeps its original
/// casing, but every matcher sees the lowercased form.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.to_lowercase()
}

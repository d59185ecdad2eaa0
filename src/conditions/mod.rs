//! Field conditions
//!
//! Each condition checks one criterion on an optional input string.

mod length;
mod password_strength;
mod pattern;
mod present;

pub use length::LengthCondition;
pub use password_strength::{PasswordStrengthCondition, password_score, strength_of};
pub use pattern::{PatternCondition, PatternError};
pub use present::PresentCondition;

use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// A single pass/fail rule applied to a form field value.
///
/// `check` is a pure function of the input and the condition's own
/// configuration. `allows_violation` only tells the caller whether a failure
/// blocks submission; it never changes the outcome of `check`.
pub trait Condition: fmt::Debug + Send + Sync {
    /// Returns `true` if `text` satisfies the condition. `None` means the
    /// field has no value.
    fn check(&self, text: Option<&str>) -> bool;

    /// Message shown when the condition fails. Never empty.
    fn violation_message(&self) -> &str;

    /// Whether a failure is a soft warning rather than a blocking error.
    fn allows_violation(&self) -> bool;

    fn set_allows_violation(&mut self, allow: bool);

    /// Pattern backing the condition, empty for non-pattern conditions.
    fn pattern(&self) -> &str {
        ""
    }
}

/// Number of user-perceived characters (extended grapheme clusters).
pub(crate) fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_len_ascii() {
        assert_eq!(grapheme_len("P@ssw0rd!"), 9);
        assert_eq!(grapheme_len(""), 0);
    }

    #[test]
    fn test_grapheme_len_combining_sequences() {
        // "e" + COMBINING ACUTE ACCENT is one perceived character
        let text = "e\u{301}".repeat(4);
        assert_eq!(text.chars().count(), 8);
        assert_eq!(grapheme_len(&text), 4);
    }
}

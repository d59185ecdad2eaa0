//! Password strength condition - scores character-class variety and length.
//!
//! The score is the number of character classes present (digit, lowercase,
//! uppercase, other), plus one if the password is longer than
//! [`LENGTH_BONUS_THRESHOLD`] perceived characters, minus one otherwise.
//! Short, uniform passwords can therefore score below zero.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

use super::{Condition, grapheme_len};
use crate::messages::{DefaultMessages, MessageProvider, keys, resolve};
use crate::strength::PasswordStrength;

/// Passwords strictly longer than this get the length bonus.
const LENGTH_BONUS_THRESHOLD: usize = 8;

/// Character classes, each contributing one point when found at least once.
const CLASS_PATTERNS: [(&str, &str); 4] = [
    ("digit", r"\d"),
    ("lowercase", r"[a-z]"),
    ("uppercase", r"[A-Z]"),
    ("other", r"[^a-zA-Z\d]"),
];

static CLASS_MATCHERS: LazyLock<[Option<Regex>; 4]> =
    LazyLock::new(|| CLASS_PATTERNS.map(|(name, pattern)| compile_class(name, pattern)));

fn compile_class(_name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Character class {} disabled, bad pattern: {}", _name, _e);
            None
        }
    }
}

/// A class without a usable matcher counts as absent.
fn class_present(matcher: Option<&Regex>, text: &str) -> bool {
    matcher.is_some_and(|m| m.is_match(text))
}

fn score_with(matchers: &[Option<Regex>], text: &str) -> i32 {
    let classes = matchers
        .iter()
        .filter(|m| class_present(m.as_ref(), text))
        .count() as i32;

    if grapheme_len(text) > LENGTH_BONUS_THRESHOLD {
        classes + 1
    } else {
        classes - 1
    }
}

/// Raw strength score of `text`, in `-1..=5`.
pub fn password_score(text: &str) -> i32 {
    score_with(CLASS_MATCHERS.as_slice(), text)
}

/// Strength level of `text`, with the score clamped into the level range.
pub fn strength_of(text: &str) -> PasswordStrength {
    PasswordStrength::from_score(password_score(text))
}

/// Passes when a password's score reaches `required_strength`.
///
/// Failing is a soft violation by default: `allows_violation` starts `true`.
#[derive(Debug, Clone)]
pub struct PasswordStrengthCondition {
    required_strength: PasswordStrength,
    violation_message: String,
    allows_violation: bool,
}

impl PasswordStrengthCondition {
    pub fn new(required_strength: PasswordStrength) -> Self {
        Self::with_messages(required_strength, &DefaultMessages)
    }

    pub fn with_messages(
        required_strength: PasswordStrength,
        messages: &dyn MessageProvider,
    ) -> Self {
        Self {
            required_strength,
            violation_message: resolve(messages, keys::PASSWORD_STRENGTH),
            allows_violation: true,
        }
    }

    pub fn required_strength(&self) -> PasswordStrength {
        self.required_strength
    }

    /// [`check`](Condition::check) for a password held in a [`SecretString`].
    pub fn check_secret(&self, password: &SecretString) -> bool {
        self.check(Some(password.expose_secret()))
    }
}

impl Default for PasswordStrengthCondition {
    fn default() -> Self {
        Self::new(PasswordStrength::VeryStrong)
    }
}

impl Condition for PasswordStrengthCondition {
    fn check(&self, text: Option<&str>) -> bool {
        let Some(text) = text else {
            return false;
        };
        let score = password_score(text);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password score {} against required {}",
            score,
            self.required_strength.rank()
        );

        score >= self.required_strength.rank()
    }

    fn violation_message(&self) -> &str {
        &self.violation_message
    }

    fn allows_violation(&self) -> bool {
        self.allows_violation
    }

    fn set_allows_violation(&mut self, allow: bool) {
        self.allows_violation = allow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(strength: PasswordStrength, text: &str) -> bool {
        PasswordStrengthCondition::new(strength).check(Some(text))
    }

    #[test]
    fn test_short_lowercase_scores_zero() {
        assert_eq!(password_score("abc"), 0);
        assert!(passes(PasswordStrength::VeryWeak, "abc"));
        assert!(!passes(PasswordStrength::Weak, "abc"));
        assert!(!passes(PasswordStrength::VeryStrong, "abc"));
    }

    #[test]
    fn test_three_classes_with_length_bonus() {
        assert_eq!(password_score("Password1"), 4);
        assert!(passes(PasswordStrength::Strong, "Password1"));
        assert!(passes(PasswordStrength::VeryStrong, "Password1"));
    }

    #[test]
    fn test_all_classes_with_length_bonus() {
        assert_eq!(password_score("P@ssw0rd!"), 5);
        assert!(passes(PasswordStrength::VeryStrong, "P@ssw0rd!"));
    }

    #[test]
    fn test_empty_fails_every_threshold() {
        assert_eq!(password_score(""), -1);
        for strength in PasswordStrength::ALL {
            assert!(!passes(strength, ""), "empty passed {strength}");
        }
    }

    #[test]
    fn test_absent_fails_every_threshold() {
        for strength in PasswordStrength::ALL {
            assert!(!PasswordStrengthCondition::new(strength).check(None));
        }
    }

    #[test]
    fn test_very_strong_threshold_is_score_four() {
        // three classes plus the length bonus reach rank 4
        for text in ["Password1", "passw0rd!", "PASSW0RD!"] {
            assert_eq!(password_score(text), 4, "{text:?}");
            assert!(passes(PasswordStrength::VeryStrong, text), "{text:?}");
        }
        // four classes without the length bonus stay at 3
        assert!(passes(PasswordStrength::Strong, "P@ssw0rd"));
        assert!(!passes(PasswordStrength::VeryStrong, "P@ssw0rd"));
        // two classes plus the bonus only reach 3
        assert!(!passes(PasswordStrength::VeryStrong, "password1"));
    }

    #[test]
    fn test_exactly_eight_characters_is_penalized() {
        // all four classes, but not longer than eight
        assert_eq!(password_score("P@ssw0rd"), 3);
        assert!(!passes(PasswordStrength::VeryStrong, "P@ssw0rd"));
    }

    #[test]
    fn test_non_ascii_letters_count_as_other() {
        assert_eq!(password_score("\u{e9}\u{e9}\u{e9}"), 0);
    }

    #[test]
    fn test_length_uses_grapheme_clusters() {
        // eight perceived characters, sixteen code points: no length bonus
        let text = "e\u{301}".repeat(8);
        assert_eq!(password_score(&text), 1);

        let text = format!("Aa1!{}", "e\u{301}".repeat(5));
        assert_eq!(password_score(&text), 5);
    }

    #[test]
    fn test_default_requires_very_strong() {
        let condition = PasswordStrengthCondition::default();
        assert_eq!(condition.required_strength(), PasswordStrength::VeryStrong);
        assert!(condition.allows_violation());
        assert_eq!(condition.pattern(), "");
        assert!(condition.check(Some("Password1")));
        assert!(condition.check(Some("P@ssw0rd!")));
        assert!(!condition.check(Some("P@ssw0rd")));
    }

    #[test]
    fn test_monotonic_across_thresholds() {
        let samples = ["", "abc", "abcdefghij", "Password1", "P@ssw0rd!", "12345678"];
        for text in samples {
            for (i, high) in PasswordStrength::ALL.iter().enumerate() {
                if passes(*high, text) {
                    for low in &PasswordStrength::ALL[..=i] {
                        assert!(passes(*low, text), "{text:?} passed {high} but not {low}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_check_is_deterministic() {
        let condition = PasswordStrengthCondition::new(PasswordStrength::Strong);
        let first = condition.check(Some("Password1"));
        for _ in 0..10 {
            assert_eq!(condition.check(Some("Password1")), first);
        }
    }

    #[test]
    fn test_malformed_class_contributes_nothing() {
        assert!(compile_class("broken", "[a-").is_none());

        let matchers = [
            compile_class("digit", r"\d"),
            compile_class("broken", "[a-"),
        ];
        // digit found, broken class skipped, length penalty applied
        assert_eq!(score_with(&matchers, "a1"), 0);
    }

    #[test]
    fn test_allows_violation_does_not_change_check() {
        let mut condition = PasswordStrengthCondition::new(PasswordStrength::Medium);
        let before = condition.check(Some("abc"));
        condition.set_allows_violation(false);
        assert_eq!(condition.check(Some("abc")), before);
        assert!(!condition.allows_violation());
    }

    #[test]
    fn test_check_secret() {
        let condition = PasswordStrengthCondition::default();
        let pwd = SecretString::new("P@ssw0rd!".to_string().into());
        assert!(condition.check_secret(&pwd));
    }

    #[test]
    fn test_strength_of() {
        assert_eq!(strength_of(""), PasswordStrength::VeryWeak);
        assert_eq!(strength_of("Password1"), PasswordStrength::VeryStrong);
        assert_eq!(strength_of("abcdefghij"), PasswordStrength::Medium);
    }

    #[test]
    fn test_custom_message() {
        let mut catalog = crate::messages::MessageCatalog::default();
        catalog.insert(keys::PASSWORD_STRENGTH, "Mot de passe trop faible");
        let condition =
            PasswordStrengthCondition::with_messages(PasswordStrength::Medium, &catalog);
        assert_eq!(condition.violation_message(), "Mot de passe trop faible");
    }
}

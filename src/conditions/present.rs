//! Present condition - the field must hold a non-blank value.

use super::Condition;
use crate::messages::{DefaultMessages, MessageProvider, keys, resolve};

/// Passes when the value is present and not only whitespace.
#[derive(Debug, Clone)]
pub struct PresentCondition {
    violation_message: String,
    allows_violation: bool,
}

impl PresentCondition {
    pub fn new() -> Self {
        Self::with_messages(&DefaultMessages)
    }

    pub fn with_messages(messages: &dyn MessageProvider) -> Self {
        Self {
            violation_message: resolve(messages, keys::PRESENT),
            allows_violation: false,
        }
    }
}

impl Default for PresentCondition {
    fn default() -> Self {
        Self::new()
    }
}

impl Condition for PresentCondition {
    fn check(&self, text: Option<&str>) -> bool {
        text.is_some_and(|t| !t.trim().is_empty())
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

    #[test]
    fn test_present_condition() {
        let condition = PresentCondition::new();
        assert!(condition.check(Some("x")));
        assert!(condition.check(Some("  hello ")));
        assert!(!condition.check(Some("")));
        assert!(!condition.check(Some(" \t\n")));
        assert!(!condition.check(None));
    }

    #[test]
    fn test_present_condition_message() {
        let condition = PresentCondition::default();
        assert_eq!(condition.violation_message(), "This field is required");
        assert_eq!(condition.pattern(), "");
    }
}

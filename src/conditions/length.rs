//! Length condition - checks the number of user-perceived characters.

use super::{Condition, grapheme_len};
use crate::messages::{DefaultMessages, MessageProvider, keys, resolve};

/// Passes when the grapheme count lies within `min..=max`.
///
/// `max: None` means no upper bound. Absent input fails.
#[derive(Debug, Clone)]
pub struct LengthCondition {
    min: usize,
    max: Option<usize>,
    violation_message: String,
    allows_violation: bool,
}

impl LengthCondition {
    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self::with_messages(min, max, &DefaultMessages)
    }

    pub fn with_messages(min: usize, max: Option<usize>, messages: &dyn MessageProvider) -> Self {
        Self {
            min,
            max,
            violation_message: resolve(messages, keys::LENGTH),
            allows_violation: false,
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

impl Condition for LengthCondition {
    fn check(&self, text: Option<&str>) -> bool {
        let Some(text) = text else {
            return false;
        };
        let len = grapheme_len(text);
        len >= self.min && self.max.is_none_or(|max| len <= max)
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

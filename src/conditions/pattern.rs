//! Pattern condition - whole-value regular expression match.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::Condition;
use crate::messages::{DefaultMessages, MessageProvider, keys, resolve};

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+";
const URL_PATTERN: &str = r"https?://[^\s/$.?#][^\s]*";
const ALPHABETIC_PATTERN: &str = r"\p{L}+";
const NUMERIC_PATTERN: &str = r"\p{Nd}+";
const ALPHANUMERIC_PATTERN: &str = r"[\p{L}\p{Nd}]+";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| compile(EMAIL_PATTERN).ok());
static URL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| compile(URL_PATTERN).ok());
static ALPHABETIC_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(ALPHABETIC_PATTERN).ok());
static NUMERIC_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| compile(NUMERIC_PATTERN).ok());
static ALPHANUMERIC_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(ALPHANUMERIC_PATTERN).ok());

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern {pattern:?}: {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiles `pattern` anchored at both ends, so it must match the whole value.
fn compile(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
        #[cfg(feature = "tracing")]
        tracing::warn!("Pattern {:?} failed to compile: {}", pattern, source);
        PatternError::Invalid {
            pattern: pattern.to_string(),
            source,
        }
    })
}

/// Passes when the whole input matches a regular expression.
///
/// Absent input fails. A pattern that does not compile never matches, so the
/// condition fails instead of aborting the surrounding validation.
#[derive(Debug, Clone)]
pub struct PatternCondition {
    pattern: String,
    matcher: Option<Regex>,
    violation_message: String,
    allows_violation: bool,
}

impl PatternCondition {
    /// Creates a condition for `pattern` with the generic pattern message.
    pub fn new(pattern: &str) -> Self {
        Self::with_messages(pattern, keys::PATTERN, &DefaultMessages)
    }

    /// Creates a condition whose message is resolved from `messages` under `key`.
    pub fn with_messages(pattern: &str, key: &str, messages: &dyn MessageProvider) -> Self {
        Self {
            pattern: pattern.to_string(),
            matcher: compile(pattern).ok(),
            violation_message: resolve(messages, key),
            allows_violation: false,
        }
    }

    /// Like [`new`](Self::new) but rejects a pattern that does not compile.
    pub fn try_new(pattern: &str) -> Result<Self, PatternError> {
        let matcher = compile(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            matcher: Some(matcher),
            violation_message: resolve(&DefaultMessages, keys::PATTERN),
            allows_violation: false,
        })
    }

    pub fn email(messages: &dyn MessageProvider) -> Self {
        Self::preset(EMAIL_PATTERN, &EMAIL_REGEX, keys::EMAIL, messages)
    }

    /// `http` or `https` URL.
    pub fn url(messages: &dyn MessageProvider) -> Self {
        Self::preset(URL_PATTERN, &URL_REGEX, keys::URL, messages)
    }

    pub fn alphabetic(messages: &dyn MessageProvider) -> Self {
        Self::preset(ALPHABETIC_PATTERN, &ALPHABETIC_REGEX, keys::ALPHABETIC, messages)
    }

    /// Decimal digits of any script.
    pub fn numeric(messages: &dyn MessageProvider) -> Self {
        Self::preset(NUMERIC_PATTERN, &NUMERIC_REGEX, keys::NUMERIC, messages)
    }

    pub fn alphanumeric(messages: &dyn MessageProvider) -> Self {
        Self::preset(
            ALPHANUMERIC_PATTERN,
            &ALPHANUMERIC_REGEX,
            keys::ALPHANUMERIC,
            messages,
        )
    }

    fn preset(
        pattern: &str,
        matcher: &LazyLock<Option<Regex>>,
        key: &str,
        messages: &dyn MessageProvider,
    ) -> Self {
        Self {
            pattern: pattern.to_string(),
            matcher: (**matcher).clone(),
            violation_message: resolve(messages, key),
            allows_violation: false,
        }
    }

    /// Overrides the violation message. A blank message is ignored.
    pub fn with_violation_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.violation_message = message;
        }
        self
    }
}

impl Condition for PatternCondition {
    fn check(&self, text: Option<&str>) -> bool {
        match (text, &self.matcher) {
            (Some(text), Some(matcher)) => matcher.is_match(text),
            _ => false,
        }
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

    fn pattern(&self) -> &str {
        &self.pattern
    }
}

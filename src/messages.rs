//! Violation message lookup.
//!
//! Conditions resolve their violation message once, at construction, through
//! an injected [`MessageProvider`]. A missing key always falls back to a
//! built-in default, so a condition never ends up without a message.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Well-known message keys used by the shipped conditions.
pub mod keys {
    pub const ALPHABETIC: &str = "condition.violation.alphabetic";
    pub const ALPHANUMERIC: &str = "condition.violation.alphanumeric";
    pub const EMAIL: &str = "condition.violation.email";
    pub const LENGTH: &str = "condition.violation.length";
    pub const NUMERIC: &str = "condition.violation.numeric";
    pub const PASSWORD_STRENGTH: &str = "condition.violation.password_strength";
    pub const PATTERN: &str = "condition.violation.pattern";
    pub const PRESENT: &str = "condition.violation.present";
    pub const URL: &str = "condition.violation.url";
}

/// Fallback used when a key has neither a provided nor a built-in message.
const GENERIC_VIOLATION: &str = "Invalid value";

#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Message catalog not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read message catalog: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Message catalog is empty")]
    EmptyFile,
    #[error("Malformed message catalog entry on line {line}")]
    MalformedLine { line: usize },
}

/// Source of localized violation messages.
pub trait MessageProvider {
    /// Returns the message for `key`, or `None` if the provider has none.
    fn message(&self, key: &str) -> Option<String>;
}

/// Provider with no entries; every lookup falls back to the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageProvider for DefaultMessages {
    fn message(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Built-in English message for a well-known key.
pub fn default_message(key: &str) -> &'static str {
    match key {
        keys::ALPHABETIC => "Must contain only letters",
        keys::ALPHANUMERIC => "Must contain only letters and numbers",
        keys::EMAIL => "Invalid email address",
        keys::LENGTH => "Invalid length",
        keys::NUMERIC => "Must contain only numbers",
        keys::PASSWORD_STRENGTH => "Password is not strong enough",
        keys::PATTERN => "Invalid format",
        keys::PRESENT => "This field is required",
        keys::URL => "Invalid URL",
        _ => GENERIC_VIOLATION,
    }
}

/// Resolves `key` through `provider`, falling back to [`default_message`].
///
/// Blank provider entries are treated as missing. The result is never empty.
pub fn resolve(provider: &dyn MessageProvider, key: &str) -> String {
    match provider.message(key) {
        Some(msg) if !msg.trim().is_empty() => msg,
        _ => {
            #[cfg(feature = "tracing")]
            tracing::debug!("No message for key {}, using default", key);
            default_message(key).to_string()
        }
    }
}

/// Returns the message catalog file path.
///
/// Priority:
/// 1. Environment variable `FORM_VALIDATOR_MESSAGES_PATH`
/// 2. Default path `./assets/messages.txt`
pub fn messages_path() -> PathBuf {
    std::env::var("FORM_VALIDATOR_MESSAGES_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/messages.txt"))
}

/// Key/value message catalog loaded from a text file.
///
/// One `key = value` entry per line; blank lines and lines starting with `#`
/// are skipped. Later duplicates override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// Loads the catalog from [`messages_path`].
    pub fn load() -> Result<Self, MessageError> {
        Self::from_path(messages_path())
    }

    /// Loads the catalog from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    /// - A non-comment line has no `=` or an empty key
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MessageError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Message catalog load FAILED: FileNotFound {:?}", path);
            return Err(MessageError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Message catalog loaded: {} entries from {:?}", catalog.len(), path);

        Ok(catalog)
    }

    /// Parses catalog text.
    pub fn parse(content: &str) -> Result<Self, MessageError> {
        let mut entries = HashMap::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or(MessageError::MalformedLine { line: idx + 1 })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(MessageError::MalformedLine { line: idx + 1 });
            }
            entries.insert(key.to_string(), value.trim().to_string());
        }

        if entries.is_empty() {
            return Err(MessageError::EmptyFile);
        }
        Ok(Self { entries })
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageProvider for MessageCatalog {
    fn message(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

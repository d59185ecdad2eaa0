//! Field validator - runs every condition for one field and reports failures.

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::conditions::{Condition, PasswordStrengthCondition, PatternCondition, PresentCondition};
use crate::messages::MessageProvider;
use crate::strength::PasswordStrength;

/// Owned snapshot of a failed condition, suitable for sending across tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub message: String,
    pub allows_violation: bool,
}

impl From<&dyn Condition> for Violation {
    fn from(condition: &dyn Condition) -> Self {
        Self {
            message: condition.violation_message().to_string(),
            allows_violation: condition.allows_violation(),
        }
    }
}

/// Returns `true` if any failure blocks submission.
pub fn has_blocking_violation(failures: &[&dyn Condition]) -> bool {
    failures.iter().any(|c| !c.allows_violation())
}

/// Ordered set of conditions for one logical form field.
#[derive(Debug, Default)]
pub struct Validator {
    conditions: Vec<Box<dyn Condition>>,
}

impl Validator {
    pub fn new(conditions: Vec<Box<dyn Condition>>) -> Self {
        Self { conditions }
    }

    /// A single email pattern condition.
    pub fn email(messages: &dyn MessageProvider) -> Self {
        Self::new(vec![Box::new(PatternCondition::email(messages))])
    }

    /// A single password strength condition requiring `required_strength`.
    pub fn password(required_strength: PasswordStrength, messages: &dyn MessageProvider) -> Self {
        Self::new(vec![Box::new(PasswordStrengthCondition::with_messages(
            required_strength,
            messages,
        ))])
    }

    /// A single non-blank condition.
    pub fn required(messages: &dyn MessageProvider) -> Self {
        Self::new(vec![Box::new(PresentCondition::with_messages(messages))])
    }

    /// Appends a condition after the existing ones.
    pub fn push<C: Condition + 'static>(&mut self, condition: C) {
        self.conditions.push(Box::new(condition));
    }

    pub fn conditions(&self) -> &[Box<dyn Condition>] {
        &self.conditions
    }

    /// Mutable access, e.g. to toggle `allows_violation`.
    pub fn conditions_mut(&mut self) -> &mut [Box<dyn Condition>] {
        &mut self.conditions
    }

    /// Checks `text` against every condition.
    ///
    /// All conditions run, in declared order, regardless of earlier failures.
    ///
    /// # Returns
    /// - `None` if every condition passed
    /// - `Some(failures)` with the failed conditions in declared order
    pub fn check_conditions(&self, text: Option<&str>) -> Option<Vec<&dyn Condition>> {
        let failures: Vec<&dyn Condition> = self
            .conditions
            .iter()
            .map(|c| -> &dyn Condition { c.as_ref() })
            .filter(|c| !c.check(text))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Validated field: {}/{} conditions failed",
            failures.len(),
            self.conditions.len()
        );

        if failures.is_empty() {
            None
        } else {
            Some(failures)
        }
    }

    pub fn is_valid(&self, text: Option<&str>) -> bool {
        self.check_conditions(text).is_none()
    }

    /// Like [`check_conditions`](Self::check_conditions) but returns owned snapshots.
    pub fn violations(&self, text: Option<&str>) -> Option<Vec<Violation>> {
        self.check_conditions(text)
            .map(|failures| failures.into_iter().map(Violation::from).collect())
    }
}

/// Delay before a queued validation runs, so rapid edits collapse into one check.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Debounced validation that sends the result via channel.
///
/// Waits [`DEBOUNCE`], then validates unless `token` was cancelled in the
/// meantime. A cancelled run sends nothing.
#[cfg(feature = "async")]
pub async fn check_conditions_tx(
    validator: &Validator,
    text: Option<String>,
    token: CancellationToken,
    tx: mpsc::Sender<Option<Vec<Violation>>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("validation cancelled before running");
        return;
    }

    let result = validator.violations(text.as_deref());

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send validation result: {}", _e);
    }
}

//! Form field validation library
//!
//! Independent conditions test a field value against one rule each; a
//! [`Validator`] runs all conditions for a field and reports the ones that
//! failed. The password strength condition scores character-class variety
//! and length into a [`PasswordStrength`] and compares it to a threshold.
//!
//! # Features
//!
//! - `async` (default): Enables debounced validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `FORM_VALIDATOR_MESSAGES_PATH`: Custom path to the message catalog
//!   (default: `./assets/messages.txt`)
//!
//! # Example
//!
//! ```rust
//! use form_validator::{
//!     Condition, DefaultMessages, PasswordStrength, PasswordStrengthCondition,
//!     PresentCondition, Validator, has_blocking_violation,
//! };
//!
//! let validator = Validator::new(vec![
//!     Box::new(PresentCondition::with_messages(&DefaultMessages)),
//!     Box::new(PasswordStrengthCondition::new(PasswordStrength::Strong)),
//! ]);
//!
//! match validator.check_conditions(Some("abc")) {
//!     None => println!("valid"),
//!     Some(failures) => {
//!         for failure in &failures {
//!             println!("{}", failure.violation_message());
//!         }
//!         assert!(!has_blocking_violation(&failures));
//!     }
//! }
//! ```

mod conditions;
mod messages;
mod strength;
mod validator;

// Public API
pub use conditions::{
    Condition, LengthCondition, PasswordStrengthCondition, PatternCondition, PatternError,
    PresentCondition, password_score, strength_of,
};
pub use messages::{
    DefaultMessages, MessageCatalog, MessageError, MessageProvider, default_message, keys,
    messages_path, resolve,
};
pub use strength::PasswordStrength;
pub use validator::{Validator, Violation, has_blocking_violation};

#[cfg(feature = "async")]
pub use validator::{DEBOUNCE, check_conditions_tx};

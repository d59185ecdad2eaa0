//! Discrete password strength levels.

use std::fmt;

/// Ordered password strength, ranked `0..=4`.
///
/// Thresholds are compared by [`rank`](PasswordStrength::rank), so the
/// derived ordering and the integer ranks always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    VeryWeak = 0,
    Weak = 1,
    Medium = 2,
    Strong = 3,
    VeryStrong = 4,
}

impl PasswordStrength {
    /// All levels, weakest first.
    pub const ALL: [PasswordStrength; 5] = [
        PasswordStrength::VeryWeak,
        PasswordStrength::Weak,
        PasswordStrength::Medium,
        PasswordStrength::Strong,
        PasswordStrength::VeryStrong,
    ];

    /// Integer rank used when comparing against a computed score.
    pub fn rank(self) -> i32 {
        self as i32
    }

    /// Maps a raw score onto a level, clamping below `VeryWeak` and above
    /// `VeryStrong`.
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=0 => PasswordStrength::VeryWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Medium,
            3 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::VeryWeak => "very weak",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very strong",
        };
        f.write_str(label)
    }
}

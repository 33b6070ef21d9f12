//! Pure validation rules for the sign-in form.
//!
//! Everything here is a total function over the raw input strings; failures
//! are returned as data, never as errors.

use std::sync::LazyLock;

use regex::Regex;

/// Local part, '@', domain, '.', suffix - each one or more non-space,
/// non-'@' characters. No further TLD validation.
static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Symbols accepted by the password complexity rule.
const PASSWORD_SYMBOLS: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##;

/// Returns true if the string looks like an email address.
pub fn is_valid_email_format(email: &str) -> bool {
    EMAIL_FORMAT.is_match(email)
}

/// Outcome of the password complexity check.
///
/// Violations accumulate in a fixed order; the check never short-circuits
/// so the composed message names everything that is missing at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    violations: Vec<&'static str>,
}

impl PasswordCheck {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[&'static str] {
        &self.violations
    }

    /// The user-facing message, e.g.
    /// "Password must contain at least 8 characters, one number".
    /// Empty when the password is valid.
    pub fn message(&self) -> String {
        if self.violations.is_empty() {
            String::new()
        } else {
            format!("Password must contain {}", self.violations.join(", "))
        }
    }
}

/// Checks password complexity: 8-16 characters with at least one uppercase
/// letter, one lowercase letter, one digit and one symbol.
pub fn validate_password(password: &str) -> PasswordCheck {
    let mut violations = Vec::new();
    let len = password.chars().count();

    if len < 8 {
        violations.push("at least 8 characters");
    }
    if len > 16 {
        violations.push("no more than 16 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push("one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push("one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("one number");
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        violations.push("one special character");
    }

    PasswordCheck { violations }
}

//! Submission evaluation.
//!
//! Turns the raw form fields into either a set of field errors or an
//! accepted sign-in. This is the synchronous half of the submit transition;
//! the simulated authentication delay lives in the UI runtime.

use crate::directory::CredentialDirectory;
use crate::validator;

pub const EMAIL_REQUIRED: &str = "Email address is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const EMAIL_NOT_REGISTERED: &str = "This email address is not registered in our system";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_INCORRECT: &str = "Incorrect password. Please try again";

/// Per-field error messages for one submission attempt.
///
/// Recomputed wholesale on every attempt; both fields may be set at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Result of evaluating one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Credentials check out; `email` is the trimmed address to sign in as.
    Accepted { email: String },
    /// At least one field failed; the attempt stops here.
    Rejected(FieldErrors),
}

/// Evaluates a submission against the directory.
///
/// The email is trimmed (ends only) before all checks; the password is
/// taken verbatim. Email errors are evaluated in priority order (required,
/// format, registered); the password is evaluated independently, so both
/// errors can surface together. The incorrect-password check only applies
/// when the email is known - an unregistered email reports "not registered"
/// no matter what the password is.
pub fn evaluate(directory: &CredentialDirectory, email: &str, password: &str) -> Submission {
    let email = email.trim();
    let mut errors = FieldErrors::default();

    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED.to_string());
    } else if !validator::is_valid_email_format(email) {
        errors.email = Some(EMAIL_INVALID.to_string());
    } else if !directory.contains_email(email) {
        errors.email = Some(EMAIL_NOT_REGISTERED.to_string());
    }

    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED.to_string());
    } else {
        let check = validator::validate_password(password);
        if !check.is_valid() {
            errors.password = Some(check.message());
        } else if directory.contains_email(email) && !directory.credentials_match(email, password) {
            errors.password = Some(PASSWORD_INCORRECT.to_string());
        }
    }

    if errors.is_empty() {
        Submission::Accepted {
            email: email.to_string(),
        }
    } else {
        Submission::Rejected(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate_built_in(email: &str, password: &str) -> Submission {
        evaluate(&CredentialDirectory::built_in(), email, password)
    }

    #[test]
    fn empty_email_is_required() {
        let Submission::Rejected(errors) = evaluate_built_in("", "Test123!") else {
            panic!("expected rejection");
        };
        assert_eq!(errors.email.as_deref(), Some(EMAIL_REQUIRED));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn malformed_email_reports_format() {
        let Submission::Rejected(errors) = evaluate_built_in("invalid-email", "Test123!") else {
            panic!("expected rejection");
        };
        assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
    }

    #[test]
    fn unknown_email_reports_not_registered() {
        let Submission::Rejected(errors) = evaluate_built_in("notfound@example.com", "Test123!")
        else {
            panic!("expected rejection");
        };
        assert_eq!(errors.email.as_deref(), Some(EMAIL_NOT_REGISTERED));
        // Password passes complexity and the email is unknown, so no
        // incorrect-password message fires.
        assert_eq!(errors.password, None);
    }

    #[test]
    fn short_password_reports_complexity() {
        let Submission::Rejected(errors) = evaluate_built_in("doctor@solum.com", "Test1!") else {
            panic!("expected rejection");
        };
        assert_eq!(errors.email, None);
        let message = errors.password.as_deref().unwrap_or_default();
        assert!(message.contains("at least 8 characters"), "{message}");
    }

    #[test]
    fn empty_password_is_required() {
        let Submission::Rejected(errors) = evaluate_built_in("doctor@solum.com", "") else {
            panic!("expected rejection");
        };
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn wrong_password_for_known_email() {
        let Submission::Rejected(errors) = evaluate_built_in("doctor@solum.com", "Wrong123!")
        else {
            panic!("expected rejection");
        };
        assert_eq!(errors.email, None);
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_INCORRECT));
    }

    #[test]
    fn both_fields_can_fail_together() {
        let Submission::Rejected(errors) = evaluate_built_in("", "") else {
            panic!("expected rejection");
        };
        assert_eq!(errors.email.as_deref(), Some(EMAIL_REQUIRED));
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn matching_credentials_are_accepted() {
        assert_eq!(
            evaluate_built_in("doctor@solum.com", "Test123!"),
            Submission::Accepted {
                email: "doctor@solum.com".to_string()
            }
        );
    }

    #[test]
    fn email_is_trimmed_before_all_checks() {
        assert_eq!(
            evaluate_built_in("  doctor@solum.com  ", "Test123!"),
            Submission::Accepted {
                email: "doctor@solum.com".to_string()
            }
        );
    }

    #[test]
    fn internal_whitespace_survives_trim_and_fails_format() {
        let Submission::Rejected(errors) = evaluate_built_in("doc tor@solum.com", "Test123!")
        else {
            panic!("expected rejection");
        };
        assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
    }

    #[test]
    fn all_built_in_accounts_are_accepted() {
        let directory = CredentialDirectory::built_in();
        for record in directory.records().to_vec() {
            assert_eq!(
                evaluate(&directory, &record.email, &record.password),
                Submission::Accepted {
                    email: record.email.clone()
                }
            );
        }
    }

    #[test]
    fn injected_directory_replaces_the_built_in_table() {
        use crate::directory::CredentialRecord;

        let directory = CredentialDirectory::new(vec![CredentialRecord::new(
            "nurse@clinic.org",
            "Rounds42!",
        )]);
        assert_eq!(
            evaluate(&directory, "nurse@clinic.org", "Rounds42!"),
            Submission::Accepted {
                email: "nurse@clinic.org".to_string()
            }
        );
        let Submission::Rejected(errors) = evaluate(&directory, "doctor@solum.com", "Test123!")
        else {
            panic!("expected rejection");
        };
        assert_eq!(errors.email.as_deref(), Some(EMAIL_NOT_REGISTERED));
    }
}

//! Read-only credential directory.
//!
//! The directory is fixed configuration: it is built once at startup (from
//! the built-in demo accounts or from config.toml) and never mutated at
//! runtime. All lookups are case-sensitive exact matches.

/// A single known account. Plain text by design: this is a closed
/// demonstration directory, not a real identity store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub email: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// The set of accounts that can sign in.
#[derive(Debug, Clone)]
pub struct CredentialDirectory {
    records: Vec<CredentialRecord>,
}

impl CredentialDirectory {
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    /// The three demo accounts shown in the sign-in hint.
    pub fn built_in() -> Self {
        Self::new(vec![
            CredentialRecord::new("doctor@solum.com", "Test123!"),
            CredentialRecord::new("admin@solum.com", "Admin2024#"),
            CredentialRecord::new("test@example.com", "Pass123$"),
        ])
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    /// Returns true if some record has exactly this email.
    pub fn contains_email(&self, email: &str) -> bool {
        self.records.iter().any(|record| record.email == email)
    }

    /// Returns true if some record has exactly this email and password.
    pub fn credentials_match(&self, email: &str, password: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.email == email && record.password == password)
    }
}

impl Default for CredentialDirectory {
    fn default() -> Self {
        Self::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_pairs_match() {
        let directory = CredentialDirectory::built_in();
        for record in directory.records().to_vec() {
            assert!(directory.contains_email(&record.email));
            assert!(directory.credentials_match(&record.email, &record.password));
            // Any suffix breaks the match.
            let wrong = format!("{}x", record.password);
            assert!(!directory.credentials_match(&record.email, &wrong));
        }
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let directory = CredentialDirectory::built_in();
        assert!(!directory.contains_email("Doctor@solum.com"));
        assert!(!directory.credentials_match("doctor@solum.com", "test123!"));
    }

    #[test]
    fn unknown_email_is_absent() {
        let directory = CredentialDirectory::built_in();
        assert!(!directory.contains_email("notfound@example.com"));
    }
}

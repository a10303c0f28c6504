//! Account settings and credential handling for the settings page.

use getset::Getters;
use thiserror::Error;
use tracing::debug;

use crate::entities::StaffRole;

pub type Result<T> = std::result::Result<T, PasswordError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("New passwords do not match")]
    ConfirmationMismatch,
}

/// The signed-in user's profile as shown on the settings page.
///
/// There is no sign-in flow; the session starts from a fixed profile and the
/// email address is not editable.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Account {
    email: String,
    role: StaffRole,
    role_code: String,
}

impl Account {
    /// Apply the general-settings form. Only the role and role code are
    /// editable.
    pub fn update(&mut self, role: StaffRole, role_code: impl Into<String>) {
        self.role = role;
        self.role_code = role_code.into();
        debug!(role = %self.role, "account settings updated");
    }
}

impl Default for Account {
    fn default() -> Self {
        Self {
            email: "manager@paddock.example".into(),
            role: StaffRole::Manager,
            role_code: "M00-001".into(),
        }
    }
}

/// The account password, held only for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct Credentials {
    password: String,
}

impl Credentials {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Replace the password when the two entries agree. A mismatch changes
    /// nothing.
    pub fn change(&mut self, new: &str, confirm: &str) -> Result<()> {
        if new != confirm {
            return Err(PasswordError::ConfirmationMismatch);
        }

        self.password = new.to_owned();
        debug!("password changed");

        Ok(())
    }

    pub fn verify(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("paddock")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_update_settings() {
        let mut account = Account::default();

        account.update(StaffRole::Scientist, "S02-014");

        assert_eq!(*account.role(), StaffRole::Scientist);
        assert_eq!(account.role_code(), "S02-014");
        assert_eq!(account.email(), "manager@paddock.example");
    }

    #[test]
    fn test_password_mismatch_changes_nothing() {
        let mut credentials = Credentials::new("original");

        let err = credentials.change("brand-new", "brand-mew").unwrap_err();

        assert_eq!(err, PasswordError::ConfirmationMismatch);
        assert!(credentials.verify("original"));
        assert!(!credentials.verify("brand-new"));
    }

    #[test]
    fn test_password_change() {
        let mut credentials = Credentials::new("original");

        credentials.change("brand-new", "brand-new").unwrap();

        assert!(credentials.verify("brand-new"));
        assert!(!credentials.verify("original"));
    }
}

use serde::{Deserialize, Serialize};

use storeops_core::{DomainError, DomainResult, Entity, UserId, ValueObject};

/// Email address value object.
///
/// Compared by value. Construction validates shape; uniqueness across the
/// system is the persistence layer's responsibility, not this type's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    ///
    /// The address is trimmed; it must be non-empty and contain an `@`.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }
        if !trimmed.contains('@') {
            return Err(DomainError::validation("email must contain '@'"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Entity: User.
///
/// # Invariants
/// - The email address is non-empty (enforced by [`Email`]) and unique
///   system-wide (enforced by the persistence layer).
///
/// Users are created and activated externally; the order-placement flow only
/// reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Email,
    active: bool,
}

impl User {
    /// Create a new, inactive user.
    pub fn new(id: UserId, email: Email) -> Self {
        Self {
            id,
            email,
            active: false,
        }
    }

    pub fn id_typed(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the user as active. Idempotent.
    pub fn activate(&mut self) {
        self.active = true;
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_validated() {
        let email = Email::parse("  ada@example.com  ").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
    }

    #[test]
    fn empty_email_is_rejected() {
        let err = Email::parse("   ").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("empty")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let err = Email::parse("ada.example.com").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains('@')),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn emails_compare_by_value() {
        let a = Email::parse("ada@example.com").unwrap();
        let b = Email::parse("ada@example.com").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn new_user_starts_inactive_and_can_be_activated() {
        let mut user = User::new(UserId::new(1), Email::parse("ada@example.com").unwrap());
        assert!(!user.is_active());

        user.activate();
        assert!(user.is_active());

        // Activation is idempotent.
        user.activate();
        assert!(user.is_active());
    }

    #[test]
    fn user_exposes_its_identity() {
        let user = User::new(UserId::new(7), Email::parse("g@example.com").unwrap());
        assert_eq!(user.id_typed(), UserId::new(7));
        assert_eq!(*Entity::id(&user), UserId::new(7));
    }
}

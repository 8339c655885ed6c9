//! Identifier newtypes and validated value objects.
//!
//! All identifiers in the system are opaque strings handed out by the
//! document store. Wrapping them prevents mixing up event, guest, guard,
//! and user identifiers, and the `parse` factories reject blank input so a
//! constructed value is always usable as a document key.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

fn non_blank(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Blank { field })
    } else {
        Ok(value)
    }
}

/// Unique identifier for an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates an event ID from an existing string, rejecting blank input.
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_blank(id.into(), "event id")?))
    }

    /// Creates a new random event ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a guest within an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(String);

impl GuestId {
    /// Creates a guest ID from an existing string, rejecting blank input.
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_blank(id.into(), "guest id")?))
    }

    /// Creates a new random guest ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for GuestId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a guard operator performing check-ins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuardId(String);

impl GuardId {
    /// Creates a guard ID from an existing string, rejecting blank input.
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_blank(id.into(), "guard id")?))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GuardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for GuardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user ID from an existing string, rejecting blank input.
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(non_blank(id.into(), "user id")?))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated email address.
///
/// Construction goes through [`Email::parse`]; there is no way to obtain an
/// `Email` holding a value that failed validation. The check is shallow
/// (local part, `@`, domain); deliverability is the auth backend's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validates and wraps an email address.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Blank { field: "email" });
        }
        let mut parts = value.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(ValidationError::InvalidEmail { value });
        }
        Ok(Self(value))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_generate_creates_unique_ids() {
        let id1 = EventId::generate();
        let id2 = EventId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn event_id_parse_preserves_value() {
        let id = EventId::parse("evt-123").unwrap();
        assert_eq!(id.as_str(), "evt-123");
    }

    #[test]
    fn event_id_rejects_blank_input() {
        assert_eq!(
            EventId::parse(""),
            Err(ValidationError::Blank { field: "event id" })
        );
        assert_eq!(
            EventId::parse("   "),
            Err(ValidationError::Blank { field: "event id" })
        );
    }

    #[test]
    fn guest_id_rejects_blank_input() {
        assert!(GuestId::parse("").is_err());
        assert!(GuestId::parse("g-1").is_ok());
    }

    #[test]
    fn guard_id_rejects_blank_input() {
        assert!(GuardId::parse("\t").is_err());
        assert_eq!(GuardId::parse("guard-7").unwrap().as_str(), "guard-7");
    }

    #[test]
    fn user_id_rejects_blank_input() {
        assert!(UserId::parse("").is_err());
        assert_eq!(UserId::parse("u-1").unwrap().as_str(), "u-1");
    }

    #[test]
    fn email_accepts_plausible_addresses() {
        let email = Email::parse("ada@example.com").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
    }

    #[test]
    fn email_rejects_blank_and_malformed_input() {
        assert_eq!(
            Email::parse(""),
            Err(ValidationError::Blank { field: "email" })
        );
        assert!(matches!(
            Email::parse("no-at-sign"),
            Err(ValidationError::InvalidEmail { .. })
        ));
        assert!(matches!(
            Email::parse("@example.com"),
            Err(ValidationError::InvalidEmail { .. })
        ));
        assert!(matches!(
            Email::parse("ada@"),
            Err(ValidationError::InvalidEmail { .. })
        ));
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = EventId::parse("evt-9").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"evt-9\"");
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn validation_error_messages_name_the_field() {
        let err = ValidationError::Blank { field: "event id" };
        assert_eq!(err.to_string(), "event id must not be blank");
    }
}

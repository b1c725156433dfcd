use crate::utils::error::ValidationError;
use crate::utils::validation::{EMAIL_MAX_LENGTH, EMAIL_PATTERN};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMPLOYEE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9-]{1,50}$").expect("employee id pattern is a valid regex")
});

/// Identifier of an employee: 1 to 50 ASCII letters, digits or hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::invalid_format(
                "id",
                format!(
                    "'{}' must be 1-50 characters of letters, digits or hyphens",
                    value
                ),
            ));
        }
        Ok(Self(value))
    }

    /// Uses the supplied id when present, otherwise generates one.
    pub fn create(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            Some(value) => Self::new(value),
            None => Self::generate(),
        }
    }

    /// 128 random bits rendered as 32 hex digits, passed through the same
    /// check as a caller-supplied id.
    pub fn generate() -> Result<Self, ValidationError> {
        Self::new(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn is_valid(value: &str) -> bool {
        EMPLOYEE_ID_PATTERN.is_match(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email address, stored trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let normalized = value.trim().to_lowercase();

        if normalized.chars().count() > EMAIL_MAX_LENGTH {
            return Err(ValidationError::invalid_format(
                "email",
                format!("must not exceed {} characters", EMAIL_MAX_LENGTH),
            ));
        }
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(ValidationError::invalid_format(
                "email",
                format!("'{}' is not a valid email address", normalized),
            ));
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or_default()
    }

    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(l, _)| l).unwrap_or_default()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ValidationErrorKind;

    #[test]
    fn test_employee_id_accepts_valid_values() {
        for value in ["EMP-123", "a", "0", "-", "x".repeat(50).as_str()] {
            let id = EmployeeId::new(value).unwrap();
            assert_eq!(id.value(), value);
            assert_eq!(id.to_string(), value);
        }
    }

    #[test]
    fn test_employee_id_rejects_invalid_values() {
        for value in ["", "EMP 123", "EMP_123", "émp", "x".repeat(51).as_str(), "id/../x"] {
            let err = EmployeeId::new(value).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::InvalidFormat);
            assert_eq!(err.field, "id");
        }
    }

    #[test]
    fn test_generated_ids_are_valid_and_distinct() {
        let first = EmployeeId::create(None).unwrap();
        let second = EmployeeId::create(None).unwrap();
        assert!(EmployeeId::is_valid(first.value()));
        assert_eq!(first.value().len(), 32);
        assert_ne!(first, second);
    }

    #[test]
    fn test_employee_id_equality_is_by_value() {
        assert_eq!(
            EmployeeId::create(Some("EMP-1")).unwrap(),
            EmployeeId::new("EMP-1").unwrap()
        );
    }

    #[test]
    fn test_email_is_normalized() {
        let email = Email::new("  John.Doe@EXAMPLE.com ").unwrap();
        assert_eq!(email.value(), "john.doe@example.com");
        assert_eq!(email.to_string(), "john.doe@example.com");
        assert_eq!(email, Email::new("john.doe@example.com").unwrap());
    }

    #[test]
    fn test_email_parts_rebuild_the_value() {
        let email = Email::new("Jane@Corp.Example.org").unwrap();
        assert_eq!(email.local_part(), "jane");
        assert_eq!(email.domain(), "corp.example.org");
        assert_eq!(
            format!("{}@{}", email.local_part(), email.domain()),
            email.value()
        );
    }

    #[test]
    fn test_email_rejects_invalid_values() {
        for value in ["", "plain", "user@", "@example.com", "user@example", "a b@c.d"] {
            let err = Email::new(value).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::InvalidFormat);
            assert_eq!(err.field, "email");
        }

        let too_long = format!("{}@example.com", "a".repeat(250));
        assert!(Email::new(&too_long).is_err());
    }
}

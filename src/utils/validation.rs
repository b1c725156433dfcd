use crate::utils::error::{EmployeeError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EmployeeError::config(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EmployeeError::config(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(EmployeeError::config(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(EmployeeError::config(
            field_name,
            format!("Value must be at least {}, got {}", min_value, value),
        ));
    }
    Ok(())
}

pub(crate) static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub const EMAIL_MAX_LENGTH: usize = 254;
const EMAIL_MIN_LENGTH: usize = 3;
const LOCAL_PART_MAX_LENGTH: usize = 64;
const DOMAIN_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Detailed email check that lists every rule an address breaks.
///
/// Stricter than [`crate::domain::value_objects::Email`]: it also looks at the
/// local part and domain label structure, which is useful for form feedback.
pub struct EmailValidator;

impl EmailValidator {
    pub fn validate(email: &str) -> EmailValidationReport {
        let mut errors = Vec::new();

        let trimmed = email.trim();
        if trimmed.is_empty() {
            errors.push("Email is required".to_string());
            return EmailValidationReport {
                is_valid: false,
                errors,
            };
        }

        let length = trimmed.chars().count();
        if length < EMAIL_MIN_LENGTH {
            errors.push("Email is too short".to_string());
        }
        if length > EMAIL_MAX_LENGTH {
            errors.push(format!(
                "Email exceeds maximum length of {} characters",
                EMAIL_MAX_LENGTH
            ));
        }

        if !EMAIL_PATTERN.is_match(trimmed) {
            errors.push("Email format is invalid".to_string());
        }

        let mut parts = trimmed.split('@');
        let local_part = parts.next().unwrap_or_default();
        let domain = parts.next();

        if local_part.chars().count() > LOCAL_PART_MAX_LENGTH {
            errors.push(format!(
                "Local part exceeds maximum length of {} characters",
                LOCAL_PART_MAX_LENGTH
            ));
        }

        if let Some(domain) = domain.filter(|d| !d.is_empty()) {
            if domain.chars().count() > DOMAIN_MAX_LENGTH {
                errors.push(format!(
                    "Domain exceeds maximum length of {} characters",
                    DOMAIN_MAX_LENGTH
                ));
            }
            if domain.starts_with('.') || domain.ends_with('.') {
                errors.push("Domain cannot start or end with a dot".to_string());
            }
            if domain.contains("..") {
                errors.push("Domain cannot contain consecutive dots".to_string());
            }
        }

        EmailValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(email: &str) -> bool {
        Self::validate(email).is_valid
    }

    pub fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn domain(email: &str) -> Option<&str> {
        email.split_once('@').map(|(_, domain)| domain)
    }

    pub fn local_part(email: &str) -> Option<&str> {
        email.split_once('@').map(|(local, _)| local)
    }
}

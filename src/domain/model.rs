//! Employee entity and the input shapes used to create or change one.
//!
//! An [`Employee`] only exists in a valid state: [`Employee::create`] is the
//! single gate, and changes go through [`Employee::with_changes`], which builds
//! a fresh instance instead of mutating the old one.

use crate::domain::value_objects::{Email, EmployeeId};
use crate::utils::error::{ValidationError, ValidationErrorKind};
use chrono::{DateTime, Utc};

pub const NAME_MAX_LENGTH: usize = 100;

/// Raw field values accepted by [`Employee::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProps {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub hire_date: DateTime<Utc>,
}

/// Fields of an employee that does not have an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub hire_date: DateTime<Utc>,
}

/// Partial set of fields for an update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<DateTime<Utc>>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.position.is_none()
            && self.hire_date.is_none()
    }

    /// An update that changes nothing is rejected rather than sent.
    pub fn ensure_not_empty(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::new(
                "changes",
                ValidationErrorKind::EmptyUpdate,
                "at least one field must be supplied",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    email: Email,
    department: String,
    position: String,
    hire_date: DateTime<Utc>,
}

impl Employee {
    pub fn create(props: EmployeeProps) -> Result<Self, ValidationError> {
        let id = EmployeeId::create(props.id.as_deref())?;
        let email = Email::new(&props.email)?;
        validate_name(&props.name)?;
        validate_required("department", &props.department)?;
        validate_required("position", &props.position)?;

        Ok(Self {
            id,
            name: props.name,
            email,
            department: props.department,
            position: props.position,
            hire_date: props.hire_date,
        })
    }

    /// Builds a new employee with `changes` applied over the current values.
    pub fn with_changes(&self, changes: &EmployeeChanges) -> Result<Self, ValidationError> {
        Self::create(EmployeeProps {
            id: Some(self.id.value().to_string()),
            name: changes.name.clone().unwrap_or_else(|| self.name.clone()),
            email: changes
                .email
                .clone()
                .unwrap_or_else(|| self.email.value().to_string()),
            department: changes
                .department
                .clone()
                .unwrap_or_else(|| self.department.clone()),
            position: changes
                .position
                .clone()
                .unwrap_or_else(|| self.position.clone()),
            hire_date: changes.hire_date.unwrap_or(self.hire_date),
        })
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn hire_date(&self) -> DateTime<Utc> {
        self.hire_date
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), ValidationError> {
    validate_required("name", name)?;
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(ValidationError::new(
            "name",
            ValidationErrorKind::TooLong,
            format!("must not exceed {} characters", NAME_MAX_LENGTH),
        ));
    }
    Ok(())
}

pub(crate) fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

use crate::adapters::http::ApiClient;
use crate::domain::model::{validate_name, validate_required};
use crate::domain::{
    Email, Employee, EmployeeChanges, EmployeeId, EmployeeProps, EmployeeRepository, NewEmployee,
};
use crate::utils::error::{EmployeeError, Result, ValidationError};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

const EMPLOYEES_PATH: &str = "/employees";

/// Employee as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub hire_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub hire_date: String,
}

/// Only the supplied fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
}

impl TryFrom<EmployeeDto> for Employee {
    type Error = ValidationError;

    fn try_from(dto: EmployeeDto) -> std::result::Result<Self, Self::Error> {
        let hire_date = parse_hire_date(&dto.hire_date)?;
        Employee::create(EmployeeProps {
            id: Some(dto.id),
            name: dto.name,
            email: dto.email,
            department: dto.department,
            position: dto.position,
            hire_date,
        })
    }
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id().to_string(),
            name: employee.name().to_string(),
            email: employee.email().to_string(),
            department: employee.department().to_string(),
            position: employee.position().to_string(),
            hire_date: format_hire_date(employee.hire_date()),
        }
    }
}

impl TryFrom<&NewEmployee> for CreateEmployeeRequest {
    type Error = ValidationError;

    fn try_from(employee: &NewEmployee) -> std::result::Result<Self, Self::Error> {
        let email = Email::new(&employee.email)?;
        validate_name(&employee.name)?;
        validate_required("department", &employee.department)?;
        validate_required("position", &employee.position)?;

        Ok(Self {
            name: employee.name.clone(),
            email: email.value().to_string(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            hire_date: format_hire_date(employee.hire_date),
        })
    }
}

impl TryFrom<&EmployeeChanges> for UpdateEmployeeRequest {
    type Error = ValidationError;

    fn try_from(changes: &EmployeeChanges) -> std::result::Result<Self, Self::Error> {
        changes.ensure_not_empty()?;

        if let Some(name) = &changes.name {
            validate_name(name)?;
        }
        if let Some(department) = &changes.department {
            validate_required("department", department)?;
        }
        if let Some(position) = &changes.position {
            validate_required("position", position)?;
        }
        let email = changes
            .email
            .as_deref()
            .map(Email::new)
            .transpose()?
            .map(|email| email.value().to_string());

        Ok(Self {
            name: changes.name.clone(),
            email,
            department: changes.department.clone(),
            position: changes.position.clone(),
            hire_date: changes.hire_date.map(format_hire_date),
        })
    }
}

/// ISO-8601 with millisecond precision, e.g. `2023-01-01T00:00:00.000Z`.
pub fn format_hire_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_hire_date(value: &str) -> std::result::Result<DateTime<Utc>, ValidationError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or_else(|| {
            ValidationError::invalid_format(
                "hireDate",
                format!("'{}' is not an ISO-8601 date", value),
            )
        })
}

/// [`EmployeeRepository`] backed by the remote Employee API.
#[derive(Debug, Clone)]
pub struct HttpEmployeeRepository {
    client: ApiClient,
}

impl HttpEmployeeRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn item_path(id: &EmployeeId) -> String {
        format!("{}/{}", EMPLOYEES_PATH, id)
    }
}

#[async_trait]
impl EmployeeRepository for HttpEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        let dtos: Vec<EmployeeDto> = self.client.get(EMPLOYEES_PATH).await?;
        tracing::debug!("Fetched {} employees", dtos.len());

        let employees = dtos
            .into_iter()
            .map(Employee::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>> {
        match self.client.get::<EmployeeDto>(&Self::item_path(id)).await {
            Ok(dto) => Ok(Some(Employee::try_from(dto)?)),
            Err(EmployeeError::Api(error)) if error.is_not_found() => {
                tracing::debug!("Employee {} not found", id);
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
        let request = CreateEmployeeRequest::try_from(employee)?;
        let dto: EmployeeDto = self.client.post(EMPLOYEES_PATH, &request).await?;

        let created = Employee::try_from(dto)?;
        tracing::info!("Created employee {}", created.id());
        Ok(created)
    }

    async fn update(&self, id: &EmployeeId, changes: &EmployeeChanges) -> Result<Employee> {
        let request = UpdateEmployeeRequest::try_from(changes)?;
        let dto: EmployeeDto = self.client.put(&Self::item_path(id), &request).await?;

        let updated = Employee::try_from(dto)?;
        tracing::info!("Updated employee {}", updated.id());
        Ok(updated)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<()> {
        self.client
            .delete_discarding_body(&Self::item_path(id))
            .await?;
        tracing::info!("Deleted employee {}", id);
        Ok(())
    }
}

use crate::domain::{Employee, EmployeeRepository, NewEmployee};
use crate::utils::error::Result;

/// Registers a new employee through whatever repository it is given.
///
/// Adds no validation or retries of its own: the repository's result, or its
/// error, is returned as is.
pub struct CreateEmployeeUseCase<R: EmployeeRepository> {
    repository: R,
}

impl<R: EmployeeRepository> CreateEmployeeUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, employee: &NewEmployee) -> Result<Employee> {
        tracing::debug!("Creating employee {}", employee.name);
        self.repository.create(employee).await
    }
}

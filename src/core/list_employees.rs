use crate::domain::{Employee, EmployeeRepository};
use crate::utils::error::Result;

pub struct ListEmployeesUseCase<R: EmployeeRepository> {
    repository: R,
}

impl<R: EmployeeRepository> ListEmployeesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Employee>> {
        let employees = self.repository.find_all().await?;
        tracing::debug!("Listed {} employees", employees.len());
        Ok(employees)
    }
}

use crate::domain::{Employee, EmployeeId, EmployeeRepository};
use crate::utils::error::Result;

/// Looks up one employee; `Ok(None)` when the repository has no such id.
pub struct GetEmployeeUseCase<R: EmployeeRepository> {
    repository: R,
}

impl<R: EmployeeRepository> GetEmployeeUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &EmployeeId) -> Result<Option<Employee>> {
        self.repository.find_by_id(id).await
    }
}

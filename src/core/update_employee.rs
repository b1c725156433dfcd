use crate::domain::{Employee, EmployeeChanges, EmployeeId, EmployeeRepository};
use crate::utils::error::Result;

/// Applies a partial change set. An empty change set is rejected by the
/// repository with a validation error before anything is written.
pub struct UpdateEmployeeUseCase<R: EmployeeRepository> {
    repository: R,
}

impl<R: EmployeeRepository> UpdateEmployeeUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &EmployeeId, changes: &EmployeeChanges) -> Result<Employee> {
        self.repository.update(id, changes).await
    }
}

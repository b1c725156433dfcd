use crate::domain::{EmployeeId, EmployeeRepository};
use crate::utils::error::Result;

pub struct DeleteEmployeeUseCase<R: EmployeeRepository> {
    repository: R,
}

impl<R: EmployeeRepository> DeleteEmployeeUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &EmployeeId) -> Result<()> {
        self.repository.delete(id).await
    }
}

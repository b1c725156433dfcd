use crate::domain::model::{Employee, EmployeeChanges, NewEmployee};
use crate::domain::value_objects::EmployeeId;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence operations the use cases depend on, independent of transport.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every employee, in the order the backing store returns them.
    async fn find_all(&self) -> Result<Vec<Employee>>;

    /// `Ok(None)` when the employee does not exist.
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>>;

    /// The backing store assigns the id.
    async fn create(&self, employee: &NewEmployee) -> Result<Employee>;

    async fn update(&self, id: &EmployeeId, changes: &EmployeeChanges) -> Result<Employee>;

    async fn delete(&self, id: &EmployeeId) -> Result<()>;
}

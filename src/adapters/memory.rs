use crate::domain::{
    Employee, EmployeeChanges, EmployeeId, EmployeeProps, EmployeeRepository, NewEmployee,
};
use crate::utils::error::{EmployeeError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local [`EmployeeRepository`]; keeps insertion order and
/// generates ids for new employees.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<Vec<Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Arc::new(RwLock::new(employees)),
        }
    }

    pub async fn len(&self) -> usize {
        self.employees.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.employees.read().await.is_empty()
    }
}

fn not_found(id: &EmployeeId) -> EmployeeError {
    EmployeeError::repository(format!("Employee {} not found", id))
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.read().await.clone())
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.id() == id).cloned())
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
        let created = Employee::create(EmployeeProps {
            id: None,
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            hire_date: employee.hire_date,
        })?;

        self.employees.write().await.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &EmployeeId, changes: &EmployeeChanges) -> Result<Employee> {
        changes.ensure_not_empty()?;

        let mut employees = self.employees.write().await;
        let slot = employees
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| not_found(id))?;

        let updated = slot.with_changes(changes)?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<()> {
        let mut employees = self.employees.write().await;
        let index = employees
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| not_found(id))?;
        employees.remove(index);
        Ok(())
    }
}

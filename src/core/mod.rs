// Use cases: one business operation each, written against the repository
// port so they can run over HTTP or an in-memory store alike.

pub mod create_employee;
pub mod delete_employee;
pub mod get_employee;
pub mod list_employees;
pub mod update_employee;

pub use create_employee::CreateEmployeeUseCase;
pub use delete_employee::DeleteEmployeeUseCase;
pub use get_employee::GetEmployeeUseCase;
pub use list_employees::ListEmployeesUseCase;
pub use update_employee::UpdateEmployeeUseCase;
